pub mod persistence;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "expense_core=info";

/// Initializes the global tracing subscriber with sensible defaults, once per process.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let filter = match DEFAULT_DIRECTIVE.parse::<Directive>() {
            Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
            Err(_) => EnvFilter::from_default_env(),
        };

        // Another subscriber may already be installed by the host application.
        let _ = fmt().with_env_filter(filter).try_init();
        tracing::info!("Expense Core tracing initialized.");
    });
}
