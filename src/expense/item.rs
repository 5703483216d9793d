use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category labels offered by entry forms. Advisory only; any label is accepted.
pub const EXPENSE_TYPES: [&str; 2] = ["Personal", "Business"];

/// A single tracked expenditure.
///
/// `id` only exists for identity and diffing. No field is validated: empty
/// names, arbitrary labels and non-positive amounts are all accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
}

impl ExpenseItem {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, amount: f64) -> Self {
        Self::with_id(Uuid::new_v4(), name, kind, amount)
    }

    pub fn with_id(
        id: Uuid,
        name: impl Into<String>,
        kind: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            amount,
        }
    }

    /// The record appended by the quick-add action before any details are entered.
    pub fn placeholder() -> Self {
        Self::new("name", "personal", 5.0)
    }
}
