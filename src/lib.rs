#![doc(test(attr(deny(warnings))))]

//! Expense Core keeps an ordered, observable list of expense records and
//! mirrors it to local storage as a JSON blob.
//!
//! ```
//! use expense_core::{storage::MemoryStorage, ExpenseItem, ExpenseStore};
//!
//! let mut store = ExpenseStore::open(MemoryStorage::new(), "Items");
//! store.add(ExpenseItem::new("Coffee", "Personal", 3.5));
//! assert_eq!(store.len(), 1);
//! ```

pub mod config;
pub mod core;
pub mod errors;
pub mod expense;
pub mod storage;
pub mod utils;

pub use errors::{ExpenseError, Result};
pub use expense::{ExpenseItem, ExpenseStore, StoreEvent, SubscriptionId};

/// Initializes global tracing and emits a startup info log. Repeat calls are no-ops.
pub fn init() {
    utils::init_tracing();
}
