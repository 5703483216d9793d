//! Expense records and the observable store that persists them.

pub mod item;
pub mod store;

pub use item::{ExpenseItem, EXPENSE_TYPES};
pub use store::{ExpenseStore, StoreCallback, StoreEvent, SubscriptionId, DEFAULT_STORAGE_KEY};
