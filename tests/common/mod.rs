#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use expense_core::{storage::JsonFileStorage, ExpenseItem};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory for a single test.
pub fn setup_test_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// File-backed storage rooted in a fresh temporary directory.
pub fn setup_file_storage() -> JsonFileStorage {
    JsonFileStorage::new(setup_test_dir().join("data")).expect("create json storage backend")
}

pub fn sample_items() -> Vec<ExpenseItem> {
    vec![
        ExpenseItem::new("Coffee", "Personal", 3.50),
        ExpenseItem::new("Rent", "Business", 1200.0),
        ExpenseItem::new("Refund", "Personal", -20.0),
        ExpenseItem::new("", "", 0.0),
    ]
}
