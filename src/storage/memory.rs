use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::errors::Result;

use super::StorageBackend;

/// In-process storage. Clones share the same map, so a store can be reopened
/// over data written by an earlier one.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blobs: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `key` with raw bytes, bypassing any encoding.
    pub fn with_blob(self, key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.blobs.borrow_mut().insert(key.to_string(), bytes.into());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.blobs.borrow().contains_key(key)
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_contents() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.write("Items", b"[]").expect("write");
        assert!(other.contains("Items"));
        other.write("Items", b"[1]").expect("overwrite");
        assert_eq!(storage.read("Items").expect("read").as_deref(), Some(&b"[1]"[..]));
        assert!(!storage.contains("items"));
    }
}
