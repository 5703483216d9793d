pub mod json_backend;
pub mod memory;

use crate::errors::Result;

/// Local storage holding one opaque blob per key.
pub trait StorageBackend {
    /// Returns `None` when nothing has been stored under `key`.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

pub use json_backend::JsonFileStorage;
pub use memory::MemoryStorage;
