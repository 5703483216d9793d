use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    core::utils::{app_data_dir, data_dir_in, ensure_dir, write_atomic},
    errors::Result,
};

use super::StorageBackend;

const BLOB_EXTENSION: &str = "json";

/// File-backed storage keeping each key in `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    root: PathBuf,
}

impl JsonFileStorage {
    pub fn new(root: PathBuf) -> Result<Self> {
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    /// Storage rooted in the data directory of the application home.
    pub fn new_default() -> Result<Self> {
        Self::new(data_dir_in(&app_data_dir()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(key), BLOB_EXTENSION))
    }
}

impl StorageBackend for JsonFileStorage {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.blob_path(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored blob");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.blob_path(key);
        write_atomic(&path, bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "blob written");
        Ok(())
    }
}

/// Maps a key to a distinct file stem made only of `[a-z0-9_-]`.
///
/// Lowercase letters, digits and `-` are kept; every other byte becomes `_xx`
/// (lowercase hex), so distinct keys never share a file, even on
/// case-insensitive filesystems. The empty key maps to `_`.
fn canonical_name(name: &str) -> String {
    if name.is_empty() {
        return "_".into();
    }
    let mut encoded = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' | b'-' => encoded.push(char::from(byte)),
            _ => encoded.push_str(&format!("_{:02x}", byte)),
        }
    }
    encoded
}
