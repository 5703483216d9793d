use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    core::utils::{app_data_dir, config_file_in, data_dir_in, ensure_dir, write_atomic},
    errors::{ExpenseError, Result},
    expense::{ExpenseStore, DEFAULT_STORAGE_KEY},
    storage::JsonFileStorage,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding stored blobs; the application data directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub storage_key: String,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.into(),
            pretty: true,
        }
    }
}

impl Config {
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| data_dir_in(&app_data_dir()))
    }

    /// Opens the file-backed store this configuration describes.
    pub fn open_store(&self) -> Result<ExpenseStore> {
        if self.storage_key.trim().is_empty() {
            return Err(ExpenseError::Config("storage key must not be empty".into()));
        }
        let storage = JsonFileStorage::new(self.resolved_data_dir())?;
        Ok(ExpenseStore::open_with(
            storage,
            self.storage_key.clone(),
            self.pretty,
        ))
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            debug!(path = %self.path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, json.as_bytes())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
