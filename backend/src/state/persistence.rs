// Preference persistence module
// Handles saving and loading the preference store to/from a JSON file

use super::store::{PreferenceStore, StoreKey, StoreValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Current on-disk format version
const FORMAT_VERSION: u32 = 1;

/// Error types for persistence operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// File I/O error
    #[error("IO Error: {0}")]
    IoError(String),
    /// JSON serialization/deserialization error
    #[error("JSON Error: {0}")]
    JsonError(String),
    /// Invalid data format
    #[error("Invalid Data: {0}")]
    InvalidData(String),
}

/// Serializable structure for the preference file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    /// Version of the file format (for future migration support)
    version: u32,
    /// Map of key name to value. Keys this version does not know are kept.
    values: BTreeMap<String, StoreValue>,
}

/// Preference store backed by a JSON file
///
/// The whole document is rewritten on every `set`, so each write is durable
/// on its own.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, StoreValue>,
}

impl FileStore {
    /// Open the store at `path`
    ///
    /// A missing file yields an empty store; the file is created on the first
    /// write.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            tracing::debug!("No preference file at {}, starting empty", path.display());
            return Ok(Self::empty(path));
        }

        let json =
            fs::read_to_string(&path).map_err(|e| PersistenceError::IoError(e.to_string()))?;

        let data: PreferenceData =
            serde_json::from_str(&json).map_err(|e| PersistenceError::JsonError(e.to_string()))?;

        if data.version != FORMAT_VERSION {
            return Err(PersistenceError::InvalidData(format!(
                "Unsupported preference file version: {}",
                data.version
            )));
        }

        tracing::debug!(
            "Loaded {} preference values from {}",
            data.values.len(),
            path.display()
        );
        Ok(Self {
            path,
            values: data.values,
        })
    }

    /// Create an empty store that will write to `path`, ignoring any existing file
    pub fn empty<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            values: BTreeMap::new(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), PersistenceError> {
        let data = PreferenceData {
            version: FORMAT_VERSION,
            values: self.values.clone(),
        };

        let json = serde_json::to_string_pretty(&data)
            .map_err(|e| PersistenceError::JsonError(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::IoError(e.to_string()))?;
        }

        fs::write(&self.path, json).map_err(|e| PersistenceError::IoError(e.to_string()))
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: StoreKey) -> Option<StoreValue> {
        self.values.get(key.as_str()).cloned()
    }

    fn set(&mut self, key: StoreKey, value: StoreValue) -> Result<(), PersistenceError> {
        let previous = self.values.insert(key.as_str().to_string(), value);

        if let Err(e) = self.save() {
            match previous {
                Some(old) => self.values.insert(key.as_str().to_string(), old),
                None => self.values.remove(key.as_str()),
            };
            tracing::warn!("Failed to persist {}: {}", key.as_str(), e);
            return Err(e);
        }

        tracing::debug!("Persisted {}", key.as_str());
        Ok(())
    }
}
