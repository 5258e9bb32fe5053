//! Key-value store
//!
//! The storage contract is a plain string-keyed get/set pair. The file
//! store keeps one JSON file per key under the platform data directory.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String-keyed get/set storage
pub trait KvStore {
    /// Read the raw value for a key, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;
    /// Overwrite the value for a key wholesale
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store, one file per key
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Open the store at the platform data directory
    pub fn open_default() -> Self {
        use directories::ProjectDirs;

        let dir = if let Some(proj_dirs) = ProjectDirs::from("com", "geartrack", "Geartrack") {
            proj_dirs.data_local_dir().to_path_buf()
        } else {
            // Fallback to current directory
            PathBuf::from("./geartrack-data")
        };
        Self { dir }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
