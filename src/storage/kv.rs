//! Key-value string storage.
//!
//! The till persists all of its state as string values under string keys.
//! [`FileStore`] maps each key to one file inside a data directory;
//! [`MemoryStore`] backs tests and ephemeral runs.

use crate::errors::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A store of string values addressed by string keys.
///
/// Implementations replace the stored value wholesale on every `set`; callers
/// never observe a partial write.
pub trait KeyValueStore {
    /// Reads the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`; removing an absent key is not
    /// an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// File-backed store: one file per key inside a data directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| Error::Persistence {
            message: format!("Failed to create data directory '{}': {e}", root.display()),
        })?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// The directory this store keeps its files in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Persistence {
                message: format!("Failed to read key '{key}': {e}"),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        // Write-then-rename so readers never see a half-written value.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| Error::Persistence {
            message: format!("Failed to write key '{key}': {e}"),
        })?;
        fs::rename(&tmp, &path).map_err(|e| Error::Persistence {
            message: format!("Failed to replace key '{key}': {e}"),
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Persistence {
                message: format!("Failed to remove key '{key}': {e}"),
            }),
        }
    }
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
