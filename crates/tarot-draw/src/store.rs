//! Key-value persistence for the device identity and the daily cache.
//!
//! Callers treat every [`StoreError`] as "nothing stored": a failed read
//! falls back to regeneration and a failed write is logged and dropped.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure.
    #[error("store IO error: {0}")]
    Io(#[from] io::Error),

    /// A value could not be encoded or decoded.
    #[error("store JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A string-to-string store that survives between sessions.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete a value. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

/// In-process store, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed store: one file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, or at [`default_data_dir`] when `None`.
    ///
    /// Creates the directory if it does not exist.
    pub fn open(dir: Option<PathBuf>) -> StoreResult<Self> {
        let dir = dir.unwrap_or_else(default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory values are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(file)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes to a temp file first and renames, so a crash never leaves a
    /// truncated value behind.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let dest = self.path_for(key);
        let tmp = dest.with_extension("tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &dest)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Platform local data directory for Daily Light Tarot.
pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_local_dir() {
        data.join("daily-light-tarot")
    } else {
        PathBuf::from(".daily-light-tarot")
    }
}
