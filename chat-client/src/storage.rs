//! File-backed profile store for the current username.
//!
//! DESIGN
//! ======
//! The store is one JSON object on disk, rewritten whole on every `set`.
//! Reads treat a missing file and a missing key the same way; a corrupt
//! store file surfaces as an error on writes and reads as empty.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::fs;
use std::io;
use std::path::PathBuf;

use serde_json::{Map, Value};

/// Error returned by [`Storage::set`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store file exists but could not be read.
    #[error("failed to read profile store: {0}")]
    Read(#[source] io::Error),
    /// The store file could not be written.
    #[error("failed to write profile store: {0}")]
    Write(#[source] io::Error),
    /// The store file is not valid JSON.
    #[error("profile store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// The store file holds JSON that is not an object.
    #[error("profile store is not a JSON object")]
    NotAnObject,
}

/// Key/value profile store persisted as a single JSON object.
#[derive(Clone, Debug)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Create a handle for the store at `path`; nothing is touched on disk.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read one key. A missing file, missing key, or unreadable store all
    /// read as `None`; unreadable stores are logged.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(entries) => entries
                .get(key)
                .and_then(Value::as_str)
                .map(ToOwned::to_owned),
            Err(error) => {
                tracing::debug!(error = %error, path = %self.path.display(), "profile store read failed");
                None
            }
        }
    }

    /// Write one key, creating the store file (and parent directory) if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store cannot be read back,
    /// parsed, or rewritten.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_owned(), Value::String(value.to_owned()));

        let rendered = serde_json::to_string_pretty(&Value::Object(entries))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StorageError::Write)?;
            }
        }
        fs::write(&self.path, rendered).map_err(StorageError::Write)
    }

    fn load(&self) -> Result<Map<String, Value>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(error) => return Err(StorageError::Read(error)),
        };

        match serde_json::from_str::<Value>(&text)? {
            Value::Object(entries) => Ok(entries),
            _ => Err(StorageError::NotAnObject),
        }
    }
}
