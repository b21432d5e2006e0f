//! Durable key/value storage for the session.
//!
//! Only three string values are ever stored (token, user, role), so the
//! file-backed store keeps them in a single JSON object and rewrites it on
//! every change.

use crate::errors::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Process-local store, used in tests and when nothing should outlive the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by one JSON object file.
///
/// A missing file reads as an empty store; the parent directory is created
/// on first write. Reads of an unparseable file fail with
/// [`StorageError::Corrupt`], but writes discard it and start from an empty
/// object, so signing in or out always recovers the file. Each write goes
/// to a sibling temporary file that is then renamed over the original.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Current entries for a write, and whether an unreadable file was discarded.
    fn read_for_write(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
        match self.read_all() {
            Ok(entries) => Ok((entries, false)),
            Err(StorageError::Corrupt { source, .. }) => {
                warn!(
                    path = %self.path.display(),
                    error = %source,
                    "Discarding unreadable session file"
                );
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_error = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let body = serde_json::to_string_pretty(entries).map_err(|source| StorageError::Encode {
            key: "session",
            source,
        })?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, body).map_err(io_error)?;
        fs::rename(&staging, &self.path).map_err(io_error)?;

        debug!(path = %self.path.display(), keys = entries.len(), "Session file written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let (mut entries, _) = self.read_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let (mut entries, discarded) = self.read_for_write()?;
        if entries.remove(key).is_some() || discarded {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}
