//! # File Store
//!
//! `KeyValueStore` backed by a directory, one JSON file per key.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ~/.local/share/rocketshoes/            (FileStore::new(dir))           │
//! │  └── _RocketShoes_cart.json             ← slot "@RocketShoes:cart"      │
//! │                                                                         │
//! │  set(): write a unique temp file in dir → persist over "<file>"         │
//! │         a crash mid-write leaves the previous value readable            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::store::KeyValueStore;

/// Directory-backed key-value store.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on first
    /// write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// File backing `key`. Characters outside `[A-Za-z0-9._-]` become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => {
                debug!(path = %path.display(), bytes = value.len(), "Slot read");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(key, e))?;

        // each writer gets its own temp file, so concurrent processes never
        // interleave bytes; the last persist wins
        let path = self.path_for(key);
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| StorageError::io(key, e))?;
        tmp.write_all(value.as_bytes()).map_err(|e| StorageError::io(key, e))?;
        tmp.persist(&path).map_err(|e| StorageError::io(key, e.error))?;

        debug!(path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
