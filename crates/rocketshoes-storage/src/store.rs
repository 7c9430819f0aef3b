//! # Key-Value Store
//!
//! The storage port and its in-memory adapter.
//!
//! The port mirrors a browser-style local storage: string keys, string
//! values, synchronous access. Writes replace the whole value.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StorageResult;

/// Persistent string slots keyed by name.
///
/// Implementations must be shareable across tasks (`Send + Sync`); the cart
/// store holds one behind an `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the slot is empty.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrites the slot.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Clears the slot. Clearing an empty slot is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Process-local store. Used by tests and as a fallback when no data
/// directory is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one slot already filled.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        MemoryStore {
            slots: Mutex::new(slots),
        }
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.slots().remove(key);
        Ok(())
    }
}
