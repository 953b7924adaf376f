//! Key-value storage behind the persisted lists.
//!
//! [`KeyValueStore`] is the only way list state reaches disk. Implementations use
//! interior mutability so a single store can be shared (`Arc<dyn KeyValueStore>`)
//! between the history log, the favorites set, and any number of readers.

pub mod sqlite;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{StoreError, StoreResult};

pub use sqlite::SqliteStore;

/// Storage key of the favorites list.
pub const FAVORITES_KEY: &str = "favoriteQuoteIDs";
/// Storage key of the seen-quote history.
pub const HISTORY_KEY: &str = "seenQuoteHistory";

pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Insert or replace the value under `key`.
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Returns `Ok(())` even if the key did not exist.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Volatile store, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
