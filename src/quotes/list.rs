//! A single id list bound to one storage key.
//!
//! [`PersistentList`] is what the history log and favorites set are built on. It
//! never caches: every [`load`](PersistentList::load) re-reads the backend, so any
//! number of readers see the latest completed write.

use std::sync::Arc;

use crate::diagnostics::{Diagnostics, ListFault};
use crate::error::StoreResult;
use crate::storage::KeyValueStore;

use super::codec;
use super::types::QuoteId;

#[derive(Clone)]
pub struct PersistentList {
    key: String,
    store: Arc<dyn KeyValueStore>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl PersistentList {
    pub fn new(
        key: impl Into<String>,
        store: Arc<dyn KeyValueStore>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        Self {
            key: key.into(),
            store,
            diagnostics,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current persisted sequence. Missing, unreadable, or malformed blobs all
    /// yield the empty list; the latter two are reported to diagnostics.
    pub fn load(&self) -> Vec<QuoteId> {
        let blob = match self.store.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                self.diagnostics.report(&ListFault::Read {
                    key: self.key.clone(),
                    error: e.to_string(),
                });
                return Vec::new();
            }
        };

        match codec::try_decode(&blob) {
            Ok(ids) => ids,
            Err(e) => {
                self.diagnostics.report(&ListFault::Decode {
                    key: self.key.clone(),
                    error: e.to_string(),
                });
                Vec::new()
            }
        }
    }

    /// Persist `ids`. An encoding failure stores the empty blob (and is reported);
    /// only backend write failures are returned.
    pub fn save(&self, ids: &[QuoteId]) -> StoreResult<()> {
        let blob = match codec::try_encode(ids) {
            Ok(blob) => blob,
            Err(e) => {
                self.diagnostics.report(&ListFault::Encode {
                    key: self.key.clone(),
                    error: e.to_string(),
                });
                Vec::new()
            }
        };
        self.store.put(&self.key, &blob)?;
        tracing::debug!(key = %self.key, len = ids.len(), "list saved");
        Ok(())
    }

    /// Drop the key from the backend entirely.
    pub fn remove(&self) -> StoreResult<()> {
        self.store.remove(&self.key)
    }
}

impl std::fmt::Debug for PersistentList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentList").field("key", &self.key).finish()
    }
}
