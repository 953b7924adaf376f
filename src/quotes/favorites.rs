//! User-saved quotes, in the order they were saved.
//!
//! Duplicates are prevented when adding, not when reading: a blob written by
//! something else that contains the same id twice is returned as-is.

use std::collections::BTreeSet;

use crate::error::StoreResult;

use super::list::PersistentList;
use super::types::QuoteId;

/// Remove the elements at `positions`, all interpreted against `ids` as it was
/// before the call. Out-of-range positions are ignored. Returns how many
/// elements were removed.
pub fn remove_positions(ids: &mut Vec<QuoteId>, positions: &BTreeSet<usize>) -> usize {
    let before = ids.len();
    let mut index = 0;
    ids.retain(|_| {
        let keep = !positions.contains(&index);
        index += 1;
        keep
    });
    before - ids.len()
}

#[derive(Debug, Clone)]
pub struct FavoritesSet {
    list: PersistentList,
}

impl FavoritesSet {
    pub fn new(list: PersistentList) -> Self {
        Self { list }
    }

    /// Append `id` unless it is already saved. Returns `true` if the list changed.
    pub fn add(&self, id: QuoteId) -> StoreResult<bool> {
        let mut ids = self.list.load();
        if ids.contains(&id) {
            tracing::debug!(%id, "already a favorite");
            return Ok(false);
        }
        ids.push(id);
        self.list.save(&ids)?;
        tracing::info!(%id, "favorite added");
        Ok(true)
    }

    /// Batch removal by zero-based position. Returns the number removed.
    pub fn remove_at(&self, positions: &BTreeSet<usize>) -> StoreResult<usize> {
        if positions.is_empty() {
            return Ok(0);
        }
        let mut ids = self.list.load();
        let removed = remove_positions(&mut ids, positions);
        if removed > 0 {
            self.list.save(&ids)?;
        }
        let ignored = positions.len() - removed;
        tracing::info!(removed, ignored, "favorites removed");
        Ok(removed)
    }

    /// Snapshot, insertion order.
    pub fn all(&self) -> Vec<QuoteId> {
        self.list.load()
    }

    /// The underlying storage binding.
    pub fn list(&self) -> &PersistentList {
        &self.list
    }
}
