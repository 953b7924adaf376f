//! Most-recent-first log of quotes shown to the user.
//!
//! Every write goes through [`move_to_front`]: any previous occurrence of the id
//! is removed before it is inserted at index 0, so the log never holds a
//! duplicate and its order is the order of last display.

use crate::error::StoreResult;

use super::list::PersistentList;
use super::types::QuoteId;

/// Remove every occurrence of `id` and reinsert it at the front. Other ids keep
/// their relative order.
pub fn move_to_front(ids: &mut Vec<QuoteId>, id: QuoteId) {
    ids.retain(|existing| *existing != id);
    ids.insert(0, id);
}

#[derive(Debug, Clone)]
pub struct HistoryLog {
    list: PersistentList,
    max_entries: Option<usize>,
}

impl HistoryLog {
    /// Keep at most `max_entries` ids, dropping the oldest. `0` means unbounded.
    pub fn with_limit(list: PersistentList, max_entries: usize) -> Self {
        Self {
            list,
            max_entries: (max_entries > 0).then_some(max_entries),
        }
    }

    /// The underlying storage binding.
    pub fn list(&self) -> &PersistentList {
        &self.list
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    /// Record that `id` was just shown. Afterwards it sits at position 0, once.
    pub fn record_seen(&self, id: QuoteId) -> StoreResult<()> {
        let mut ids = self.list.load();
        move_to_front(&mut ids, id);
        if let Some(max) = self.max_entries {
            if ids.len() > max {
                tracing::debug!(dropped = ids.len() - max, max, "history trimmed");
                ids.truncate(max);
            }
        }
        self.list.save(&ids)?;
        tracing::debug!(%id, len = ids.len(), "quote recorded as seen");
        Ok(())
    }

    /// Replace the history with the empty list. Irreversible.
    pub fn clear(&self) -> StoreResult<()> {
        self.list.save(&[])?;
        tracing::info!("history cleared");
        Ok(())
    }

    /// Snapshot, most recent first.
    pub fn current(&self) -> Vec<QuoteId> {
        self.list.load()
    }
}
