//! Wiring of the catalog, history log, and favorites set over one store.

use std::sync::Arc;

use crate::diagnostics::Diagnostics;
use crate::error::StoreResult;
use crate::storage::{KeyValueStore, FAVORITES_KEY, HISTORY_KEY};

use super::catalog::Catalog;
use super::favorites::FavoritesSet;
use super::history::HistoryLog;
use super::list::PersistentList;
use super::session::InspirationSession;

/// Everything a presentation layer needs: the catalog plus both persisted lists,
/// sharing one injected store and one diagnostics sink.
#[derive(Debug, Clone)]
pub struct QuoteBook {
    catalog: Catalog,
    history: HistoryLog,
    favorites: FavoritesSet,
}

impl QuoteBook {
    /// `history_limit` of 0 keeps the history unbounded.
    pub fn new(
        catalog: Catalog,
        store: Arc<dyn KeyValueStore>,
        diagnostics: Arc<dyn Diagnostics>,
        history_limit: usize,
    ) -> Self {
        let history = HistoryLog::with_limit(
            PersistentList::new(HISTORY_KEY, store.clone(), diagnostics.clone()),
            history_limit,
        );
        let favorites = FavoritesSet::new(PersistentList::new(FAVORITES_KEY, store, diagnostics));
        Self {
            catalog,
            history,
            favorites,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    /// Drop both stored lists. Later reads see empty lists.
    pub fn reset(&self) -> StoreResult<()> {
        self.history.list().remove()?;
        self.favorites.list().remove()?;
        tracing::info!("history and favorites removed");
        Ok(())
    }

    /// A fresh screen visit with nothing selected yet.
    pub fn session(&self) -> InspirationSession<'_> {
        InspirationSession::new(self)
    }
}
