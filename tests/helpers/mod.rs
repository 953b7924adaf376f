#![allow(dead_code)]

use std::sync::Arc;

use daily_inspiration::db;
use daily_inspiration::diagnostics::RecordingDiagnostics;
use daily_inspiration::quotes::{Catalog, QuoteBook, QuoteId};
use daily_inspiration::storage::{KeyValueStore, MemoryStore, SqliteStore};

/// SQLite store over a fresh in-memory database with schema and migrations applied.
pub fn test_store() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::new(db::open_memory_database().unwrap()))
}

/// A book over the given store with the built-in catalog, unbounded history,
/// and a recorder to inspect reported faults.
pub fn test_book(store: Arc<dyn KeyValueStore>) -> (QuoteBook, Arc<RecordingDiagnostics>) {
    let diagnostics = Arc::new(RecordingDiagnostics::new());
    let book = QuoteBook::new(Catalog::builtin(), store, diagnostics.clone(), 0);
    (book, diagnostics)
}

/// A book over a volatile in-memory store.
pub fn memory_book() -> (QuoteBook, Arc<MemoryStore>, Arc<RecordingDiagnostics>) {
    let store = Arc::new(MemoryStore::new());
    let (book, diagnostics) = test_book(store.clone());
    (book, store, diagnostics)
}

pub fn ids(raw: &[u32]) -> Vec<QuoteId> {
    raw.iter().copied().map(QuoteId).collect()
}
