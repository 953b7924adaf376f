//! The fixed quote catalog.
//!
//! The built-in catalog is compiled into the binary and never changes at runtime.
//! Ids are stable: persisted history and favorites refer to them directly.

use std::collections::BTreeMap;

use super::types::{QuoteId, QuoteRecord};

const BUILTIN_QUOTES: [(u32, &str, &str); 10] = [
    (1, "The only way to do great work is to love what you do.", "Steve Jobs"),
    (2, "The way to get started is to quit talking and begin doing.", "Walt Disney"),
    (3, "The future belongs to those who believe in the beauty of their dreams.", "Eleanor Roosevelt"),
    (4, "It does not matter how slowly you go as long as you do not stop.", "Confucius"),
    (5, "Life is like riding a bicycle. To keep your balance, you must keep moving.", "Albert Einstein"),
    (6, "You will face many defeats in life, but never let yourself be defeated.", "Maya Angelou"),
    (7, "It always seems impossible until it\u{2019}s done.", "Nelson Mandela"),
    (8, "Whether you think you can or you think you can\u{2019}t, you\u{2019}re right.", "Henry Ford"),
    (9, "Don\u{2019}t watch the clock; do what it does. Keep going.", "Unknown"),
    (10, "Setting goals is the first step in turning the invisible into the visible.", "Tony Robbins"),
];

/// Immutable mapping from [`QuoteId`] to [`QuoteRecord`], iterated in id order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<QuoteId, QuoteRecord>,
}

impl Catalog {
    /// The ten reference quotes.
    pub fn builtin() -> Self {
        Self::from_records(BUILTIN_QUOTES.iter().map(|&(id, quote, author)| {
            (QuoteId(id), QuoteRecord { quote, author })
        }))
    }

    /// Build a catalog from explicit records. Later duplicates of an id win.
    pub fn from_records(records: impl IntoIterator<Item = (QuoteId, QuoteRecord)>) -> Self {
        Self {
            entries: records.into_iter().collect(),
        }
    }

    pub fn get(&self, id: QuoteId) -> Option<&QuoteRecord> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: QuoteId) -> bool {
        self.entries.contains_key(&id)
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> Vec<QuoteId> {
        self.entries.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuoteId, &QuoteRecord)> {
        self.entries.iter().map(|(id, record)| (*id, record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve ids to records, silently skipping ids the catalog does not know.
    pub fn resolve(&self, ids: &[QuoteId]) -> Vec<(QuoteId, &QuoteRecord)> {
        ids.iter()
            .filter_map(|id| self.get(*id).map(|record| (*id, record)))
            .collect()
    }
}
