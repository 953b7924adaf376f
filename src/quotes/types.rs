//! Core quote type definitions.
//!
//! [`QuoteId`] is the stable integer key persisted in every list; [`QuoteRecord`]
//! is the immutable text/author pair it resolves to in the catalog.

use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog entry. Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(pub u32);

impl std::fmt::Display for QuoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for QuoteId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| format!("invalid quote id: {s}"))
    }
}

/// A quote and its author. Both fields are non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuoteRecord {
    pub quote: &'static str,
    pub author: &'static str,
}

impl QuoteRecord {
    /// Returns `None` if either field is blank.
    pub fn new(quote: &'static str, author: &'static str) -> Option<Self> {
        if quote.trim().is_empty() || author.trim().is_empty() {
            return None;
        }
        Some(Self { quote, author })
    }
}

impl std::fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\u{201c}{}\u{201d}\n  \u{2014} {}", self.quote, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&vec![QuoteId(3), QuoteId(7)]).unwrap();
        assert_eq!(json, "[3,7]");
    }

    #[test]
    fn quote_id_parses_from_str() {
        assert_eq!(" 4 ".parse::<QuoteId>().unwrap(), QuoteId(4));
        assert!("-1".parse::<QuoteId>().is_err());
        assert!("four".parse::<QuoteId>().is_err());
    }

    #[test]
    fn blank_record_fields_rejected() {
        assert!(QuoteRecord::new("", "Someone").is_none());
        assert!(QuoteRecord::new("Something", "  ").is_none());
        assert!(QuoteRecord::new("Something", "Someone").is_some());
    }
}
