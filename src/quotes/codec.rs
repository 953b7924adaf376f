//! Blob encoding for persisted id lists.
//!
//! A list is stored as a JSON array of integers (`[3,7]`). An empty blob means
//! "no data" and decodes to the empty list. [`encode`] and [`decode`] never fail:
//! they fall back to the empty blob / empty list. The `try_` variants expose the
//! underlying error so the list store can report it.

use crate::error::CodecError;

use super::types::QuoteId;

pub fn try_encode(ids: &[QuoteId]) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(ids).map_err(CodecError::Serialize)
}

/// All-or-nothing: a blob that fails structural decoding yields no ids at all.
pub fn try_decode(blob: &[u8]) -> Result<Vec<QuoteId>, CodecError> {
    if blob.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_slice(blob).map_err(CodecError::Malformed)
}

pub fn encode(ids: &[QuoteId]) -> Vec<u8> {
    try_encode(ids).unwrap_or_default()
}

pub fn decode(blob: &[u8]) -> Vec<QuoteId> {
    try_decode(blob).unwrap_or_default()
}
