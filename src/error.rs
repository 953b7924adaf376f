//! Library error types.
//!
//! Storage faults surface as [`StoreError`]. Codec faults ([`CodecError`]) never
//! escape the list store; they are reported to diagnostics and replaced by an
//! empty sequence.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed list blob: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("failed to serialize list: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
