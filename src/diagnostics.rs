//! Reporting for faults the list store absorbs.
//!
//! Unreadable or malformed blobs degrade to an empty list without surfacing an
//! error. Each such fault is handed to a [`Diagnostics`] sink instead, so the
//! silent fallback stays visible in logs and tests.

use std::sync::Mutex;

/// A fault the list store recovered from locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFault {
    /// The key-value backend failed to return the blob.
    Read { key: String, error: String },
    /// The stored blob was not a valid encoded list.
    Decode { key: String, error: String },
    /// The list could not be serialized; an empty blob was persisted instead.
    Encode { key: String, error: String },
}

impl ListFault {
    pub fn key(&self) -> &str {
        match self {
            Self::Read { key, .. } | Self::Decode { key, .. } | Self::Encode { key, .. } => key,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Read { .. } => "read",
            Self::Decode { .. } => "decode",
            Self::Encode { .. } => "encode",
        }
    }
}

impl std::fmt::Display for ListFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { key, error } | Self::Decode { key, error } | Self::Encode { key, error } => {
                write!(f, "{} failure on `{key}`: {error}", self.kind())
            }
        }
    }
}

pub trait Diagnostics: Send + Sync {
    fn report(&self, fault: &ListFault);
}

/// Default sink: one `warn` event per fault.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, fault: &ListFault) {
        tracing::warn!(key = fault.key(), kind = fault.kind(), %fault, "list fault recovered as empty");
    }
}

/// Keeps every reported fault in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    faults: Mutex<Vec<ListFault>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of faults reported so far.
    pub fn faults(&self) -> Vec<ListFault> {
        match self.faults.lock() {
            Ok(faults) => faults.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.faults().is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, fault: &ListFault) {
        tracing::debug!(%fault, "recording list fault");
        match self.faults.lock() {
            Ok(mut faults) => faults.push(fault.clone()),
            Err(poisoned) => poisoned.into_inner().push(fault.clone()),
        }
    }
}
