//! Store error types.

use thiserror::Error;

/// Errors that can occur in the storage layer.
///
/// The engine downgrades read errors to cache misses and swallows write
/// errors, so nothing here propagates to a badge response; these exist for
/// logging and for callers that talk to a store directly.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or read.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns true if this error may clear on a later attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Unavailable(_) | StoreError::Io(_))
    }
}
