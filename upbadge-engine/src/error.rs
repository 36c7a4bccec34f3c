//! Engine error types.

use thiserror::Error;
use upbadge_store::StoreError;

/// Errors surfaced to the engine's callers.
///
/// Down targets never appear here; they are encoded as offline
/// [`upbadge_core::ProbeOutcome`] values. Store read failures inside the
/// freshness cache are downgraded to misses and store write failures are
/// swallowed, so `Store` only escapes where the engine cannot proceed
/// without the read (config lookup, registration).
#[derive(Debug, Error)]
pub enum EngineError {
    /// No monitor registered under this id.
    #[error("Monitor not found: {0}")]
    NotFound(String),

    /// Malformed target URL at registration.
    #[error("Invalid target URL: {0}")]
    InvalidTarget(String),

    /// The backing store failed where a result was required.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The system randomness source failed during id generation.
    #[error("Monitor id generation failed")]
    IdGeneration,
}
