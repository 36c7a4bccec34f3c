//! Probe error types.
//!
//! These errors cover client construction only. A probe against an
//! unreachable target is NOT an error; it is an offline
//! [`upbadge_core::ProbeOutcome`].

use thiserror::Error;

/// Error type for probe infrastructure.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The underlying HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
