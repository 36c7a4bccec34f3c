//! Check history types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProbeOutcome;

/// One entry in a monitor's bounded check history.
///
/// Persisted with compact single-letter field names (`t`, `s`, `rt`) to keep
/// stored ledgers small; a 100-entry ledger is written back on every append.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// When the check ran.
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,
    /// Whether the target was online.
    #[serde(rename = "s")]
    pub online: bool,
    /// Response time in milliseconds.
    #[serde(rename = "rt")]
    pub response_time_ms: u64,
}

impl From<&ProbeOutcome> for HistoryPoint {
    fn from(outcome: &ProbeOutcome) -> Self {
        Self {
            timestamp: outcome.timestamp,
            online: outcome.online,
            response_time_ms: outcome.response_time_ms,
        }
    }
}
