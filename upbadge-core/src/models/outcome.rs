//! Probe outcome types.
//!
//! A probe never fails as an `Err`: timeouts and transport failures are
//! encoded as normal outcomes with `online: false` so that a down target is
//! a first-class, cacheable result rather than a failure path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Probe Outcome
// ============================================================================

/// Result of one reachability probe against a target URL.
///
/// Immutable once created. Produced only by the target prober, consumed by
/// the freshness cache and the history ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeOutcome {
    /// Whether the target was reachable.
    pub online: bool,
    /// HTTP status code, if a response was received at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Elapsed time from request dispatch to response headers, in ms.
    ///
    /// For timeouts this is the configured timeout; for transport errors it
    /// is the time until the error surfaced.
    pub response_time_ms: u64,
    /// When the probe ran.
    pub timestamp: DateTime<Utc>,
    /// Why the target was offline, when it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ProbeErrorKind>,
}

impl ProbeOutcome {
    /// Creates an outcome for a received HTTP response.
    pub fn responded(online: bool, status_code: u16, response_time_ms: u64) -> Self {
        Self {
            online,
            status_code: Some(status_code),
            response_time_ms,
            timestamp: Utc::now(),
            error_kind: None,
        }
    }

    /// Creates an offline outcome for a failed probe.
    pub fn failed(kind: ProbeErrorKind, response_time_ms: u64) -> Self {
        Self {
            online: false,
            status_code: None,
            response_time_ms,
            timestamp: Utc::now(),
            error_kind: Some(kind),
        }
    }

    /// Age of this outcome relative to now.
    ///
    /// Clock skew can make the timestamp sit in the future; that clamps to
    /// zero rather than going negative.
    pub fn age(&self) -> chrono::Duration {
        (Utc::now() - self.timestamp).max(chrono::Duration::zero())
    }
}

// ============================================================================
// Probe Error Kind
// ============================================================================

/// Why a probe came back offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeErrorKind {
    /// The target did not respond within the probe timeout.
    Timeout,
    /// DNS, connect, or TLS failure before any response.
    TransportError,
}

impl ProbeErrorKind {
    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Timeout => "Timeout",
            Self::TransportError => "Transport error",
        }
    }
}

impl std::fmt::Display for ProbeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Served From
// ============================================================================

/// How a status read was satisfied by the freshness cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServedFrom {
    /// Cached value inside the fresh window; no probe ran.
    Fresh,
    /// Stale cached value served while a background refresh was scheduled.
    StaleRefreshing,
    /// No usable cache entry; a synchronous probe ran before returning.
    MissRefreshed,
}

impl ServedFrom {
    /// Returns the wire label used in responses and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::StaleRefreshing => "stale-refreshing",
            Self::MissRefreshed => "miss-refreshed",
        }
    }
}

impl std::fmt::Display for ServedFrom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responded_outcome_carries_status_code() {
        let outcome = ProbeOutcome::responded(true, 200, 42);
        assert!(outcome.online);
        assert_eq!(outcome.status_code, Some(200));
        assert_eq!(outcome.error_kind, None);
    }

    #[test]
    fn test_failed_outcome_is_offline() {
        let outcome = ProbeOutcome::failed(ProbeErrorKind::Timeout, 10_000);
        assert!(!outcome.online);
        assert_eq!(outcome.status_code, None);
        assert_eq!(outcome.error_kind, Some(ProbeErrorKind::Timeout));
        assert_eq!(outcome.response_time_ms, 10_000);
    }

    #[test]
    fn test_age_never_negative() {
        let mut outcome = ProbeOutcome::responded(true, 200, 1);
        outcome.timestamp = Utc::now() + chrono::Duration::seconds(30);
        assert_eq!(outcome.age(), chrono::Duration::zero());
    }

    #[test]
    fn test_served_from_labels() {
        assert_eq!(ServedFrom::Fresh.to_string(), "fresh");
        assert_eq!(ServedFrom::StaleRefreshing.to_string(), "stale-refreshing");
        assert_eq!(ServedFrom::MissRefreshed.to_string(), "miss-refreshed");
    }
}
