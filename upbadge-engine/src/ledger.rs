//! Bounded per-monitor check history.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use upbadge_core::{HistoryPoint, ProbeOutcome};
use upbadge_store::{KeyValueStore, StoreError, get_record, keys, put_record};

/// Default maximum entries per monitor.
pub const DEFAULT_CAP: usize = 100;

/// Outer persistence bound for a ledger record. The entry cap and this TTL
/// are independent limits; whichever is hit first governs.
const LEDGER_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Persisted ledger record. Wrapping the vec keeps room in the record for
/// future fields without a wire-format break.
#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerRecord {
    data: Vec<HistoryPoint>,
}

/// Append-with-eviction check log, keyed by monitor id.
///
/// Appends are best-effort read-modify-write: two concurrent appends to the
/// same monitor can race and one point can be lost to last-write-wins. The
/// freshness cache's in-flight refresh marker makes that window rare in
/// practice, and a lost point only nudges a 100-entry ratio, so per-key
/// serialization is deliberately not added here.
#[derive(Clone)]
pub struct HistoryLedger {
    store: Arc<dyn KeyValueStore>,
    cap: usize,
}

impl HistoryLedger {
    /// Creates a ledger over the given store with the default entry cap.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_cap(store, DEFAULT_CAP)
    }

    /// Creates a ledger with a custom entry cap.
    pub fn with_cap(store: Arc<dyn KeyValueStore>, cap: usize) -> Self {
        Self { store, cap }
    }

    /// Appends one probe outcome, evicting the oldest entries past the cap.
    pub async fn append(&self, monitor_id: &str, outcome: &ProbeOutcome) -> Result<(), StoreError> {
        let key = keys::history_key(monitor_id);

        let mut record: LedgerRecord = get_record(self.store.as_ref(), &key)
            .await?
            .unwrap_or_default();

        record.data.push(HistoryPoint::from(outcome));
        // Single-oldest FIFO eviction, not bulk truncation.
        while record.data.len() > self.cap {
            record.data.remove(0);
        }

        put_record(self.store.as_ref(), &key, &record, Some(LEDGER_TTL)).await?;

        debug!(
            monitor_id = %monitor_id,
            len = record.data.len(),
            online = outcome.online,
            "History appended"
        );
        Ok(())
    }

    /// Reads a monitor's history, most-recent-last. Absent means empty.
    pub async fn read(&self, monitor_id: &str) -> Result<Vec<HistoryPoint>, StoreError> {
        let key = keys::history_key(monitor_id);
        let record: Option<LedgerRecord> = get_record(self.store.as_ref(), &key).await?;
        Ok(record.map(|r| r.data).unwrap_or_default())
    }
}
