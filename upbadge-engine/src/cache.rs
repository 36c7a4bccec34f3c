//! The freshness cache.
//!
//! Per cache key, a lookup lands in one of four states:
//!
//! - **Empty**: no usable entry; probe synchronously, store, return.
//! - **Fresh** (age < fresh window): return the stored value, zero probes.
//! - **Stale** (fresh window <= age < hard expiry): return the stored value
//!   immediately and schedule at most one background refresh.
//! - **Expired** (age >= hard expiry): same as Empty.
//!
//! Failures are cached under the same rules as successes, so a down target
//! is reprobed on the same cadence as a healthy one instead of on every
//! request.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};
use upbadge_core::{MonitorConfig, ProbeOutcome, ServedFrom};
use upbadge_probe::Prober;
use upbadge_store::{KeyValueStore, get_record, keys, put_record};

use crate::ledger::HistoryLedger;

// ============================================================================
// Policy
// ============================================================================

/// Freshness windows for cached outcomes.
#[derive(Debug, Clone, Copy)]
pub struct FreshnessPolicy {
    /// Age below which a cached outcome is served without any probe.
    pub fresh_window: std::time::Duration,
    /// Age at or beyond which a cached outcome must not be served without a
    /// synchronous refresh. Doubles as the store TTL so the storage layer
    /// reclaims entries that are never revisited.
    pub hard_expiry: std::time::Duration,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            fresh_window: std::time::Duration::from_secs(30),
            hard_expiry: std::time::Duration::from_secs(60),
        }
    }
}

// ============================================================================
// Freshness Cache
// ============================================================================

/// Stale-while-revalidate cache over the key-value store.
///
/// Cheap to clone; clones share the store, prober, ledger, and the in-flight
/// refresh marker set.
#[derive(Clone)]
pub struct FreshnessCache {
    store: Arc<dyn KeyValueStore>,
    prober: Arc<dyn Prober>,
    ledger: HistoryLedger,
    policy: FreshnessPolicy,
    in_flight: Arc<Mutex<HashSet<String>>>,
}

impl FreshnessCache {
    /// Creates a cache over the given collaborators.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        prober: Arc<dyn Prober>,
        ledger: HistoryLedger,
        policy: FreshnessPolicy,
    ) -> Self {
        Self {
            store,
            prober,
            ledger,
            policy,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Returns the monitor's current status and how it was served.
    ///
    /// Infallible by design: a store read failure is a miss, a down target
    /// is an offline outcome, and background refresh failures only ever
    /// show up as stale data on a later lookup.
    pub async fn get_status(&self, config: &MonitorConfig) -> (ProbeOutcome, ServedFrom) {
        let key = keys::status_key(&config.id);

        let Some(cached) = self.read_cached(&key).await else {
            let outcome = self.run_check(config).await;
            return (outcome, ServedFrom::MissRefreshed);
        };

        let age = cached.age().to_std().unwrap_or_default();

        if age < self.policy.fresh_window {
            debug!(monitor_id = %config.id, age_secs = age.as_secs(), "Serving fresh");
            (cached, ServedFrom::Fresh)
        } else if age < self.policy.hard_expiry {
            debug!(monitor_id = %config.id, age_secs = age.as_secs(), "Serving stale, scheduling refresh");
            self.schedule_refresh(config).await;
            (cached, ServedFrom::StaleRefreshing)
        } else {
            debug!(monitor_id = %config.id, age_secs = age.as_secs(), "Entry expired, synchronous refresh");
            let outcome = self.run_check(config).await;
            (outcome, ServedFrom::MissRefreshed)
        }
    }

    /// Probes now, caches the outcome, and appends it to the history ledger.
    ///
    /// Used by the miss/expired paths, background refreshes, force checks,
    /// and initial registration probes. Persistence failures are logged and
    /// swallowed: the caller still gets the outcome.
    pub async fn run_check(&self, config: &MonitorConfig) -> ProbeOutcome {
        let outcome = self.prober.probe(&config.target_url).await;

        let key = keys::status_key(&config.id);
        if let Err(e) =
            put_record(self.store.as_ref(), &key, &outcome, Some(self.policy.hard_expiry)).await
        {
            warn!(monitor_id = %config.id, error = %e, "Failed to cache check result");
        }
        if let Err(e) = self.ledger.append(&config.id, &outcome).await {
            warn!(monitor_id = %config.id, error = %e, "Failed to append check to history");
        }

        outcome
    }

    /// Reads the cached outcome, downgrading store failures to a miss.
    async fn read_cached(&self, key: &str) -> Option<ProbeOutcome> {
        match get_record::<ProbeOutcome>(self.store.as_ref(), key).await {
            Ok(cached) => cached,
            Err(e) => {
                warn!(key = %key, error = %e, "Store read failed, treating as miss");
                None
            }
        }
    }

    /// Schedules a fire-and-forget background refresh for this key.
    ///
    /// At most one refresh per key is in flight at a time; lookups landing
    /// in the stale window while one runs serve stale data without piling
    /// on further probes. The triggering request never observes the
    /// refresh's completion or failure.
    async fn schedule_refresh(&self, config: &MonitorConfig) {
        let key = keys::status_key(&config.id);

        {
            let mut in_flight = self.in_flight.lock().await;
            if !in_flight.insert(key.clone()) {
                debug!(monitor_id = %config.id, "Refresh already in flight, skipping");
                return;
            }
        }

        let cache = self.clone();
        let config = config.clone();
        tokio::spawn(async move {
            debug!(monitor_id = %config.id, "Background refresh started");
            cache.run_check(&config).await;
            cache.in_flight.lock().await.remove(&key);
            debug!(monitor_id = %config.id, "Background refresh finished");
        });
    }
}
