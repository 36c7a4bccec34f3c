//! The status service facade.
//!
//! The single surface the presentation layer consumes: one read
//! ([`StatusService::get_status_data`]) that the JSON, SVG, and widget
//! renderers all share, plus force-check and registration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;
use upbadge_core::{HistoryPoint, MonitorConfig, ProbeOutcome, ServedFrom, Theme, UptimeSummary};
use upbadge_probe::Prober;
use upbadge_store::KeyValueStore;

use crate::cache::{FreshnessCache, FreshnessPolicy};
use crate::error::EngineError;
use crate::ledger::HistoryLedger;
use crate::registry::MonitorRegistry;
use crate::uptime;

// ============================================================================
// Request / Response Types
// ============================================================================

/// Registration request.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// The URL to monitor.
    pub target_url: String,
    /// Display name for badges; defaults to the target URL.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Badge theme; defaults to the default theme.
    #[serde(default)]
    pub theme: Option<Theme>,
}

/// A freshly registered monitor plus its first check.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredMonitor {
    /// The stored configuration.
    pub config: MonitorConfig,
    /// Outcome of the initial synchronous probe.
    pub initial_status: ProbeOutcome,
}

/// Everything a renderer needs for one monitor.
#[derive(Debug, Clone, Serialize)]
pub struct StatusData {
    /// Monitor id.
    pub id: String,
    /// Monitor configuration.
    pub config: MonitorConfig,
    /// Current (possibly cached) status.
    pub status: ProbeOutcome,
    /// How the status was served.
    pub served_from: ServedFrom,
    /// Rolling uptime over the history window.
    pub uptime: UptimeSummary,
    /// Bounded check history, most-recent-last.
    pub history: Vec<HistoryPoint>,
}

// ============================================================================
// Status Service
// ============================================================================

/// Facade over the registry, cache, and ledger.
#[derive(Clone)]
pub struct StatusService {
    registry: MonitorRegistry,
    cache: FreshnessCache,
    ledger: HistoryLedger,
}

impl StatusService {
    /// Wires up a service over the given store and prober with default
    /// freshness windows and history cap.
    pub fn new(store: Arc<dyn KeyValueStore>, prober: Arc<dyn Prober>) -> Self {
        Self::with_policy(store, prober, FreshnessPolicy::default())
    }

    /// Wires up a service with explicit freshness windows.
    pub fn with_policy(
        store: Arc<dyn KeyValueStore>,
        prober: Arc<dyn Prober>,
        policy: FreshnessPolicy,
    ) -> Self {
        Self::with_options(store, prober, policy, crate::ledger::DEFAULT_CAP)
    }

    /// Wires up a service with explicit freshness windows and history cap.
    pub fn with_options(
        store: Arc<dyn KeyValueStore>,
        prober: Arc<dyn Prober>,
        policy: FreshnessPolicy,
        history_cap: usize,
    ) -> Self {
        let ledger = HistoryLedger::with_cap(Arc::clone(&store), history_cap);
        let cache = FreshnessCache::new(Arc::clone(&store), prober, ledger.clone(), policy);
        let registry = MonitorRegistry::new(store);
        Self {
            registry,
            cache,
            ledger,
        }
    }

    /// The single read used by the JSON/SVG/widget renderers.
    ///
    /// A history read failure degrades to an empty history and unknown
    /// uptime rather than failing the whole read; the status itself is
    /// already in hand at that point.
    pub async fn get_status_data(&self, monitor_id: &str) -> Result<StatusData, EngineError> {
        let config = self
            .registry
            .lookup(monitor_id)
            .await?
            .ok_or_else(|| EngineError::NotFound(monitor_id.to_string()))?;

        let (status, served_from) = self.cache.get_status(&config).await;

        let history = match self.ledger.read(monitor_id).await {
            Ok(history) => history,
            Err(e) => {
                warn!(monitor_id = %monitor_id, error = %e, "History read failed, serving empty");
                Vec::new()
            }
        };
        let uptime = uptime::summarize(&history);

        Ok(StatusData {
            id: monitor_id.to_string(),
            config,
            status,
            served_from,
            uptime,
            history,
        })
    }

    /// Probes immediately, bypassing the freshness windows.
    ///
    /// Still updates the cache and appends to the ledger like any check.
    pub async fn force_check(&self, monitor_id: &str) -> Result<ProbeOutcome, EngineError> {
        let config = self
            .registry
            .lookup(monitor_id)
            .await?
            .ok_or_else(|| EngineError::NotFound(monitor_id.to_string()))?;

        Ok(self.cache.run_check(&config).await)
    }

    /// Registers a monitor and runs its initial synchronous check so the
    /// caller immediately has a non-empty status and history.
    pub async fn register_monitor(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisteredMonitor, EngineError> {
        let config = self
            .registry
            .create(
                &request.target_url,
                request.display_name,
                request.theme.unwrap_or_default(),
            )
            .await?;

        let initial_status = self.cache.run_check(&config).await;

        Ok(RegisteredMonitor {
            config,
            initial_status,
        })
    }

    /// Looks up a monitor config without touching the cache.
    pub async fn lookup(&self, monitor_id: &str) -> Result<Option<MonitorConfig>, EngineError> {
        self.registry.lookup(monitor_id).await
    }
}
