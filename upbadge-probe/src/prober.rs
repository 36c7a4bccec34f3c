//! Target prober.
//!
//! One probe is one outbound request with a hard timeout, classified into a
//! [`ProbeOutcome`]. Pure with respect to everything but the network call:
//! no caching, no history, no retries here.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Method;
use tracing::{debug, warn};
use upbadge_core::{ProbeErrorKind, ProbeOutcome};

use crate::client::{DEFAULT_TIMEOUT_MS, HttpClient};

// ============================================================================
// Configuration
// ============================================================================

/// HTTP method used for probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeMethod {
    /// Full GET request (default; some servers reject HEAD).
    #[default]
    Get,
    /// HEAD request; cheaper when the target supports it.
    Head,
}

impl ProbeMethod {
    fn as_reqwest(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Head => Method::HEAD,
        }
    }
}

/// How 5xx responses count toward reachability.
///
/// Reachability is not application health: a target answering 500 is
/// serving errors but is demonstrably up. Which of those two readings a
/// badge shows is a deployment decision, so it is a config option here
/// rather than a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReachabilityPolicy {
    /// Any received response in [200, 599] counts as online (reference
    /// behavior: the target answered, so it is reachable).
    #[default]
    ServerErrorsReachable,
    /// Only [200, 499] counts as online; 5xx responses count as down.
    ServerErrorsDown,
}

impl ReachabilityPolicy {
    /// Whether a received status code counts as online under this policy.
    pub fn is_online(self, status_code: u16) -> bool {
        match self {
            Self::ServerErrorsReachable => (200..=599).contains(&status_code),
            Self::ServerErrorsDown => (200..=499).contains(&status_code),
        }
    }
}

/// Prober configuration.
#[derive(Debug, Clone)]
pub struct ProberConfig {
    /// HTTP method for probe requests.
    pub method: ProbeMethod,
    /// Hard per-probe timeout.
    pub timeout: Duration,
    /// Reachability classification for 5xx responses.
    pub policy: ReachabilityPolicy,
}

impl Default for ProberConfig {
    fn default() -> Self {
        Self {
            method: ProbeMethod::default(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            policy: ReachabilityPolicy::default(),
        }
    }
}

// ============================================================================
// URL Normalization
// ============================================================================

/// Ensures a target URL carries a scheme, defaulting to https.
///
/// `example.com` and `https://example.com` probe the same endpoint.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

// ============================================================================
// Prober Trait
// ============================================================================

/// A single-shot reachability probe.
///
/// The engine only ever probes through this trait, so tests can drive the
/// freshness cache with a scripted implementation instead of the network.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probes the target once and classifies the result.
    ///
    /// Never fails: unreachable targets come back as offline outcomes.
    async fn probe(&self, target_url: &str) -> ProbeOutcome;
}

// ============================================================================
// HTTP Prober
// ============================================================================

/// Production prober over a real HTTP client.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: HttpClient,
    config: ProberConfig,
}

impl HttpProber {
    /// Creates a prober with default configuration.
    pub fn new(client: HttpClient) -> Self {
        Self::with_config(client, ProberConfig::default())
    }

    /// Creates a prober with the given configuration.
    pub fn with_config(client: HttpClient, config: ProberConfig) -> Self {
        Self { client, config }
    }

    /// Returns the configured probe timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, target_url: &str) -> ProbeOutcome {
        let url = normalize_url(target_url);
        let start = Instant::now();

        match self
            .client
            .request(self.config.method.as_reqwest(), &url, self.config.timeout)
            .await
        {
            Ok(response) => {
                let elapsed_ms = elapsed_ms(start);
                let status = response.status().as_u16();
                let online = self.config.policy.is_online(status);
                debug!(
                    url = %url,
                    status = status,
                    online = online,
                    response_time_ms = elapsed_ms,
                    "Probe completed"
                );
                ProbeOutcome::responded(online, status, elapsed_ms)
            }
            Err(e) if e.is_timeout() => {
                warn!(url = %url, timeout_ms = self.config.timeout.as_millis() as u64, "Probe timed out");
                // Report the full timeout, not the scheduling-dependent elapsed.
                ProbeOutcome::failed(ProbeErrorKind::Timeout, self.config.timeout.as_millis() as u64)
            }
            Err(e) => {
                let elapsed = elapsed_ms(start);
                warn!(url = %url, error = %e, response_time_ms = elapsed, "Probe transport error");
                ProbeOutcome::failed(ProbeErrorKind::TransportError, elapsed)
            }
        }
    }
}

/// Elapsed time since `start`, rounded to the nearest millisecond.
fn elapsed_ms(start: Instant) -> u64 {
    let micros = start.elapsed().as_micros();
    ((micros + 500) / 1000) as u64
}

// ============================================================================
// Tests
// ============================================================================
