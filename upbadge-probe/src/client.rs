//! HTTP client abstraction.

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::{Client, Method, Response};
use tracing::debug;

use crate::error::ProbeError;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Maximum redirects to follow before giving up.
const MAX_REDIRECTS: usize = 10;

/// Thin wrapper over a reqwest client tuned for reachability probes.
///
/// Redirects are followed (a site behind a redirect is still up) and every
/// request carries a per-call timeout. A probe is a single attempt; there is
/// no retry layer here.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new() -> Result<Self, ProbeError> {
        let client = Client::builder()
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(concat!("upbadge/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { inner: client })
    }

    /// Issues a single request with a hard per-request timeout.
    ///
    /// Returns as soon as response headers arrive; the body is never read.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        timeout: Duration,
    ) -> Result<Response, reqwest::Error> {
        debug!(method = %method, url = %url, timeout_ms = timeout.as_millis() as u64, "Issuing probe request");

        self.inner
            .request(method, url)
            .timeout(timeout)
            .header(reqwest::header::ACCEPT, "*/*")
            .send()
            .await
    }
}

impl Default for HttpClient {
    /// Creates a default HTTP client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built, which indicates a broken
    /// TLS configuration the service cannot run without.
    fn default() -> Self {
        Self::new().unwrap_or_else(|e| {
            panic!("Failed to create default HTTP client: {e}")
        })
    }
}
