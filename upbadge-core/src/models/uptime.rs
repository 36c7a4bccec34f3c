//! Uptime summary types.

use serde::{Deserialize, Serialize};

/// Rolling uptime over a monitor's history window.
///
/// Derived on demand from a history snapshot, never stored. `percentage` is
/// `None` when there is no history yet: an unknown uptime is not zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UptimeSummary {
    /// Percent of checks that were online, rounded to one decimal.
    pub percentage: Option<f64>,
    /// Human-readable label for the window the history covers.
    pub window_label: String,
}

impl UptimeSummary {
    /// Label for the default rolling window.
    pub const DEFAULT_WINDOW: &'static str = "24h";

    /// Creates a summary over the default window.
    pub fn new(percentage: Option<f64>) -> Self {
        Self {
            percentage,
            window_label: Self::DEFAULT_WINDOW.to_string(),
        }
    }

    /// Creates an empty summary (no history, no opinion).
    pub fn unknown() -> Self {
        Self::new(None)
    }
}
