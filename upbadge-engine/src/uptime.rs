//! Uptime aggregation.
//!
//! Pure functions over a history snapshot. The ratio is order-insensitive;
//! ordering only matters to the ledger's eviction, not to this count.

use upbadge_core::{HistoryPoint, UptimeSummary};

/// Percent of checks that were online, rounded to one decimal place.
///
/// Empty history yields `None`: no data is "no opinion", not 0%.
pub fn aggregate(history: &[HistoryPoint]) -> Option<f64> {
    if history.is_empty() {
        return None;
    }

    let online = history.iter().filter(|p| p.online).count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = online as f64 / history.len() as f64;
    Some((ratio * 1000.0).round() / 10.0)
}

/// Builds the full uptime summary for a history snapshot.
pub fn summarize(history: &[HistoryPoint]) -> UptimeSummary {
    UptimeSummary::new(aggregate(history))
}
