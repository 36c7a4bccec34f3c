//! Domain models for upbadge.
//!
//! This module contains the core data structures representing monitors,
//! probe outcomes, check history, and uptime summaries. The serde shapes of
//! these types are also the persisted record shapes, so field renames here
//! are wire-format changes.
//!
//! ## Submodules
//!
//! - [`monitor`] - Monitor types (`MonitorConfig`, `Theme`)
//! - [`outcome`] - Probe result types (`ProbeOutcome`, `ProbeErrorKind`, `ServedFrom`)
//! - [`history`] - Bounded history types (`HistoryPoint`)
//! - [`uptime`] - Uptime summary (`UptimeSummary`)

mod history;
mod monitor;
mod outcome;
mod uptime;

// Re-export everything at the models level
pub use history::HistoryPoint;
pub use monitor::{MonitorConfig, Theme};
pub use outcome::{ProbeErrorKind, ProbeOutcome, ServedFrom};
pub use uptime::UptimeSummary;

#[cfg(test)]
mod serde_tests;
