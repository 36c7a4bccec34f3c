// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # upbadge Core
//!
//! Core types and models for the upbadge status badge service.
//!
//! This crate provides the foundational types used across all other
//! upbadge crates:
//!
//! - Domain models (monitors, probe outcomes, history, uptime)
//!
//! ## Key Types
//!
//! ### Monitor Types
//! - [`MonitorConfig`] - A registered monitor (target URL plus display metadata)
//! - [`Theme`] - Badge theme selection
//!
//! ### Check Types
//! - [`ProbeOutcome`] - Result of one reachability probe against a target
//! - [`ProbeErrorKind`] - Why a probe came back offline
//! - [`ServedFrom`] - Whether a status read was served fresh, stale, or recomputed
//!
//! ### History & Uptime
//! - [`HistoryPoint`] - One entry in a monitor's bounded check history
//! - [`UptimeSummary`] - Rolling uptime percentage over the history window

pub mod models;

// Re-export all model types
pub use models::{
    HistoryPoint, MonitorConfig, ProbeErrorKind, ProbeOutcome, ServedFrom, Theme, UptimeSummary,
};
