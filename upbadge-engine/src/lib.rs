// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # upbadge Engine
//!
//! The status-check cache/refresh engine: the part of upbadge with real
//! invariants. Everything else (HTTP routes, SVG, widget scripts) renders
//! what this crate decides.
//!
//! - [`FreshnessCache`] - Per-key freshness state machine with
//!   stale-while-revalidate and an at-most-one in-flight background refresh
//! - [`HistoryLedger`] - Bounded append-with-eviction check log per monitor
//! - [`uptime`] - Rolling uptime aggregation over a ledger snapshot
//! - [`MonitorRegistry`] - Opaque-id to target-config mapping
//! - [`StatusService`] - The facade the presentation layer consumes
//!
//! Down targets are not errors here: a failed probe is cached, ledgered,
//! and aggregated exactly like a healthy one, which bounds load on failing
//! targets the same way as on healthy ones.

pub mod cache;
pub mod error;
pub mod ledger;
pub mod registry;
pub mod service;
pub mod uptime;

pub use cache::{FreshnessCache, FreshnessPolicy};
pub use error::EngineError;
pub use ledger::HistoryLedger;
pub use registry::MonitorRegistry;
pub use service::{RegisterRequest, RegisteredMonitor, StatusData, StatusService};
