// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # upbadge Probe
//!
//! HTTP reachability probing for the upbadge status badge service.
//!
//! A probe is a single bounded-timeout request against a target URL. It
//! never returns an error for a down target: timeouts and transport
//! failures become [`upbadge_core::ProbeOutcome`] values with
//! `online: false`, so the engine can cache down targets exactly like
//! healthy ones.
//!
//! ## Key Types
//!
//! - [`Prober`] - Trait the engine probes through (swap in a scripted
//!   prober in tests)
//! - [`HttpProber`] - Production prober over a reqwest client
//! - [`ProberConfig`] - Method, timeout, and reachability policy
//! - [`ReachabilityPolicy`] - Which status ranges count as online

pub mod client;
pub mod error;
pub mod prober;

pub use client::HttpClient;
pub use error::ProbeError;
pub use prober::{HttpProber, ProbeMethod, Prober, ProberConfig, ReachabilityPolicy};
