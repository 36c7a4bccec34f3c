// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # upbadge Store
//!
//! Key-value storage for the upbadge status badge service.
//!
//! The engine treats storage as an abstract get/put-with-TTL store with
//! JSON-equivalent values and no atomicity beyond single-key
//! last-write-wins. This crate provides:
//!
//! - [`KeyValueStore`] - The store trait the engine consumes
//! - [`MemoryStore`] - In-process store with lazy TTL expiry
//! - [`DiskStore`] - One-JSON-file-per-key store for restarts
//! - [`keys`] - Namespaced key builders (`config:`, `status:`, `history:`)
//! - [`get_record`] / [`put_record`] - Typed helpers over raw JSON values

pub mod disk;
pub mod error;
pub mod keys;
pub mod kv;
pub mod memory;

pub use disk::{DiskStore, default_data_dir};
pub use error::StoreError;
pub use kv::{KeyValueStore, get_record, put_record};
pub use memory::MemoryStore;
