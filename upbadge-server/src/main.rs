// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! upbadge server - self-hostable status badges.
//!
//! # Examples
//!
//! ```bash
//! # In-memory storage on the default port
//! upbadge-server
//!
//! # Persistent storage, public bind
//! upbadge-server --bind 0.0.0.0:8080 --storage disk
//!
//! # Count 5xx responses as down, probe with HEAD
//! upbadge-server --server-errors down --probe-method head
//! ```

mod config;
mod error;
mod routes;

use std::sync::Arc;

use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use upbadge_engine::StatusService;
use upbadge_probe::{HttpClient, HttpProber};
use upbadge_store::{DiskStore, KeyValueStore, MemoryStore, default_data_dir};

use config::{ServerConfig, StorageBackend};

#[actix_web::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store: Arc<dyn KeyValueStore> = match config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::Disk => {
            let dir = config.data_dir.clone().unwrap_or_else(default_data_dir);
            info!(dir = %dir.display(), "Using disk storage");
            Arc::new(DiskStore::open(dir).await?)
        }
    };

    let prober = HttpProber::with_config(HttpClient::new()?, config.prober_config());
    let service = StatusService::with_options(
        store,
        Arc::new(prober),
        config.freshness_policy(),
        config.history_cap,
    );

    info!(bind = %config.bind, "Starting upbadge server");

    let data = web::Data::new(service);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(
                DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
                    .add(("Access-Control-Max-Age", "86400")),
            )
            .configure(routes::configure)
    })
    .bind(config.bind)?
    .run()
    .await?;

    Ok(())
}
