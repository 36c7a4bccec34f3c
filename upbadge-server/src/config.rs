//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use upbadge_engine::FreshnessPolicy;
use upbadge_probe::{ProbeMethod, ProberConfig, ReachabilityPolicy};

/// upbadge server - self-hostable status badges.
#[derive(Debug, Parser)]
#[command(name = "upbadge-server")]
#[command(about = "Status badge service: JSON, SVG, and embeddable widgets")]
#[command(version)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Storage backend for configs, cached statuses, and history.
    #[arg(long, value_enum, default_value = "memory")]
    pub storage: StorageBackend,

    /// Data directory for the disk backend (platform default when omitted).
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Seconds a cached check is served without probing.
    #[arg(long, default_value_t = 30)]
    pub fresh_window_secs: u64,

    /// Seconds after which a cached check must be recomputed synchronously.
    #[arg(long, default_value_t = 60)]
    pub hard_expiry_secs: u64,

    /// Per-probe timeout in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub probe_timeout_ms: u64,

    /// Maximum check history entries kept per monitor.
    #[arg(long, default_value_t = 100)]
    pub history_cap: usize,

    /// HTTP method used for probes.
    #[arg(long, value_enum, default_value = "get")]
    pub probe_method: ProbeMethodArg,

    /// How 5xx responses count toward reachability.
    ///
    /// `reachable` treats any response in [200,599] as online (the target
    /// answered); `down` only counts [200,499].
    #[arg(long, value_enum, default_value = "reachable")]
    pub server_errors: ServerErrorsArg,
}

/// Storage backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// In-process map; state is lost on restart.
    Memory,
    /// One JSON file per record under the data directory.
    Disk,
}

/// CLI form of [`ProbeMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProbeMethodArg {
    /// GET request.
    Get,
    /// HEAD request.
    Head,
}

/// CLI form of [`ReachabilityPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServerErrorsArg {
    /// 5xx counts as online.
    Reachable,
    /// 5xx counts as down.
    Down,
}

impl ServerConfig {
    /// Freshness windows for the engine.
    pub fn freshness_policy(&self) -> FreshnessPolicy {
        FreshnessPolicy {
            fresh_window: Duration::from_secs(self.fresh_window_secs),
            hard_expiry: Duration::from_secs(self.hard_expiry_secs),
        }
    }

    /// Prober configuration.
    pub fn prober_config(&self) -> ProberConfig {
        ProberConfig {
            method: match self.probe_method {
                ProbeMethodArg::Get => ProbeMethod::Get,
                ProbeMethodArg::Head => ProbeMethod::Head,
            },
            timeout: Duration::from_millis(self.probe_timeout_ms),
            policy: match self.server_errors {
                ServerErrorsArg::Reachable => ReachabilityPolicy::ServerErrorsReachable,
                ServerErrorsArg::Down => ReachabilityPolicy::ServerErrorsDown,
            },
        }
    }
}
