use std::{
    net::{IpAddr, SocketAddr},
    time::Duration,
};

use clap::Parser;
use url::Url;

use crate::cli::constants::{
    DEFAULT_BEACON_API_ENDPOINT, DEFAULT_EXECUTION_RPC_ENDPOINT, DEFAULT_METRICS_ADDRESS,
    DEFAULT_METRICS_ENABLED, DEFAULT_METRICS_PORT, DEFAULT_POLL_INTERVAL_SECONDS,
    DEFAULT_REQUEST_TIMEOUT_SECONDS,
};

#[derive(Debug, Parser)]
pub struct MonitorConfig {
    /// Verbosity level
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub verbosity: u8,

    #[arg(
        long,
        env = "RPC_URL",
        help = "The JSON-RPC endpoint of the execution client.",
        default_value = DEFAULT_EXECUTION_RPC_ENDPOINT
    )]
    pub execution_rpc: Url,

    #[arg(
        long,
        env = "BEACON_API_URL",
        help = "The beacon API endpoint of the consensus client.",
        default_value = DEFAULT_BEACON_API_ENDPOINT
    )]
    pub beacon_api: Url,

    #[arg(
        long,
        env = "INTERVAL_SECONDS",
        help = "Seconds between polls.",
        default_value_t = DEFAULT_POLL_INTERVAL_SECONDS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    #[arg(
        long,
        help = "Per-request timeout in seconds.",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECONDS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub request_timeout: u64,

    #[arg(long, help = "Do not clear the screen between refreshes.")]
    pub no_clear: bool,

    #[arg(long, help = "Render a single snapshot and exit.")]
    pub once: bool,

    #[arg(long = "metrics", help = "Enable metrics", default_value_t = DEFAULT_METRICS_ENABLED)]
    pub enable_metrics: bool,

    #[arg(long, help = "Set metrics address", default_value_t = DEFAULT_METRICS_ADDRESS)]
    pub metrics_address: IpAddr,

    #[arg(long, help = "Set metrics port", default_value_t = DEFAULT_METRICS_PORT)]
    pub metrics_port: u16,
}

impl MonitorConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.interval)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn metrics_socket(&self) -> SocketAddr {
        SocketAddr::new(self.metrics_address, self.metrics_port)
    }
}
