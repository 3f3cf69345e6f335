use std::net::{IpAddr, Ipv4Addr};

pub const DEFAULT_BEACON_API_ENDPOINT: &str = "http://localhost:5052";
pub const DEFAULT_EXECUTION_RPC_ENDPOINT: &str = "http://localhost:8545";
pub const DEFAULT_METRICS_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
pub const DEFAULT_METRICS_ENABLED: bool = false;
pub const DEFAULT_METRICS_PORT: u16 = 8080;
pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 5;
