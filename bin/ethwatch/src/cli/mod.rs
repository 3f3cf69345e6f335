pub mod constants;
pub mod monitor;

use clap::{Parser, Subcommand};
use monitor::MonitorConfig;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Watch execution and consensus client sync progress
    #[command(name = "monitor")]
    Monitor(MonitorConfig),
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_cli_monitor_command() {
        // RPC_URL, BEACON_API_URL and INTERVAL_SECONDS feed these flags, so
        // clear them before asserting the built-in defaults.
        unsafe {
            std::env::remove_var("RPC_URL");
            std::env::remove_var("BEACON_API_URL");
            std::env::remove_var("INTERVAL_SECONDS");
        }
        let cli = Cli::parse_from(["program", "monitor", "--verbosity", "2"]);

        match cli.command {
            Commands::Monitor(config) => {
                assert_eq!(config.verbosity, 2);
                assert_eq!(config.execution_rpc.as_str(), "http://localhost:8545/");
                assert_eq!(config.beacon_api.as_str(), "http://localhost:5052/");
                assert_eq!(config.poll_interval(), Duration::from_secs(5));
                assert!(!config.enable_metrics);
            }
        }
    }

    #[test]
    fn test_cli_monitor_overrides() {
        let cli = Cli::parse_from([
            "program",
            "monitor",
            "--execution-rpc",
            "http://10.0.0.2:8545",
            "--beacon-api",
            "http://10.0.0.2:5052",
            "--interval",
            "10",
            "--once",
            "--metrics",
            "--metrics-port",
            "9300",
        ]);

        match cli.command {
            Commands::Monitor(config) => {
                assert_eq!(config.beacon_api.as_str(), "http://10.0.0.2:5052/");
                assert_eq!(config.poll_interval(), Duration::from_secs(10));
                assert!(config.once);
                assert!(config.enable_metrics);
                assert_eq!(config.metrics_socket().port(), 9300);
            }
        }
    }

    #[test]
    fn test_cli_rejects_zero_interval() {
        assert!(Cli::try_parse_from(["program", "monitor", "--interval", "0"]).is_err());
    }
}
