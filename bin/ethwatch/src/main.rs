pub mod cli;

use clap::Parser;
use ethwatch_beacon::BeaconApiClient;
use ethwatch_execution::ExecutionClient;
use ethwatch_monitor::{
    sampler::Sampler,
    service::{MonitorService, MonitorSettings},
};
use ethwatch_render::Dashboard;
use tracing::{Level, info};

use crate::cli::{Cli, Commands, monitor::MonitorConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Monitor(config) => {
            let level = match config.verbosity {
                1 => Level::ERROR,
                2 => Level::WARN,
                3 => Level::INFO,
                4 => Level::DEBUG,
                _ => Level::TRACE,
            };
            tracing_subscriber::fmt().with_max_level(level).init();

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(run_monitor(config))
        }
    }
}

async fn run_monitor(config: MonitorConfig) -> anyhow::Result<()> {
    info!(
        "Polling {} and {} every {}s",
        config.execution_rpc, config.beacon_api, config.interval
    );

    let execution = ExecutionClient::new(config.execution_rpc.clone(), config.request_timeout())?;
    let beacon = BeaconApiClient::new(config.beacon_api.clone(), config.request_timeout())?;

    // The exporter thread lives as long as this guard does.
    let _exporter = if config.enable_metrics {
        let socket = config.metrics_socket();
        info!("Serving Prometheus metrics on http://{socket}/metrics");
        Some(ethwatch_metrics::start_exporter(socket)?)
    } else {
        None
    };

    let clear_screen = !config.no_clear && !config.once;
    let mut dashboard = Dashboard::new(clear_screen, config.poll_interval());
    dashboard.enter()?;

    let settings = MonitorSettings {
        poll_interval: config.poll_interval(),
        once: config.once,
        record_metrics: config.enable_metrics,
    };
    MonitorService::new(Sampler::new(execution, beacon), dashboard, settings)
        .run()
        .await
}
