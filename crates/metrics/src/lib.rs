use std::net::SocketAddr;

use anyhow::anyhow;
use prometheus_exporter::{
    Exporter,
    prometheus::{IntGaugeVec, default_registry, register_int_gauge_vec_with_registry},
};

// Provisioning each metric
lazy_static::lazy_static! {
    pub static ref EXECUTION_BLOCK_HEIGHT: IntGaugeVec = create_int_gauge_vec(
        "ethwatch_execution_block_height",
        "Last observed execution block height",
        &[]
    );

    pub static ref EXECUTION_SYNC_LAG: IntGaugeVec = create_int_gauge_vec(
        "ethwatch_execution_sync_lag",
        "Blocks between the execution sync target and the current block",
        &[]
    );

    pub static ref EXECUTION_PEER_COUNT: IntGaugeVec = create_int_gauge_vec(
        "ethwatch_execution_peer_count",
        "Peers connected to the execution client",
        &[]
    );

    pub static ref CONSENSUS_HEAD_SLOT: IntGaugeVec = create_int_gauge_vec(
        "ethwatch_consensus_head_slot",
        "Last observed consensus head slot",
        &[]
    );

    pub static ref CONSENSUS_SYNC_DISTANCE: IntGaugeVec = create_int_gauge_vec(
        "ethwatch_consensus_sync_distance",
        "Slots between the network head and the local consensus head",
        &[]
    );

    pub static ref CONSENSUS_FINALIZED_EPOCH: IntGaugeVec = create_int_gauge_vec(
        "ethwatch_consensus_finalized_epoch",
        "Last observed finalized epoch",
        &[]
    );
}

/// Create a new gauge metric
pub fn create_int_gauge_vec(name: &str, help: &str, label_names: &[&str]) -> IntGaugeVec {
    let registry = default_registry();
    register_int_gauge_vec_with_registry!(name, help, label_names, registry)
        .expect("failed to create int gauge vec")
}

/// Set the value of a gauge metric
pub fn set_int_gauge_vec(gauge_vec: &IntGaugeVec, value: i64, label_values: &[&str]) {
    gauge_vec.with_label_values(label_values).set(value);
}

/// Serve the default registry over HTTP for Prometheus scrapes.
pub fn start_exporter(address: SocketAddr) -> anyhow::Result<Exporter> {
    prometheus_exporter::start(address)
        .map_err(|err| anyhow!("Failed to start metrics exporter on {address}: {err:?}"))
}
