use std::fmt::Debug;

use ethwatch_beacon::BeaconApiClient;
use ethwatch_execution::ExecutionClient;
use tracing::warn;

use crate::snapshot::{ConsensusSnapshot, ExecutionSnapshot, Snapshot};

/// Polls both clients and folds the results into a [`Snapshot`].
///
/// Calls are issued sequentially and each failure is downgraded to an empty
/// field: the dashboard keeps refreshing with whatever the nodes still answer.
#[derive(Debug, Clone)]
pub struct Sampler {
    execution: ExecutionClient,
    beacon: BeaconApiClient,
}

impl Sampler {
    pub fn new(execution: ExecutionClient, beacon: BeaconApiClient) -> Self {
        Self { execution, beacon }
    }

    pub async fn sample(&self) -> Snapshot {
        Snapshot {
            execution: self.sample_execution().await,
            consensus: self.sample_consensus().await,
        }
    }

    async fn sample_execution(&self) -> ExecutionSnapshot {
        ExecutionSnapshot {
            syncing: ok_or_warn(self.execution.eth_syncing().await, "eth_syncing"),
            block_number: ok_or_warn(self.execution.eth_block_number().await, "eth_blockNumber"),
            peer_count: ok_or_warn(self.execution.net_peer_count().await, "net_peerCount"),
            chain_id: ok_or_warn(self.execution.eth_chain_id().await, "eth_chainId"),
            gas_price_wei: ok_or_warn(self.execution.eth_gas_price().await, "eth_gasPrice"),
            latest_block: ok_or_warn(
                self.execution.eth_get_latest_block().await,
                "eth_getBlockByNumber",
            ),
        }
    }

    async fn sample_consensus(&self) -> ConsensusSnapshot {
        ConsensusSnapshot {
            sync_status: ok_or_warn(
                self.beacon.get_node_syncing_status().await,
                "/eth/v1/node/syncing",
            )
            .map(|response| response.data),
            head_header_slot: ok_or_warn(
                self.beacon.get_head_header().await,
                "/eth/v1/beacon/headers/head",
            )
            .map(|response| response.data.header.message.slot),
            finalized: ok_or_warn(
                self.beacon.get_finality_checkpoints().await,
                "/eth/v1/beacon/states/head/finality_checkpoints",
            )
            .map(|response| response.data.finalized),
            version: ok_or_warn(self.beacon.get_node_version().await, "/eth/v1/node/version")
                .map(|response| response.data.version),
        }
    }
}

fn ok_or_warn<T, E: Debug>(result: Result<T, E>, endpoint: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("Poll of {endpoint} failed: {err:?}");
            None
        }
    }
}
