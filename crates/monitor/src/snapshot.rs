use std::fmt;

use alloy_primitives::U256;
use ethwatch_api_types::{checkpoints::Checkpoint, sync::SyncStatus};
use ethwatch_execution::rpc_types::{
    block::HeadBlock,
    eth_syncing::{EthSyncing, SyncProgress},
};

/// Passthrough of the upstream client's own syncing flag. The monitor never
/// second-guesses it, so these are the only two values a node can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncHealth {
    Synced,
    Syncing,
}

impl SyncHealth {
    pub fn from_syncing_flag(is_syncing: bool) -> Self {
        if is_syncing {
            SyncHealth::Syncing
        } else {
            SyncHealth::Synced
        }
    }
}

impl fmt::Display for SyncHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncHealth::Synced => write!(f, "SYNCED"),
            SyncHealth::Syncing => write!(f, "SYNCING"),
        }
    }
}

/// One poll of the execution client. Every field is independent: a failed
/// call leaves its field empty and the dashboard shows `-` for it.
#[derive(Debug, Clone, Default)]
pub struct ExecutionSnapshot {
    pub syncing: Option<EthSyncing>,
    pub block_number: Option<u64>,
    pub peer_count: Option<u64>,
    pub chain_id: Option<u64>,
    pub gas_price_wei: Option<U256>,
    pub latest_block: Option<HeadBlock>,
}

impl ExecutionSnapshot {
    pub fn health(&self) -> Option<SyncHealth> {
        self.syncing
            .as_ref()
            .map(|syncing| SyncHealth::from_syncing_flag(syncing.is_syncing()))
    }

    pub fn progress(&self) -> Option<&SyncProgress> {
        self.syncing.as_ref().and_then(EthSyncing::progress)
    }

    /// Height used for throughput tracking: the sync progress position while
    /// syncing, the chain head once caught up.
    pub fn observed_height(&self) -> Option<u64> {
        self.progress()
            .map(|progress| progress.current_block)
            .or(self.block_number)
    }
}

/// One poll of the consensus client.
#[derive(Debug, Clone, Default)]
pub struct ConsensusSnapshot {
    pub sync_status: Option<SyncStatus>,
    pub head_header_slot: Option<u64>,
    pub finalized: Option<Checkpoint>,
    pub version: Option<String>,
}

impl ConsensusSnapshot {
    pub fn health(&self) -> Option<SyncHealth> {
        self.sync_status
            .as_ref()
            .map(|status| SyncHealth::from_syncing_flag(status.is_syncing))
    }

    pub fn head_slot(&self) -> Option<u64> {
        self.sync_status
            .as_ref()
            .map(|status| status.head_slot)
            .or(self.head_header_slot)
    }
}

/// Everything observed in a single polling tick. Snapshots carry no identity
/// across ticks; rate tracking lives in [`crate::history::SampleHistory`].
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub execution: ExecutionSnapshot,
    pub consensus: ConsensusSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_is_a_strict_passthrough() {
        assert_eq!(
            SyncHealth::from_syncing_flag(false).to_string(),
            "SYNCED".to_string()
        );
        assert_eq!(
            SyncHealth::from_syncing_flag(true).to_string(),
            "SYNCING".to_string()
        );
    }

    #[test]
    fn health_unknown_when_poll_failed() {
        let snapshot = ExecutionSnapshot::default();
        assert!(snapshot.health().is_none());
        assert!(snapshot.observed_height().is_none());
    }

    #[test]
    fn observed_height_prefers_sync_progress() {
        let snapshot = ExecutionSnapshot {
            syncing: Some(EthSyncing::Syncing(Box::new(SyncProgress {
                starting_block: 0,
                current_block: 100,
                highest_block: 200,
                pulled_states: None,
                known_states: None,
            }))),
            block_number: Some(99),
            ..Default::default()
        };
        assert_eq!(snapshot.observed_height(), Some(100));

        let synced = ExecutionSnapshot {
            syncing: Some(EthSyncing::Synced(false)),
            block_number: Some(99),
            ..Default::default()
        };
        assert_eq!(synced.observed_height(), Some(99));
    }

    #[test]
    fn consensus_head_slot_falls_back_to_header() {
        let snapshot = ConsensusSnapshot {
            head_header_slot: Some(42),
            ..Default::default()
        };
        assert_eq!(snapshot.head_slot(), Some(42));
    }
}
