use serde::Deserialize;

use crate::utils::{quantity, quantity_opt};

/// Response of `eth_syncing`: `false` once the node considers itself synced,
/// otherwise a progress object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EthSyncing {
    Synced(bool),
    Syncing(Box<SyncProgress>),
}

impl EthSyncing {
    pub fn is_syncing(&self) -> bool {
        match self {
            EthSyncing::Synced(flag) => *flag,
            EthSyncing::Syncing(_) => true,
        }
    }

    pub fn progress(&self) -> Option<&SyncProgress> {
        match self {
            EthSyncing::Synced(_) => None,
            EthSyncing::Syncing(progress) => Some(progress),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncProgress {
    #[serde(with = "quantity")]
    pub starting_block: u64,
    #[serde(with = "quantity")]
    pub current_block: u64,
    #[serde(with = "quantity")]
    pub highest_block: u64,
    /// Snap-sync state download counters, absent on consensus-driven sync.
    #[serde(default, with = "quantity_opt")]
    pub pulled_states: Option<u64>,
    #[serde(default, with = "quantity_opt")]
    pub known_states: Option<u64>,
}
