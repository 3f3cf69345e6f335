use serde::{Deserialize, Serialize};

/// `GET /eth/v1/node/syncing` payload as defined by the beacon API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct SyncStatus {
    #[serde(with = "serde_utils::quoted_u64")]
    pub head_slot: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub sync_distance: u64,
    pub is_syncing: bool,
    pub is_optimistic: bool,
    pub el_offline: bool,
}
