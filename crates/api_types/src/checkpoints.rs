use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// Slots per epoch on mainnet and every network this monitor targets.
pub const SLOTS_PER_EPOCH: u64 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Checkpoint {
    #[serde(with = "serde_utils::quoted_u64")]
    pub epoch: u64,
    pub root: B256,
}

impl Checkpoint {
    /// First slot of the checkpoint's epoch.
    pub fn start_slot(&self) -> u64 {
        self.epoch * SLOTS_PER_EPOCH
    }
}

/// `GET /eth/v1/beacon/states/{state_id}/finality_checkpoints` payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FinalityCheckpoints {
    pub previous_justified: Checkpoint,
    pub current_justified: Checkpoint,
    pub finalized: Checkpoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_finality_checkpoints() {
        let checkpoints: FinalityCheckpoints = serde_json::from_str(
            r#"{
                "previous_justified": {
                    "epoch": "308665",
                    "root": "0x7b3e54e25ae1a87e43153c35890534d422794bbd2f77d552a69a2ab3472d0a3e"
                },
                "current_justified": {
                    "epoch": "308666",
                    "root": "0x1b8c23fa421dff471952eaf8a2b8e4f0c1b8e90cf63e6a4b3c4dbb09ba4e4f04"
                },
                "finalized": {
                    "epoch": "308664",
                    "root": "0x2d1a3c7e42b5a8d9f0e1c2b3a4d5e6f708192a3b4c5d6e7f8091a2b3c4d5e6f7"
                }
            }"#,
        )
        .expect("should deserialize");

        assert_eq!(checkpoints.finalized.epoch, 308_664);
        assert_eq!(checkpoints.finalized.start_slot(), 308_664 * 32);
    }
}
