use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// `GET /eth/v1/beacon/headers/{block_id}` payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BeaconHeaderData {
    pub root: B256,
    pub canonical: bool,
    pub header: SignedBeaconHeader,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SignedBeaconHeader {
    pub message: BeaconHeaderMessage,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BeaconHeaderMessage {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: u64,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: u64,
    pub parent_root: B256,
    pub state_root: B256,
    pub body_root: B256,
}

#[cfg(test)]
mod tests {
    use crate::response::DataResponse;

    use super::*;

    #[test]
    fn deserializes_head_header_response() {
        let response: DataResponse<BeaconHeaderData> = serde_json::from_str(
            r#"{
                "execution_optimistic": false,
                "finalized": false,
                "data": {
                    "root": "0x272fc48b5a1e32b0b2b7d0b922a20b1f1a1a0072e5c7b2d7e1e19fef13b0d1cf",
                    "canonical": true,
                    "header": {
                        "message": {
                            "slot": "9876543",
                            "proposer_index": "261904",
                            "parent_root": "0x5d7f3b8e5b083bb280e542b9df0a5d2b84b1b5341c029a312a289b2b6d9a8a25",
                            "state_root": "0x9c1a09e0f7c33b9bd0ffa7b8b6dbb768bda7f1a94d764c5e0b7f3a3c0924ad1b",
                            "body_root": "0xd6a1a3a85a29c7c5a70f4bb4f9e6a36c7df0e1d86a2f6b81f42a3f04cd1b4e71"
                        },
                        "signature": "0x1b66ac1fb663c9bc59509846d6ec05345bd908eda73e670af888da41af171505"
                    }
                }
            }"#,
        )
        .expect("should deserialize");

        assert!(response.data.canonical);
        assert_eq!(response.data.header.message.slot, 9_876_543);
    }
}
