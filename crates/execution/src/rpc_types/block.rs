use alloy_primitives::B256;
use serde::Deserialize;

use crate::utils::quantity;

/// The subset of an `eth_getBlockByNumber` response the monitor cares about.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadBlock {
    #[serde(with = "quantity")]
    pub number: u64,
    #[serde(with = "quantity")]
    pub timestamp: u64,
    pub hash: B256,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_head_block() {
        let block: HeadBlock = serde_json::from_str(
            r#"{
                "number": "0x1609928",
                "timestamp": "0x66f2a1c4",
                "hash": "0x9b83c12c69edb74f6c8dd5d052765c1adf940e320bd1291696e6fa07ed0e4eac",
                "gasUsed": "0xa2f3b1"
            }"#,
        )
        .expect("should deserialize");

        assert_eq!(block.number, 0x1609928);
        assert_eq!(block.timestamp, 0x66f2a1c4);
    }
}
