use serde::{Deserialize, Serialize};

/// `GET /eth/v1/node/version` payload.
///
/// example: `Lighthouse/v5.3.0-d6ba8c3/x86_64-linux`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeVersion {
    pub version: String,
}
