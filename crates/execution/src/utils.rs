use anyhow::{anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub fn strip_prefix(string: &str) -> &str {
    if let Some(stripped) = string.strip_prefix("0x") {
        stripped
    } else {
        string
    }
}

/// Parse a JSON-RPC hex quantity (`"0x4e5dd6"`) into a `u64`.
///
/// An empty string decodes to zero, matching what the upstream clients return
/// before a field is populated.
pub fn parse_quantity(value: &str) -> anyhow::Result<u64> {
    let digits = strip_prefix(value.trim());
    if digits.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(digits, 16)
        .map_err(|err| anyhow!("Invalid hex quantity {value:?}: {err}"))
}

/// Serde adapter for hex-quantity fields.
pub mod quantity {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_quantity(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional hex-quantity fields.
pub mod quantity_opt {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse_quantity(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub id: i32,
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<serde_json::Value>,
}

impl JsonRpcRequest {
    pub fn new(method: &str, params: Vec<Value>) -> Self {
        Self {
            id: 1,
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        }
    }
}

// Wrapper to extract "result" without cloning
#[derive(Deserialize)]
#[serde(untagged)]
pub enum JsonRpcResponse<T> {
    Result { result: T },
    Error(Value),
}

impl<T> JsonRpcResponse<T> {
    pub fn to_result(self) -> anyhow::Result<T> {
        match self {
            JsonRpcResponse::Result { result } => Ok(result),
            JsonRpcResponse::Error(err) => bail!("JSON-RPC error response: {err:?}"),
        }
    }
}
