pub mod rpc_types;
pub mod utils;

use std::time::Duration;

use alloy_primitives::U256;
use anyhow::anyhow;
use reqwest::{Client, Request, Url};
use rpc_types::{block::HeadBlock, eth_syncing::EthSyncing};
use serde_json::json;
use utils::{JsonRpcRequest, JsonRpcResponse, parse_quantity};

/// HTTP JSON-RPC client for the execution client's public endpoint.
///
/// This talks to the user-facing RPC port (`eth_*`, `net_*` namespaces), not
/// the authenticated engine API, so no JWT handling is involved.
#[derive(Debug, Clone)]
pub struct ExecutionClient {
    http_client: Client,
    rpc_url: Url,
}

impl ExecutionClient {
    pub fn new(rpc_url: Url, request_timeout: Duration) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|err| anyhow!("Failed to build HTTP client {err:?}"))?;

        Ok(Self {
            http_client,
            rpc_url,
        })
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    fn build_request(&self, rpc_request: JsonRpcRequest) -> anyhow::Result<Request> {
        Ok(self
            .http_client
            .post(self.rpc_url.clone())
            .json(&rpc_request)
            .build()?)
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> anyhow::Result<T> {
        let http_post_request = self.build_request(JsonRpcRequest::new(method, params))?;

        self.http_client
            .execute(http_post_request)
            .await?
            .json::<JsonRpcResponse<T>>()
            .await?
            .to_result()
    }

    async fn call_quantity(&self, method: &str) -> anyhow::Result<u64> {
        let raw = self.call::<String>(method, vec![]).await?;
        parse_quantity(&raw)
    }

    pub async fn eth_syncing(&self) -> anyhow::Result<EthSyncing> {
        self.call("eth_syncing", vec![]).await
    }

    pub async fn eth_block_number(&self) -> anyhow::Result<u64> {
        self.call_quantity("eth_blockNumber").await
    }

    pub async fn net_peer_count(&self) -> anyhow::Result<u64> {
        self.call_quantity("net_peerCount").await
    }

    pub async fn eth_chain_id(&self) -> anyhow::Result<u64> {
        self.call_quantity("eth_chainId").await
    }

    /// Current gas price in wei.
    pub async fn eth_gas_price(&self) -> anyhow::Result<U256> {
        self.call("eth_gasPrice", vec![]).await
    }

    /// Header fields of the latest block the node knows about.
    pub async fn eth_get_latest_block(&self) -> anyhow::Result<HeadBlock> {
        self.call("eth_getBlockByNumber", vec![json!("latest"), json!(false)])
            .await
    }
}
