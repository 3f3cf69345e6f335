pub mod http_client;

use std::time::Duration;

use ethwatch_api_types::{
    checkpoints::FinalityCheckpoints, error::ApiError, header::BeaconHeaderData,
    node::NodeVersion, response::DataResponse, sync::SyncStatus,
};
use http_client::ClientWithBaseUrl;
use reqwest::Url;

/// Read-only client for the consensus client's beacon API.
#[derive(Debug, Clone)]
pub struct BeaconApiClient {
    http_client: ClientWithBaseUrl,
}

impl BeaconApiClient {
    pub fn new(beacon_api_endpoint: Url, request_timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            http_client: ClientWithBaseUrl::new(beacon_api_endpoint, request_timeout)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        self.http_client.base_url()
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http_client
            .execute(self.http_client.get(path)?.build()?)
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::RequestFailed {
                status_code: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn get_node_syncing_status(&self) -> Result<DataResponse<SyncStatus>, ApiError> {
        self.get_json("eth/v1/node/syncing").await
    }

    pub async fn get_head_header(&self) -> Result<DataResponse<BeaconHeaderData>, ApiError> {
        self.get_json("eth/v1/beacon/headers/head").await
    }

    pub async fn get_finality_checkpoints(
        &self,
    ) -> Result<DataResponse<FinalityCheckpoints>, ApiError> {
        self.get_json("eth/v1/beacon/states/head/finality_checkpoints")
            .await
    }

    pub async fn get_node_version(&self) -> Result<DataResponse<NodeVersion>, ApiError> {
        self.get_json("eth/v1/node/version").await
    }
}
