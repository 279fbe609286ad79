//! HTTP client for the RMM device directory.
//!
//! [`NinjaClient`] implements [`Directory`] against the remote v2 REST API.
//! It is constructed from values the caller already validated (base URL and
//! the API key id/secret pair) and never reads the process environment
//! itself.

use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::contract::{Device, Directory, DirectoryError, Organization};

/// Directory client backed by the RMM HTTP API.
pub struct NinjaClient {
    http: reqwest::Client,
    base_url: String,
    key_id: String,
    secret: String,
}

impl NinjaClient {
    pub fn new(
        base_url: impl Into<String>,
        key_id: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        let key_id = key_id.into();
        info!(base_url = %base_url, key_id_set = !key_id.is_empty(), "Initialized directory client");
        Self {
            http: reqwest::Client::new(),
            base_url,
            key_id,
            secret: secret.into(),
        }
    }

    /// GET `path` relative to the base URL and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DirectoryError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        debug!(url = %url, "Directory API request");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.key_id, Some(&self.secret))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<Failed to decode response body>"));
            error!(status = %status, url = %url, "Directory API returned error. Response body: {body}");
            return Err(format!("directory API error: status {status} for {url}").into());
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl Directory for NinjaClient {
    async fn list_group_device_ids(
        &self,
        group_id: &str,
    ) -> Result<Vec<String>, DirectoryError> {
        info!(group_id, "Listing device ids for group");
        let ids: Vec<String> = self
            .get_json(&format!("/v2/group/{group_id}/device-ids"))
            .await?;
        info!(group_id, count = ids.len(), "Listed device group");
        Ok(ids)
    }

    async fn get_device(&self, device_id: &str) -> Result<Device, DirectoryError> {
        debug!(device_id, "Fetching device");
        self.get_json(&format!("/v2/device/{device_id}")).await
    }

    async fn get_organization(
        &self,
        organization_id: &str,
    ) -> Result<Organization, DirectoryError> {
        debug!(organization_id, "Fetching organization");
        self.get_json(&format!("/v2/organization/{organization_id}"))
            .await
    }
}
