//! HTTP data source
//!
//! Fetches the dashboard resources relative to a base URL.

use crate::consts::dashboard_consts::resources;
use crate::model::{MetricsSnapshot, UpdateFeed};
use crate::source::DataSource;
use crate::source::error::SourceError;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("team-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let client = ClientBuilder::new()
            .connect_timeout(resources::connect_timeout())
            .timeout(resources::request_timeout())
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Use a preconfigured reqwest client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, SourceError> {
        if !response.status().is_success() {
            return Err(SourceError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, SourceError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }
}

#[async_trait::async_trait]
impl DataSource for HttpDataSource {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch_metrics(&self) -> Result<MetricsSnapshot, SourceError> {
        self.get_json(resources::METRICS_PATH).await
    }

    async fn fetch_updates(&self) -> Result<UpdateFeed, SourceError> {
        self.get_json(resources::UPDATES_PATH).await
    }
}
