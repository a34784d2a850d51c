//! Directory data source
//!
//! Reads the dashboard resources from a directory laid out like the web root.

use crate::consts::dashboard_consts::resources;
use crate::model::{MetricsSnapshot, UpdateFeed};
use crate::source::DataSource;
use crate::source::error::SourceError;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DirectoryDataSource {
    root: PathBuf,
}

impl DirectoryDataSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read_json<T: DeserializeOwned>(&self, relative: &str) -> Result<T, SourceError> {
        let buf = tokio::fs::read(self.root.join(relative)).await?;
        Ok(serde_json::from_slice(&buf)?)
    }
}

#[async_trait::async_trait]
impl DataSource for DirectoryDataSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    async fn fetch_metrics(&self) -> Result<MetricsSnapshot, SourceError> {
        self.read_json(resources::METRICS_PATH).await
    }

    async fn fetch_updates(&self) -> Result<UpdateFeed, SourceError> {
        self.read_json(resources::UPDATES_PATH).await
    }
}
