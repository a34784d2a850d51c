use crate::model::{MetricsSnapshot, UpdateFeed};
use crate::source::error::SourceError;

pub(crate) mod client;
pub(crate) mod local;
pub use client::HttpDataSource;
pub use local::DirectoryDataSource;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// Where the dashboard reads its two resources from.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    /// Human readable location, for the info line and diagnostics.
    fn describe(&self) -> String;

    /// Fetch the metrics resource.
    async fn fetch_metrics(&self) -> Result<MetricsSnapshot, SourceError>;

    /// Fetch the updates resource.
    async fn fetch_updates(&self) -> Result<UpdateFeed, SourceError>;
}
