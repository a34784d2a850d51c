use crate::consts::dashboard_consts::resources::LOCAL_BASE_URL;
use crate::source::error::SourceError;
use crate::source::{DataSource, DirectoryDataSource, HttpDataSource};
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Where the dashboard's data lives.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development server.
    #[default]
    Local,
    /// Any other web server publishing the `data/` resources.
    Custom { base_url: String },
    /// A directory laid out like the web root, read straight from disk.
    Directory { path: PathBuf },
}

impl Environment {
    /// Builds the data source for this environment.
    pub fn data_source(&self) -> Result<Arc<dyn DataSource>, SourceError> {
        let source: Arc<dyn DataSource> = match self {
            Environment::Local => Arc::new(HttpDataSource::new(LOCAL_BASE_URL)?),
            Environment::Custom { base_url } => Arc::new(HttpDataSource::new(base_url.clone())?),
            Environment::Directory { path } => Arc::new(DirectoryDataSource::new(path.clone())),
        };
        Ok(source)
    }

    /// Location shown to the user.
    pub fn location(&self) -> String {
        match self {
            Environment::Local => LOCAL_BASE_URL.to_string(),
            Environment::Custom { base_url } => base_url.clone(),
            Environment::Directory { path } => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnvironmentError(String);

impl Display for ParseEnvironmentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid environment {:?}: expected \"local\" or an http(s) URL",
            self.0
        )
    }
}

impl std::error::Error for ParseEnvironmentError {}

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        if lower == "local" {
            return Ok(Environment::Local);
        }
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Environment::Custom {
                base_url: trimmed.to_string(),
            });
        }
        Err(ParseEnvironmentError(s.to_string()))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
            Environment::Directory { .. } => write!(f, "Directory"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, Location: {}", self, self.location())
    }
}
