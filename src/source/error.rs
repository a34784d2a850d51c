//! Error handling for the data source module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The resource body is not the expected JSON shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading a resource from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    pub async fn from_response(response: reqwest::Response) -> SourceError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        SourceError::Http { status, message }
    }

    /// Short description for the activity log. Transport failures are named by
    /// kind instead of by their full reqwest chain.
    pub fn summary(&self) -> String {
        match self {
            SourceError::Reqwest(e) if e.is_timeout() => "request timed out".to_string(),
            SourceError::Reqwest(e) if e.is_connect() => "connection failed".to_string(),
            SourceError::Reqwest(_) => "network error".to_string(),
            other => other.to_string(),
        }
    }
}
