use crate::logging::LogLevel;
use crate::source::error::SourceError;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &SourceError) -> LogLevel {
        match error {
            // Resource not published yet, or a temporary server issue
            SourceError::Http { status, .. } if *status == 404 => LogLevel::Warn,
            SourceError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: access problems, malformed responses
            SourceError::Http { status, .. } if (400..=499).contains(status) => LogLevel::Error,
            SourceError::Decode(_) => LogLevel::Error,

            // Network and filesystem issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
