use std::time::Duration;
use thiserror::Error;

/// Result type alias for peer seeding operations
pub type Result<T> = std::result::Result<T, PeerSeedError>;

/// Errors that can occur while resolving, ranking or writing peers
#[derive(Error, Debug)]
pub enum PeerSeedError {
    /// Filesystem I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Remote server answered with a non-success status
    #[error("remote error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// Request timed out
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// String is not a dotted-quad IPv4 address
    #[error("invalid peer address: {0:?}")]
    InvalidAddress(String),

    /// Latency probe failed
    #[error("probe failed: {0}")]
    Probe(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl PeerSeedError {
    /// Returns true if the error came from talking to a remote host
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. } | Self::Timeout(_))
    }

    /// Returns the HTTP status code if this is a remote error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_reports_subsecond_budget() {
        let err = PeerSeedError::Timeout(Duration::from_millis(200));
        assert_eq!(err.to_string(), "request timed out after 200ms");
        assert!(err.is_network());
    }

    #[test]
    fn test_status_code() {
        let err = PeerSeedError::Api {
            code: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(PeerSeedError::Http("reset".to_string()).status_code(), None);
    }
}
