//! Source chain configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::client::DEFAULT_FETCH_TIMEOUT;

/// Default operator override file
pub const DEFAULT_OVERRIDE_PATH: &str = "/run/secrets/validator_ips.txt";

/// Default local seed document
pub const DEFAULT_DOCUMENT_PATH: &str = "/app/README.md";

/// Default remote seed document
pub const DEFAULT_SEED_URL: &str =
    "https://raw.githubusercontent.com/hyperliquid-dex/node/main/README.md";

/// Where the resolution chain looks for peers
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Operator-supplied newline-separated addresses
    pub override_path: PathBuf,

    /// Local seed document
    pub document_path: PathBuf,

    /// Remote seed document; `None` disables the remote stage
    pub seed_url: Option<String>,

    /// Timeout for the remote fetch
    pub fetch_timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            override_path: PathBuf::from(DEFAULT_OVERRIDE_PATH),
            document_path: PathBuf::from(DEFAULT_DOCUMENT_PATH),
            seed_url: Some(DEFAULT_SEED_URL.to_string()),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

impl SourceConfig {
    /// Set the override file path
    #[must_use]
    pub fn override_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_path = path.into();
        self
    }

    /// Set the local seed document path
    #[must_use]
    pub fn document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.document_path = path.into();
        self
    }

    /// Set (or clear) the remote seed document URL
    #[must_use]
    pub fn seed_url(mut self, url: Option<String>) -> Self {
        self.seed_url = url;
        self
    }

    /// Set the remote fetch timeout
    #[must_use]
    pub const fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }
}
