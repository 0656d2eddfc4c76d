//! HTTP client for fetching seed documents.

use peerseed_core::{PeerSeedError, Result};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches seed documents over HTTP(S). TLS certificates are always verified.
#[derive(Clone)]
pub struct SeedClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    timeout: Duration,
}

impl SeedClient {
    /// Create a client with default settings
    pub fn new() -> Result<Self> {
        SeedClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> SeedClientBuilder {
        SeedClientBuilder::new()
    }

    /// Configured request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// GET `url` and return the body as text.
    pub async fn fetch_document(&self, url: &str) -> Result<String> {
        let url = url::Url::parse(url).map_err(|e| PeerSeedError::InvalidUrl(format!("{url}: {e}")))?;
        debug!(url = %url, "GET seed document");

        let response = self
            .inner
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "seed document request rejected");
            return Err(PeerSeedError::Api {
                code: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(&e))?;
        debug!(url = %url, bytes = body.len(), "seed document received");
        Ok(body)
    }

    fn map_transport_error(&self, err: &reqwest::Error) -> PeerSeedError {
        if err.is_timeout() {
            PeerSeedError::Timeout(self.inner.timeout)
        } else {
            PeerSeedError::Http(err.to_string())
        }
    }
}

/// Builder for configuring a [`SeedClient`]
pub struct SeedClientBuilder {
    timeout: Duration,
    user_agent: String,
}

impl Default for SeedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_FETCH_TIMEOUT,
            user_agent: format!("peerseed/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<SeedClient> {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| PeerSeedError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(SeedClient {
            inner: Arc::new(ClientInner {
                http,
                timeout: self.timeout,
            }),
        })
    }
}
