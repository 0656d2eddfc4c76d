//! Prioritized, fail-soft resolution chain.

use crate::client::SeedClient;
use crate::config::SourceConfig;
use crate::sources::{LocalDocumentSource, OverrideFileSource, PeerSource, RemoteDocumentSource};
use peerseed_core::{PeerAddress, Result};
use tracing::{info, warn};

/// Outcome of running the chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Raw addresses from the winning source (may contain duplicates)
    pub peers: Vec<PeerAddress>,

    /// Name of the source that produced them, if any did
    pub source: Option<String>,
}

impl Resolution {
    /// Returns true if every source came up empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}

/// Ordered list of sources; the first non-empty one wins.
#[derive(Default)]
pub struct SourceChain {
    sources: Vec<Box<dyn PeerSource>>,
}

impl SourceChain {
    /// Create an empty chain
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard chain: override file, local document, remote document.
    ///
    /// The remote stage runs whenever the local document is missing or yields
    /// no rows.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let mut chain = Self::new()
            .with(OverrideFileSource::new(&config.override_path))
            .with(LocalDocumentSource::new(&config.document_path));

        if let Some(url) = &config.seed_url {
            let client = SeedClient::builder().timeout(config.fetch_timeout).build()?;
            chain = chain.with(RemoteDocumentSource::new(client, url.clone()));
        }
        Ok(chain)
    }

    /// Append a source at the lowest priority
    #[must_use]
    pub fn with(mut self, source: impl PeerSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Number of configured sources
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if no sources are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Try each source in order, stopping at the first that yields peers.
    ///
    /// Never fails: source errors are logged and treated as empty.
    pub async fn resolve(&self) -> Resolution {
        for source in &self.sources {
            match source.resolve().await {
                Ok(peers) if !peers.is_empty() => {
                    info!(source = source.name(), count = peers.len(), "resolved seed peers");
                    return Resolution {
                        peers,
                        source: Some(source.name().to_string()),
                    };
                }
                Ok(_) => info!(source = source.name(), "source yielded no peers"),
                Err(e) => warn!(source = source.name(), error = %e, "source failed, falling back"),
            }
        }

        warn!("no seed peers found in any source");
        Resolution::default()
    }
}
