//! Resolve, deduplicate and latency-rank gossip seed peers.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use peerseed::{HpingProber, LatencyRanker, Pipeline, ProbeConfig, SourceChain, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> peerseed::Result<()> {
//!     let sources = SourceChain::from_config(&SourceConfig::default())?;
//!     let ranker = LatencyRanker::new(
//!         Arc::new(HpingProber::default()),
//!         ProbeConfig { enabled: true, ..ProbeConfig::default() },
//!     );
//!
//!     let config = Pipeline::new(sources, ranker).chain("Mainnet").run().await;
//!     println!("{}", config.to_json()?);
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/peerseed/0.3.0")]

mod pipeline;

pub use pipeline::Pipeline;

// Re-export core types
pub use peerseed_core::*;

// Re-export sources
pub use peerseed_source::{
    parse_seed_document, LocalDocumentSource, OverrideFileSource, PeerSource,
    RemoteDocumentSource, Resolution, SeedClient, SeedClientBuilder, SourceChain, SourceConfig,
    DEFAULT_DOCUMENT_PATH, DEFAULT_OVERRIDE_PATH, DEFAULT_SEED_URL,
};

// Re-export probing
pub use peerseed_probe::{
    HpingProber, LatencyRanker, ProbeConfig, ProbeError, ProbeOutcome, Prober,
    DEFAULT_PROBE_PORT, DEFAULT_PROBE_TOOL,
};

// Re-export runtime for convenience
pub use serde_json;
pub use tokio;
