//! Single-pass resolve, deduplicate, rank and assemble.

use peerseed_core::{assemble, dedup_preserving_order, GossipConfig, DEFAULT_CHAIN};
use peerseed_probe::LatencyRanker;
use peerseed_source::SourceChain;
use tracing::info;

/// Drives one run of the peer seeding pipeline.
///
/// Every stage degrades rather than fails, so [`Pipeline::run`] always
/// produces a config, possibly with no peers.
pub struct Pipeline {
    sources: SourceChain,
    ranker: LatencyRanker,
    chain: String,
    try_new_peers: bool,
}

impl Pipeline {
    /// Create a pipeline for the default chain that accepts new peers
    pub fn new(sources: SourceChain, ranker: LatencyRanker) -> Self {
        Self {
            sources,
            ranker,
            chain: DEFAULT_CHAIN.to_string(),
            try_new_peers: true,
        }
    }

    /// Set the chain identifier written into the config
    #[must_use]
    pub fn chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = chain.into();
        self
    }

    /// Set whether the node may try peers beyond the seed list
    #[must_use]
    pub const fn try_new_peers(mut self, allow: bool) -> Self {
        self.try_new_peers = allow;
        self
    }

    /// Run all stages and build the gossip config
    pub async fn run(&self) -> GossipConfig {
        let resolution = self.sources.resolve().await;
        let raw = resolution.peers.len();

        let unique = dedup_preserving_order(resolution.peers);
        if unique.len() != raw {
            info!(raw, unique = unique.len(), "removed duplicate peers");
        }

        let ranked = self.ranker.rank(unique).await;
        let config = assemble(ranked, self.chain.clone(), self.try_new_peers);
        info!(
            chain = %config.chain,
            peers = config.peer_count(),
            source = resolution.source.as_deref().unwrap_or("none"),
            "gossip config assembled"
        );
        config
    }
}
