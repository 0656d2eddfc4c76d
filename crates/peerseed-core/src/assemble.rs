//! Gossip config assembly.

use crate::types::{GossipConfig, PeerEntry, PeerList};

/// Chain used when none is configured
pub const DEFAULT_CHAIN: &str = "Mainnet";

/// Build the artifact from the final, ordered peer list.
///
/// `try_new_peers` is conventionally `true`; an empty peer list is valid.
#[must_use]
pub fn assemble(peers: PeerList, chain: impl Into<String>, try_new_peers: bool) -> GossipConfig {
    GossipConfig {
        root_node_ips: peers.into_iter().map(PeerEntry::from).collect(),
        try_new_peers,
        chain: chain.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PeerAddress;

    #[test]
    fn test_preserves_order() {
        let peers: PeerList = ["10.0.0.3", "10.0.0.1", "10.0.0.2"]
            .iter()
            .map(|ip| PeerAddress::parse(ip).unwrap())
            .collect();

        let cfg = assemble(peers, "Testnet", true);
        let ips: Vec<_> = cfg.peers().map(PeerAddress::as_str).collect();
        assert_eq!(ips, vec!["10.0.0.3", "10.0.0.1", "10.0.0.2"]);
        assert_eq!(cfg.chain, "Testnet");
        assert!(cfg.try_new_peers);
    }

    #[test]
    fn test_empty_peers() {
        let cfg = assemble(Vec::new(), DEFAULT_CHAIN, true);
        assert_eq!(cfg.peer_count(), 0);
        assert_eq!(cfg.chain, "Mainnet");
        assert!(cfg.try_new_peers);
    }
}
