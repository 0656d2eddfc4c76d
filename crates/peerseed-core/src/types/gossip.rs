use super::PeerAddress;
use serde::{Deserialize, Serialize};

/// Ordered peer addresses. Order reflects source priority, then rank.
pub type PeerList = Vec<PeerAddress>;

/// A single root peer as the node expects it: `{"Ip": "1.2.3.4"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerEntry {
    /// Peer address
    #[serde(rename = "Ip")]
    pub ip: PeerAddress,
}

impl From<PeerAddress> for PeerEntry {
    fn from(ip: PeerAddress) -> Self {
        Self { ip }
    }
}

/// The gossip override config consumed by the node at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GossipConfig {
    /// Seed peers, best first
    pub root_node_ips: Vec<PeerEntry>,

    /// Whether the node may connect to peers beyond the seed list
    pub try_new_peers: bool,

    /// Network/chain identifier (e.g. `Mainnet`, `Testnet`)
    pub chain: String,
}

impl GossipConfig {
    /// Number of seed peers
    #[must_use]
    pub fn peer_count(&self) -> usize {
        self.root_node_ips.len()
    }

    /// Iterate over seed peer addresses in order
    pub fn peers(&self) -> impl Iterator<Item = &PeerAddress> {
        self.root_node_ips.iter().map(|entry| &entry.ip)
    }

    /// Serialize to the compact JSON the node reads
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let cfg = GossipConfig {
            root_node_ips: vec![PeerEntry::from(PeerAddress::parse("1.2.3.4").unwrap())],
            try_new_peers: true,
            chain: "Mainnet".into(),
        };
        assert_eq!(
            cfg.to_json().unwrap(),
            r#"{"root_node_ips":[{"Ip":"1.2.3.4"}],"try_new_peers":true,"chain":"Mainnet"}"#
        );
    }

    #[test]
    fn test_empty_peer_list_serializes() {
        let cfg = GossipConfig {
            root_node_ips: Vec::new(),
            try_new_peers: true,
            chain: "Testnet".into(),
        };
        let value: serde_json::Value = serde_json::from_str(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(value["root_node_ips"], serde_json::json!([]));
        assert_eq!(value["chain"], "Testnet");
    }
}
