//! Core types for gossip peer seeding.
//!
//! This crate provides the foundational types shared across the peerseed workspace:
//!
//! - **Types**: [`PeerAddress`], [`PeerList`] and the [`GossipConfig`] artifact
//! - **Deduplication**: [`dedup_preserving_order`]
//! - **Assembly**: [`assemble`] turns a ranked peer list into a [`GossipConfig`]
//! - **Errors**: [`PeerSeedError`]
//!
//! # Example
//!
//! ```rust
//! use peerseed_core::{assemble, dedup_preserving_order, PeerAddress};
//!
//! let raw = ["10.0.0.1", "10.0.0.2", "10.0.0.1"];
//! let peers: Vec<PeerAddress> = dedup_preserving_order(raw)
//!     .into_iter()
//!     .filter_map(|ip| PeerAddress::parse(ip).ok())
//!     .collect();
//!
//! let cfg = assemble(peers, "Mainnet", true);
//! assert_eq!(cfg.peer_count(), 2);
//! ```

#![doc(html_root_url = "https://docs.rs/peerseed-core/0.3.0")]

mod assemble;
mod dedup;
mod error;
pub mod types;

pub use assemble::{assemble, DEFAULT_CHAIN};
pub use dedup::dedup_preserving_order;
pub use error::{PeerSeedError, Result};
pub use types::*;
