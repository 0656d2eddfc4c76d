//! Peer sources for gossip seeding.
//!
//! This crate provides the prioritized resolution chain used to find seed peers:
//!
//! 1. an operator override file of newline-separated addresses,
//! 2. a local seed document (`operator,ip` rows),
//! 3. the same document fetched over HTTPS with [`SeedClient`].
//!
//! Each stage only runs when every earlier stage yielded nothing, and no stage
//! failure is fatal.

#![doc(html_root_url = "https://docs.rs/peerseed-source/0.3.0")]

mod chain;
mod client;
mod config;
pub mod document;
pub mod sources;

pub use chain::{Resolution, SourceChain};
pub use client::{SeedClient, SeedClientBuilder, DEFAULT_FETCH_TIMEOUT};
pub use config::*;
pub use document::parse_seed_document;
pub use peerseed_core::{PeerSeedError, Result};
pub use sources::{LocalDocumentSource, OverrideFileSource, PeerSource, RemoteDocumentSource};
