//! # peerseed-cli
//!
//! Command-line front end that writes the node's gossip override config.
//!
//! ## Features
//!
//! - **Prioritized sources**: override file, local seed document, remote seed document
//! - **Latency ranking**: optional `hping3` probes reorder peers best-first
//! - **Layered configuration**: flags, environment variables, TOML file
//! - **Atomic output**: the artifact is replaced in one rename

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
