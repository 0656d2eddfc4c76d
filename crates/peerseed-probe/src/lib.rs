//! Latency probing for gossip seed peers.
//!
//! Probing is optional: the [`LatencyRanker`] is an identity transform unless
//! it is enabled and its [`Prober`] reports the probe tool as available.

#![doc(html_root_url = "https://docs.rs/peerseed-probe/0.3.0")]

mod error;
pub mod outcome;
pub mod prober;
pub mod ranker;

pub use error::{ProbeError, ProbeResult};
pub use outcome::{parse_rtts, ProbeOutcome, RankedPeer, UNREACHABLE_SCORE_MS};
pub use prober::{HpingProber, Prober, DEFAULT_PROBE_TOOL};
pub use ranker::{LatencyRanker, ProbeConfig, DEFAULT_PROBE_PORT};
