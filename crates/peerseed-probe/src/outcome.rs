//! Probe outcomes and output parsing.

use peerseed_core::PeerAddress;
use regex::Regex;
use std::sync::OnceLock;

/// Score of an unreachable peer. Larger than any real measurement.
pub const UNREACHABLE_SCORE_MS: f64 = 1e9;

/// Result of probing one peer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeOutcome {
    /// Mean round-trip time in milliseconds
    Measured(f64),
    /// No round-trip time could be measured
    Unreachable,
}

impl ProbeOutcome {
    /// Build an outcome from raw samples: their mean, or unreachable if empty.
    #[must_use]
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            Self::Unreachable
        } else {
            #[allow(clippy::cast_precision_loss)]
            let mean = samples.iter().sum::<f64>() / samples.len() as f64;
            Self::Measured(mean)
        }
    }

    /// Sort key in milliseconds
    #[must_use]
    pub fn score(&self) -> f64 {
        match self {
            Self::Measured(ms) => *ms,
            Self::Unreachable => UNREACHABLE_SCORE_MS,
        }
    }

    /// Returns true if a latency was measured
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        matches!(self, Self::Measured(_))
    }
}

impl std::fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Measured(ms) => write!(f, "{ms:.2} ms"),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// A peer paired with its probe outcome
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPeer {
    /// Probed address
    pub address: PeerAddress,
    /// What the probe measured
    pub outcome: ProbeOutcome,
}

fn rtt_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?:rtt|time)[=<]\s*([0-9]+(?:\.[0-9]+)?)\s*ms").expect("static regex")
    })
}

/// Collect every round-trip time (ms) reported in probe tool output.
///
/// Understands `rtt=12.3 ms` (hping3) and `time=12.3 ms` (ping-style) lines.
#[must_use]
pub fn parse_rtts(output: &str) -> Vec<f64> {
    rtt_pattern()
        .captures_iter(output)
        .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
        .collect()
}
