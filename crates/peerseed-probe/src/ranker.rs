//! Latency ranking of seed peers.

use crate::error::ProbeError;
use crate::outcome::{ProbeOutcome, RankedPeer};
use crate::prober::Prober;
use peerseed_core::PeerList;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

/// Default gossip port probed on each peer
pub const DEFAULT_PROBE_PORT: u16 = 4001;

/// Extra time granted to a probe beyond `count * interval`
pub const PROBE_SLACK: Duration = Duration::from_secs(5);

/// Number of peers listed in the ranking summary
pub const SUMMARY_LEN: usize = 5;

/// Latency probing configuration
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Probe at all; when false ranking is the identity
    pub enabled: bool,
    /// Target port on every peer
    pub port: u16,
    /// Probe attempts per peer
    pub count: u32,
    /// Delay between attempts
    pub interval: Duration,
    /// Hard cap on the time spent probing one peer
    pub max_probe_time: Duration,
    /// Maximum peers probed at once
    pub concurrent: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: DEFAULT_PROBE_PORT,
            count: 3,
            interval: Duration::from_millis(200),
            max_probe_time: Duration::from_secs(30),
            concurrent: 16,
        }
    }
}

impl ProbeConfig {
    /// Time budget for one peer: `count * interval + slack`, capped.
    #[must_use]
    pub fn per_peer_timeout(&self) -> Duration {
        self.interval
            .saturating_mul(self.count)
            .saturating_add(PROBE_SLACK)
            .min(self.max_probe_time)
    }
}

/// Reorders peers by measured latency, best first
pub struct LatencyRanker {
    prober: Arc<dyn Prober>,
    config: ProbeConfig,
}

impl LatencyRanker {
    /// Create a ranker over `prober`
    pub fn new(prober: Arc<dyn Prober>, config: ProbeConfig) -> Self {
        Self { prober, config }
    }

    /// Ranking configuration
    #[must_use]
    pub const fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Whether probing will actually happen
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.config.enabled && self.prober.is_available()
    }

    /// Rank `peers` by latency, or return them unchanged when probing is
    /// disabled or the probe tool is missing.
    pub async fn rank(&self, peers: PeerList) -> PeerList {
        if !self.config.enabled {
            debug!("latency probing disabled");
            return peers;
        }
        if !self.prober.is_available() {
            info!("probe tool not available, keeping source order");
            return peers;
        }
        if peers.is_empty() {
            return peers;
        }

        let ranked = self.probe_all(peers).await;
        log_summary(&ranked);
        ranked.into_iter().map(|r| r.address).collect()
    }

    /// Probe every peer concurrently and return them sorted by score.
    ///
    /// Sorting is stable, so equal scores (including several unreachable
    /// peers) keep their input order. A failed probe never affects the others.
    pub async fn probe_all(&self, peers: PeerList) -> Vec<RankedPeer> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrent.max(1)));
        let budget = self.config.per_peer_timeout();
        info!(
            peers = peers.len(),
            port = self.config.port,
            count = self.config.count,
            budget_ms = budget.as_millis(),
            "probing peer latency"
        );

        let handles: Vec<_> = peers
            .iter()
            .cloned()
            .map(|peer| {
                let sem = semaphore.clone();
                let prober = self.prober.clone();
                let (port, count, interval) =
                    (self.config.port, self.config.count, self.config.interval);

                tokio::spawn(async move {
                    let _permit = sem
                        .acquire_owned()
                        .await
                        .map_err(|e| ProbeError::Task(e.to_string()))?;
                    tokio::time::timeout(budget, prober.probe(&peer, port, count, interval))
                        .await
                        .map_err(|_| ProbeError::Timeout(budget))?
                })
            })
            .collect();

        let results = futures_util::future::join_all(handles).await;

        let mut ranked: Vec<RankedPeer> = peers
            .into_iter()
            .zip(results)
            .map(|(address, joined)| {
                let outcome = match joined {
                    Ok(Ok(outcome)) => outcome,
                    Ok(Err(e)) => {
                        warn!(peer = %address, error = %e, "probe failed");
                        ProbeOutcome::Unreachable
                    }
                    Err(e) => {
                        warn!(peer = %address, error = %e, "probe task aborted");
                        ProbeOutcome::Unreachable
                    }
                };
                debug!(peer = %address, %outcome, "probe result");
                RankedPeer { address, outcome }
            })
            .collect();

        ranked.sort_by(|a, b| a.outcome.score().total_cmp(&b.outcome.score()));
        ranked
    }
}

fn log_summary(ranked: &[RankedPeer]) {
    let reachable = ranked.iter().filter(|r| r.outcome.is_reachable()).count();
    info!(reachable, total = ranked.len(), "latency ranking complete");
    for (i, peer) in ranked.iter().take(SUMMARY_LEN).enumerate() {
        info!(rank = i + 1, peer = %peer.address, latency = %peer.outcome, "top peer");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeResult;
    use async_trait::async_trait;
    use peerseed_core::PeerAddress;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Copy)]
    enum Behavior {
        Latency(f64),
        Silent,
        Fail,
        Hang,
        Panic,
    }

    struct FakeProber {
        available: bool,
        behaviors: HashMap<String, Behavior>,
        calls: AtomicUsize,
    }

    impl FakeProber {
        fn new(behaviors: &[(&str, Behavior)]) -> Self {
            Self {
                available: true,
                behaviors: behaviors
                    .iter()
                    .map(|(ip, b)| ((*ip).to_string(), *b))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }

        fn unavailable() -> Self {
            Self {
                available: false,
                ..Self::new(&[])
            }
        }
    }

    #[async_trait]
    impl Prober for FakeProber {
        fn is_available(&self) -> bool {
            self.available
        }

        async fn probe(
            &self,
            peer: &PeerAddress,
            _port: u16,
            _count: u32,
            _interval: Duration,
        ) -> ProbeResult<ProbeOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behaviors.get(peer.as_str()).copied().unwrap_or(Behavior::Silent) {
                Behavior::Latency(ms) => Ok(ProbeOutcome::Measured(ms)),
                Behavior::Silent => Ok(ProbeOutcome::Unreachable),
                Behavior::Fail => Err(ProbeError::Task("exit status 1".into())),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(ProbeOutcome::Measured(0.1))
                }
                Behavior::Panic => panic!("probe exploded"),
            }
        }
    }

    fn peers(ips: &[&str]) -> PeerList {
        ips.iter().map(|ip| PeerAddress::parse(ip).unwrap()).collect()
    }

    fn enabled() -> ProbeConfig {
        ProbeConfig {
            enabled: true,
            max_probe_time: Duration::from_millis(200),
            ..ProbeConfig::default()
        }
    }

    fn ips(list: &PeerList) -> Vec<&str> {
        list.iter().map(PeerAddress::as_str).collect()
    }

    #[tokio::test]
    async fn test_disabled_is_identity() {
        let prober = Arc::new(FakeProber::new(&[("10.0.0.1", Behavior::Latency(9.0))]));
        let ranker = LatencyRanker::new(prober.clone(), ProbeConfig::default());

        let input = peers(&["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
        assert_eq!(ranker.rank(input.clone()).await, input);
        assert_eq!(prober.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unavailable_tool_is_identity() {
        let ranker = LatencyRanker::new(Arc::new(FakeProber::unavailable()), enabled());
        assert!(!ranker.is_active());

        let input = peers(&["10.0.0.2", "10.0.0.1"]);
        assert_eq!(ranker.rank(input.clone()).await, input);
    }

    #[tokio::test]
    async fn test_failed_probe_ranks_last() {
        let prober = FakeProber::new(&[
            ("10.0.0.1", Behavior::Fail),
            ("10.0.0.2", Behavior::Latency(5.0)),
            ("10.0.0.3", Behavior::Latency(2.0)),
        ]);
        let ranker = LatencyRanker::new(Arc::new(prober), enabled());

        let ranked = ranker.rank(peers(&["10.0.0.1", "10.0.0.2", "10.0.0.3"])).await;
        assert_eq!(ips(&ranked), vec!["10.0.0.3", "10.0.0.2", "10.0.0.1"]);
    }

    #[tokio::test]
    async fn test_hung_and_panicking_probes_do_not_block_others() {
        let prober = FakeProber::new(&[
            ("10.0.0.1", Behavior::Hang),
            ("10.0.0.2", Behavior::Panic),
            ("10.0.0.3", Behavior::Latency(7.5)),
        ]);
        let ranker = LatencyRanker::new(Arc::new(prober), enabled());

        let started = std::time::Instant::now();
        let ranked = ranker
            .probe_all(peers(&["10.0.0.1", "10.0.0.2", "10.0.0.3"]))
            .await;
        assert!(started.elapsed() < Duration::from_secs(10));

        assert_eq!(ranked[0].address.as_str(), "10.0.0.3");
        assert_eq!(ranked[0].outcome, ProbeOutcome::Measured(7.5));
        assert_eq!(ranked[1].outcome, ProbeOutcome::Unreachable);
        assert_eq!(ranked[2].outcome, ProbeOutcome::Unreachable);
    }

    #[tokio::test]
    async fn test_ties_keep_input_order() {
        let prober = FakeProber::new(&[
            ("10.0.0.1", Behavior::Silent),
            ("10.0.0.2", Behavior::Latency(3.0)),
            ("10.0.0.3", Behavior::Fail),
            ("10.0.0.4", Behavior::Latency(3.0)),
            ("10.0.0.5", Behavior::Silent),
        ]);
        let ranker = LatencyRanker::new(Arc::new(prober), enabled());

        let ranked = ranker
            .rank(peers(&["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.5"]))
            .await;
        assert_eq!(
            ips(&ranked),
            vec!["10.0.0.2", "10.0.0.4", "10.0.0.1", "10.0.0.3", "10.0.0.5"]
        );
    }

    #[tokio::test]
    async fn test_concurrency_of_one_still_probes_all() {
        let prober = Arc::new(FakeProber::new(&[
            ("10.0.0.1", Behavior::Latency(4.0)),
            ("10.0.0.2", Behavior::Latency(1.0)),
        ]));
        let config = ProbeConfig {
            concurrent: 1,
            ..enabled()
        };
        let ranker = LatencyRanker::new(prober.clone(), config);

        let ranked = ranker.rank(peers(&["10.0.0.1", "10.0.0.2"])).await;
        assert_eq!(ips(&ranked), vec!["10.0.0.2", "10.0.0.1"]);
        assert_eq!(prober.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_per_peer_timeout() {
        let config = ProbeConfig {
            count: 4,
            interval: Duration::from_secs(1),
            max_probe_time: Duration::from_secs(30),
            ..ProbeConfig::default()
        };
        assert_eq!(config.per_peer_timeout(), Duration::from_secs(9));

        let capped = ProbeConfig {
            count: 100,
            ..config
        };
        assert_eq!(capped.per_peer_timeout(), Duration::from_secs(30));
    }
}
