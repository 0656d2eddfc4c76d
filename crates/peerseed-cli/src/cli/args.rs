//! Command-line argument definitions using clap.

use clap::builder::BoolishValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Generate the node's gossip override config from seed peers.
///
/// Peers come from the first source that yields any: the override file, the
/// local seed document, then the remote seed document. Duplicates are dropped
/// and, with --probe, peers are ordered by measured latency.
///
/// Every option can also be set through its environment variable or the
/// TOML file given with --config; flags and environment win over the file.
#[derive(Parser, Debug, Default)]
#[command(name = "gen-gossip-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML file with default settings
    #[arg(long, env = "PEERSEED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Newline-separated peer IPs that override every other source
    #[arg(long, env = "VALIDATOR_IPS_FILE")]
    pub ips_file: Option<String>,

    /// Local seed document (README with `operator,ip` rows)
    #[arg(long, env = "README_PATH")]
    pub readme: Option<String>,

    /// Remote seed document URL; empty disables the remote fallback
    #[arg(long, env = "SEED_README_URL")]
    pub seed_url: Option<String>,

    /// Remote fetch timeout in seconds
    #[arg(long, env = "SEED_FETCH_TIMEOUT_SECS")]
    pub fetch_timeout_secs: Option<u64>,

    /// Chain identifier written into the config
    #[arg(long, env = "CHAIN")]
    pub chain: Option<String>,

    /// Rank peers by probed latency
    #[arg(
        long,
        env = "PROBE_PEERS",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub probe: Option<bool>,

    /// Port probed on each peer
    #[arg(long, env = "PROBE_PORT")]
    pub probe_port: Option<u16>,

    /// Probe attempts per peer
    #[arg(long, env = "PROBE_COUNT")]
    pub probe_count: Option<u32>,

    /// Milliseconds between probe attempts
    #[arg(long, env = "PROBE_INTERVAL_MS")]
    pub probe_interval_ms: Option<u64>,

    /// Probe tool (hping3-compatible)
    #[arg(long, env = "PROBE_TOOL")]
    pub probe_tool: Option<String>,

    /// Peers probed in parallel
    #[arg(long, env = "PROBE_CONCURRENCY")]
    pub probe_concurrency: Option<usize>,

    /// Upper bound in seconds on probing a single peer
    #[arg(long, env = "PROBE_MAX_TIME_SECS")]
    pub probe_max_time_secs: Option<u64>,

    /// Where to write the gossip config
    #[arg(short, long, env = "GOSSIP_CONFIG_PATH")]
    pub output: Option<String>,

    /// Print the config to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
