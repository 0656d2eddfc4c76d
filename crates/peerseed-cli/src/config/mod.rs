//! Configuration management.
//!
//! Values are layered: command-line flags and environment variables first,
//! then the optional TOML file, then built-in defaults.

use anyhow::{Context as _, Result};
use peerseed::{ProbeConfig, SourceConfig, DEFAULT_CHAIN};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::Cli;

/// Default artifact location, as read by the node.
pub const DEFAULT_OUTPUT_PATH: &str = "~/override_gossip_config.json";

/// Settings read from the `--config` TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Override file path.
    pub ips_file: Option<String>,

    /// Local seed document path.
    pub readme: Option<String>,

    /// Remote seed document URL (empty disables).
    pub seed_url: Option<String>,

    /// Remote fetch timeout in seconds.
    pub fetch_timeout_secs: Option<u64>,

    /// Chain identifier.
    pub chain: Option<String>,

    /// Allow the node to try peers outside the seed list.
    pub try_new_peers: Option<bool>,

    /// Artifact output path.
    pub output: Option<String>,

    /// Latency probing.
    #[serde(default)]
    pub probe: ProbeFileConfig,
}

/// `[probe]` table of the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeFileConfig {
    pub enabled: Option<bool>,
    pub port: Option<u16>,
    pub count: Option<u32>,
    pub interval_ms: Option<u64>,
    pub tool: Option<String>,
    pub concurrency: Option<usize>,
    pub max_time_secs: Option<u64>,
}

impl FileConfig {
    /// Load configuration from file. An explicitly named file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;

        Ok(config)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub sources: SourceConfig,
    pub probe: ProbeConfig,
    pub probe_tool: String,
    pub chain: String,
    pub try_new_peers: bool,
    pub output: PathBuf,
}

impl Settings {
    /// Merge CLI/env values over the file config and defaults.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let source_defaults = SourceConfig::default();
        let probe_defaults = ProbeConfig::default();
        let fp = file.probe;

        let override_path = cli
            .ips_file
            .clone()
            .or(file.ips_file)
            .map_or(source_defaults.override_path, |p| expand_path(&p));
        let document_path = cli
            .readme
            .clone()
            .or(file.readme)
            .map_or(source_defaults.document_path, |p| expand_path(&p));
        // An explicitly empty URL turns the remote fallback off.
        let seed_url = match cli.seed_url.clone().or(file.seed_url) {
            Some(url) if url.trim().is_empty() => None,
            Some(url) => Some(url),
            None => source_defaults.seed_url,
        };
        let fetch_timeout = cli
            .fetch_timeout_secs
            .or(file.fetch_timeout_secs)
            .map_or(source_defaults.fetch_timeout, Duration::from_secs);

        let probe = ProbeConfig {
            enabled: cli.probe.or(fp.enabled).unwrap_or(probe_defaults.enabled),
            port: cli.probe_port.or(fp.port).unwrap_or(probe_defaults.port),
            count: cli.probe_count.or(fp.count).unwrap_or(probe_defaults.count),
            interval: cli
                .probe_interval_ms
                .or(fp.interval_ms)
                .map_or(probe_defaults.interval, Duration::from_millis),
            max_probe_time: cli
                .probe_max_time_secs
                .or(fp.max_time_secs)
                .map_or(probe_defaults.max_probe_time, Duration::from_secs),
            concurrent: cli
                .probe_concurrency
                .or(fp.concurrency)
                .unwrap_or(probe_defaults.concurrent),
        };

        Self {
            sources: SourceConfig {
                override_path,
                document_path,
                seed_url,
                fetch_timeout,
            },
            probe,
            probe_tool: cli
                .probe_tool
                .clone()
                .or(fp.tool)
                .unwrap_or_else(|| peerseed::DEFAULT_PROBE_TOOL.to_string()),
            chain: cli
                .chain
                .clone()
                .or(file.chain)
                .unwrap_or_else(|| DEFAULT_CHAIN.to_string()),
            try_new_peers: file.try_new_peers.unwrap_or(true),
            output: expand_path(
                cli.output
                    .as_deref()
                    .or(file.output.as_deref())
                    .unwrap_or(DEFAULT_OUTPUT_PATH),
            ),
        }
    }
}

/// Expand `~` and `$VARS` in a path, leaving it untouched if expansion fails.
fn expand_path(raw: &str) -> PathBuf {
    shellexpand::full(raw).map_or_else(|_| PathBuf::from(raw), |p| PathBuf::from(p.as_ref()))
}
