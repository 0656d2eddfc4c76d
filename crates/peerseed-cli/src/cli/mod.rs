//! CLI argument parsing and the generate run.

pub mod args;

use anyhow::{Context as _, Result};
use args::Cli;
use clap::Parser;
use peerseed::{HpingProber, LatencyRanker, Pipeline, SourceChain};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{FileConfig, Settings};
use crate::output;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = match load_settings(&cli) {
        Ok(settings) => generate(&settings, cli.dry_run).await,
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        error!("failed to produce gossip config: {e:#}");
    }
    result
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    Ok(Settings::resolve(cli, file))
}

/// Resolve, rank and write the gossip config described by `settings`.
pub async fn generate(settings: &Settings, dry_run: bool) -> Result<()> {
    let sources = SourceChain::from_config(&settings.sources).context("building peer sources")?;
    let prober = Arc::new(HpingProber::new(&settings.probe_tool));
    let ranker = LatencyRanker::new(prober, settings.probe.clone());

    let config = Pipeline::new(sources, ranker)
        .chain(settings.chain.clone())
        .try_new_peers(settings.try_new_peers)
        .run()
        .await;

    if dry_run {
        println!("{}", output::render(&config)?);
        return Ok(());
    }

    output::write_artifact(&settings.output, &config)?;
    info!(
        path = %settings.output.display(),
        root_node_ips = config.peer_count(),
        "wrote gossip config"
    );
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}
