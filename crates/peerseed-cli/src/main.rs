//! gen-gossip-config - write the node's gossip override config.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    peerseed_cli::run().await
}
