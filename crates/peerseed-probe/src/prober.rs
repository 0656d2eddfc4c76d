//! Probe capability port and its subprocess implementation.

use crate::error::{ProbeError, ProbeResult};
use crate::outcome::{parse_rtts, ProbeOutcome};
use async_trait::async_trait;
use peerseed_core::PeerAddress;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Default probing tool
pub const DEFAULT_PROBE_TOOL: &str = "hping3";

/// Measures reachability of a single peer.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Whether the prober can run on this host at all
    fn is_available(&self) -> bool;

    /// Send `count` probes `interval` apart to `peer:port`.
    ///
    /// Returns [`ProbeOutcome::Unreachable`] when no round trip was observed.
    async fn probe(
        &self,
        peer: &PeerAddress,
        port: u16,
        count: u32,
        interval: Duration,
    ) -> ProbeResult<ProbeOutcome>;
}

/// Probes with TCP SYN packets via an external `hping3`-compatible tool.
///
/// The tool is invoked as `<tool> -S -p <port> -c <count> -i u<micros> <peer>`
/// and its stdout is scanned for `rtt=` samples.
#[derive(Debug, Clone)]
pub struct HpingProber {
    tool: PathBuf,
}

impl Default for HpingProber {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TOOL)
    }
}

impl HpingProber {
    /// Use `tool` (a bare name looked up on `PATH`, or a path)
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    /// Configured tool
    #[must_use]
    pub fn tool(&self) -> &Path {
        &self.tool
    }

    fn args(peer: &PeerAddress, port: u16, count: u32, interval: Duration) -> Vec<String> {
        vec![
            "-S".into(),
            "-p".into(),
            port.to_string(),
            "-c".into(),
            count.to_string(),
            "-i".into(),
            format!("u{}", interval.as_micros()),
            peer.to_string(),
        ]
    }
}

#[async_trait]
impl Prober for HpingProber {
    fn is_available(&self) -> bool {
        find_executable(&self.tool).is_some()
    }

    async fn probe(
        &self,
        peer: &PeerAddress,
        port: u16,
        count: u32,
        interval: Duration,
    ) -> ProbeResult<ProbeOutcome> {
        let output = Command::new(&self.tool)
            .args(Self::args(peer, port, count, interval))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ProbeError::Launch {
                tool: self.tool.display().to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let samples = parse_rtts(&stdout);
        debug!(
            peer = %peer,
            status = ?output.status.code(),
            samples = samples.len(),
            "probe finished"
        );
        Ok(ProbeOutcome::from_samples(&samples))
    }
}

/// Resolve `tool` to an executable file, searching `PATH` for bare names.
fn find_executable(tool: &Path) -> Option<PathBuf> {
    if tool.components().count() > 1 {
        return is_executable(tool).then(|| tool.to_path_buf());
    }
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(tool))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
