//! Gossip config artifact output.

use anyhow::{Context as _, Result};
use peerseed::GossipConfig;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Mode of a freshly created artifact
#[cfg(unix)]
pub const DEFAULT_ARTIFACT_MODE: u32 = 0o644;

/// Write `config` as JSON to `path`.
///
/// The file is written next to its destination and renamed into place, so
/// readers never observe a partial artifact. An existing artifact keeps its
/// permissions; a new one is created world-readable.
pub fn write_artifact(path: &Path, config: &GossipConfig) -> Result<()> {
    let json = config.to_json().context("serializing gossip config")?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {}", dir.display()))?;
    tmp.write_all(json.as_bytes())
        .and_then(|()| tmp.flush())
        .with_context(|| format!("writing {}", path.display()))?;
    let permissions = match std::fs::metadata(path) {
        Ok(existing) => tmp.as_file().set_permissions(existing.permissions()),
        Err(_) => set_default_permissions(tmp.as_file()),
    };
    permissions.with_context(|| format!("setting permissions on {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("replacing {}", path.display()))?;

    Ok(())
}

#[cfg(unix)]
fn set_default_permissions(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(DEFAULT_ARTIFACT_MODE))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &File) -> io::Result<()> {
    Ok(())
}

/// Pretty JSON for `--dry-run`.
pub fn render(config: &GossipConfig) -> Result<String> {
    serde_json::to_string_pretty(config).context("serializing gossip config")
}
