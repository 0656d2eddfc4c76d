//! Individual peer sources.

use crate::client::SeedClient;
use crate::document::parse_seed_document;
use async_trait::async_trait;
use peerseed_core::{PeerAddress, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A single stage of the resolution chain.
///
/// A missing input is `Ok(vec![])`. Errors are reported to the chain, which
/// logs them and moves on to the next source.
#[async_trait]
pub trait PeerSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Produce raw peer addresses, in source order
    async fn resolve(&self) -> Result<Vec<PeerAddress>>;
}

/// Read a file, mapping "not found" to `None`.
///
/// Invalid UTF-8 is replaced rather than rejected, so one bad byte only
/// spoils the line it sits on.
async fn read_optional(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Newline-separated addresses supplied by the operator
#[derive(Debug, Clone)]
pub struct OverrideFileSource {
    path: PathBuf,
}

impl OverrideFileSource {
    /// Read overrides from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PeerSource for OverrideFileSource {
    fn name(&self) -> &str {
        "override-file"
    }

    async fn resolve(&self) -> Result<Vec<PeerAddress>> {
        let Some(content) = read_optional(&self.path).await? else {
            debug!(path = %self.path.display(), "override file not present");
            return Ok(Vec::new());
        };

        let peers: Vec<_> = content
            .lines()
            .filter_map(|line| PeerAddress::parse(line).ok())
            .collect();
        info!(path = %self.path.display(), count = peers.len(), "loaded override file");
        Ok(peers)
    }
}

/// Seed document on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalDocumentSource {
    path: PathBuf,
}

impl LocalDocumentSource {
    /// Read the seed document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PeerSource for LocalDocumentSource {
    fn name(&self) -> &str {
        "local-document"
    }

    async fn resolve(&self) -> Result<Vec<PeerAddress>> {
        let Some(content) = read_optional(&self.path).await? else {
            debug!(path = %self.path.display(), "local seed document not present");
            return Ok(Vec::new());
        };

        let peers = parse_seed_document(&content);
        info!(path = %self.path.display(), count = peers.len(), "parsed local seed document");
        Ok(peers)
    }
}

/// Seed document fetched from a URL
#[derive(Clone)]
pub struct RemoteDocumentSource {
    client: SeedClient,
    url: String,
}

impl RemoteDocumentSource {
    /// Fetch the seed document from `url` with `client`
    pub fn new(client: SeedClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PeerSource for RemoteDocumentSource {
    fn name(&self) -> &str {
        "remote-document"
    }

    async fn resolve(&self) -> Result<Vec<PeerAddress>> {
        info!(url = %self.url, "fetching seed peers");
        let content = self.client.fetch_document(&self.url).await?;
        let peers = parse_seed_document(&content);
        info!(url = %self.url, count = peers.len(), "parsed remote seed document");
        Ok(peers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_override_missing_file_is_empty() {
        let source = OverrideFileSource::new("/nonexistent/peerseed/validator_ips.txt");
        assert!(source.resolve().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_override_keeps_valid_lines_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "10.0.0.1\n  10.0.0.2  \n\nnot-an-ip\n# comment\n10.0.0.1\n").unwrap();

        let peers = OverrideFileSource::new(file.path()).resolve().await.unwrap();
        let ips: Vec<_> = peers.iter().map(PeerAddress::as_str).collect();
        assert_eq!(ips, vec!["10.0.0.1", "10.0.0.2", "10.0.0.1"]);
    }

    #[tokio::test]
    async fn test_override_invalid_utf8_keeps_other_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"10.0.0.1\n# op\xe9rateur\n10.0.0.2\n10.0.\xff.3\n")
            .unwrap();

        let peers = OverrideFileSource::new(file.path()).resolve().await.unwrap();
        let ips: Vec<_> = peers.iter().map(PeerAddress::as_str).collect();
        assert_eq!(ips, vec!["10.0.0.1", "10.0.0.2"]);
    }

    #[tokio::test]
    async fn test_local_document_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"op\xe9A,10.0.0.1\nopB,10.0.0.2\n").unwrap();

        let peers = LocalDocumentSource::new(file.path()).resolve().await.unwrap();
        assert_eq!(peers.len(), 2);
    }

    #[tokio::test]
    async fn test_override_unreadable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory exists but cannot be read as a file.
        assert!(OverrideFileSource::new(dir.path()).resolve().await.is_err());
    }

    #[tokio::test]
    async fn test_local_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "opA,10.0.0.1\ngarbage\nopB,10.0.0.2\n").unwrap();

        let peers = LocalDocumentSource::new(file.path()).resolve().await.unwrap();
        assert_eq!(peers.len(), 2);
    }

    #[tokio::test]
    async fn test_local_document_missing_is_empty() {
        let source = LocalDocumentSource::new("/nonexistent/peerseed/README.md");
        assert!(source.resolve().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remote_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("op,10.1.1.1\n"))
            .mount(&server)
            .await;

        let source = RemoteDocumentSource::new(SeedClient::new().unwrap(), server.uri());
        let peers = source.resolve().await.unwrap();
        assert_eq!(peers[0].as_str(), "10.1.1.1");
    }

    #[tokio::test]
    async fn test_remote_document_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let source = RemoteDocumentSource::new(SeedClient::new().unwrap(), server.uri());
        assert!(source.resolve().await.unwrap_err().is_network());
    }
}
