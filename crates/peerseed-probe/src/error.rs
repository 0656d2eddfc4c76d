use std::time::Duration;
use thiserror::Error;

/// Result type alias for probe operations
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

/// Errors from a single peer probe
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The probe process could not be started
    #[error("failed to launch probe tool {tool}: {source}")]
    Launch {
        /// Tool that was invoked
        tool: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The probe did not finish within its budget
    #[error("probe timed out after {0:?}")]
    Timeout(Duration),

    /// The probe task panicked or was cancelled
    #[error("probe task failed: {0}")]
    Task(String),

    /// Probing tool is not installed
    #[error("probe tool not available: {0}")]
    ToolUnavailable(String),
}

impl From<ProbeError> for peerseed_core::PeerSeedError {
    fn from(err: ProbeError) -> Self {
        match err {
            ProbeError::Launch { source, .. } => Self::Io(source),
            ProbeError::Timeout(d) => Self::Probe(format!("timed out after {d:?}")),
            ProbeError::Task(msg) => Self::Probe(msg),
            ProbeError::ToolUnavailable(tool) => Self::Probe(format!("{tool} not available")),
        }
    }
}
