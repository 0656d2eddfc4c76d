use crate::error::PeerSeedError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Four dot-separated groups of 1-3 digits. Octet ranges are not checked.
fn dotted_quad() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\d{1,3}\.){3}\d{1,3}$").expect("static regex"))
}

/// A validated IPv4 dotted-quad peer address.
///
/// Validation is deliberately relaxed: `999.1.1.1` is accepted, since the
/// consuming node performs its own address handling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PeerAddress(String);

impl PeerAddress {
    /// Validate `raw` after trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, PeerSeedError> {
        let trimmed = raw.trim();
        if is_valid_ipv4(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(PeerSeedError::InvalidAddress(raw.to_string()))
        }
    }

    /// Returns the address as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Returns true if `candidate` is a dotted quad (no trimming is applied).
#[must_use]
pub fn is_valid_ipv4(candidate: &str) -> bool {
    dotted_quad().is_match(candidate)
}

impl std::fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PeerAddress {
    type Err = PeerSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PeerAddress {
    type Error = PeerSeedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PeerAddress> for String {
    fn from(addr: PeerAddress) -> Self {
        addr.0
    }
}

impl AsRef<str> for PeerAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
