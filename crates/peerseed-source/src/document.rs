//! Seed document parsing.
//!
//! A seed document is free-form text (usually a README) listing known peers as
//! `operator,ip` rows. When the document carries a fenced block headed by
//! `operator_name,root_ips`, only that block is read; otherwise every line is
//! scanned for rows. The address is the last non-empty comma-separated field
//! of a row.

use peerseed_core::PeerAddress;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

fn fenced_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```([\s\S]*?)```").expect("static regex"))
}

fn seed_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^operator_name\s*,\s*root_ips").expect("static regex"))
}

/// Extract peer addresses from a seed document, in document order.
///
/// Malformed rows are skipped. Duplicates are kept.
#[must_use]
pub fn parse_seed_document(content: &str) -> Vec<PeerAddress> {
    match seed_block(content) {
        Some(block) => parse_rows(block.lines()),
        None => {
            debug!("no operator_name,root_ips block found, scanning whole document");
            let peers = parse_rows(content.lines());
            if peers.is_empty() {
                warn!("could not locate seed peer rows in document");
            }
            peers
        }
    }
}

/// Body of the first fenced block whose first non-blank line is the seed header,
/// header excluded.
fn seed_block(content: &str) -> Option<&str> {
    fenced_block()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .find_map(|body| {
            let body = body.as_str();
            let mut offset = 0;
            for line in body.split_inclusive('\n') {
                let trimmed = line.trim();
                offset += line.len();
                if trimmed.is_empty() {
                    continue;
                }
                return seed_header().is_match(trimmed).then(|| &body[offset..]);
            }
            None
        })
}

fn parse_rows<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<PeerAddress> {
    lines.filter_map(parse_row).collect()
}

/// Parse a single `label,ip` row.
///
/// The label is optional and extra leading columns are ignored.
#[must_use]
pub fn parse_row(line: &str) -> Option<PeerAddress> {
    let candidate = line.split(',').map(str::trim).rev().find(|f| !f.is_empty())?;
    PeerAddress::parse(candidate).ok()
}
