//! # Remote Payload Parsing
//!
//! The remote list is plain UTF-8 text, one phone number per line. Blank
//! and whitespace-only lines are dropped; every surviving line is run
//! through the shared normalizer, and lines that normalize to nothing are
//! filtered out rather than failing the whole payload.

use shared_types::normalize_number;

/// Extract the canonical number set from a remote payload.
pub fn parse_payload(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(normalize_number)
        .collect()
}
