//! # Flat Log Line Format
//!
//! One record per line, comma-separated: `phone_number,report_count,last_updated`.
//!
//! The writer always emits all three fields. The reader is lenient: fields
//! after the number are optional and default per-field when missing or
//! unparseable (`report_count = 1`, `last_updated` = the supplied default).
//! Resilience over strictness for local data — one mangled line must not
//! reject the whole file.

use shared_types::{SpamRecord, Timestamp};

/// Encode a record as a log line (without trailing newline).
pub fn encode_line(record: &SpamRecord) -> String {
    format!(
        "{},{},{}",
        record.phone_number, record.report_count, record.last_updated
    )
}

/// Decode a log line, defaulting missing or unparseable trailing fields.
///
/// Returns `None` for blank lines and lines with an empty number field.
pub fn parse_line(line: &str, default_timestamp: Timestamp) -> Option<SpamRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let mut parts = line.split(',');
    let phone_number = parts.next()?.trim();
    if phone_number.is_empty() {
        return None;
    }

    let report_count = parts
        .next()
        .and_then(|field| field.trim().parse::<u32>().ok())
        .unwrap_or(1);
    let last_updated = parts
        .next()
        .and_then(|field| field.trim().parse::<Timestamp>().ok())
        .unwrap_or(default_timestamp);

    Some(SpamRecord::new(phone_number, report_count, last_updated))
}
