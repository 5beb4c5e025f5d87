//! # Core Domain Entities
//!
//! Defines the entities shared across subsystems.
//!
//! ## Clusters
//!
//! - **Registry**: `SpamRecord`, the unit entity of the spam-number store
//! - **Time**: `Timestamp`, epoch milliseconds used for all staleness math

use serde::{Deserialize, Serialize};

/// Unix timestamp in milliseconds since epoch.
pub type Timestamp = u64;

/// A phone number flagged as spam, with report metadata.
///
/// `phone_number` is the sole identity: inserting a record with an existing
/// key overwrites rather than duplicates. The key is always canonical
/// (digits plus an optional leading `+`, see [`crate::normalize_number`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpamRecord {
    /// Canonical phone number, unique, non-empty.
    pub phone_number: String,
    /// Number of times this number has been reported. Starts at 1 and only
    /// grows, except when a full-registry replace resets the set.
    pub report_count: u32,
    /// When this record was last written (import or on-device report).
    pub last_updated: Timestamp,
}

impl SpamRecord {
    /// Create a record with explicit fields.
    pub fn new(phone_number: impl Into<String>, report_count: u32, last_updated: Timestamp) -> Self {
        Self {
            phone_number: phone_number.into(),
            report_count,
            last_updated,
        }
    }

    /// Create a freshly imported record: one report, stamped at import time.
    pub fn imported(phone_number: impl Into<String>, imported_at: Timestamp) -> Self {
        Self::new(phone_number, 1, imported_at)
    }
}
