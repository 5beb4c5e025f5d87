//! # Spam Index
//!
//! The in-memory indexed view over the record set: O(1) membership by
//! canonical number, plus retrieval ordered by report count for display.
//! The flat log has no ordering guarantee; once imported here the record
//! set is treated as a set, not a sequence.

use std::collections::HashMap;

use shared_types::{SpamRecord, Timestamp};

/// Keyed view of the registry's record set.
///
/// `phone_number` is the sole identity; `upsert` replaces on conflict.
#[derive(Debug, Clone, Default)]
pub struct SpamIndex {
    entries: HashMap<String, SpamRecord>,
}

impl SpamIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build an index from a record collection, collapsing duplicate keys
    /// (last occurrence wins).
    pub fn from_records(records: impl IntoIterator<Item = SpamRecord>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.upsert(record);
        }
        index
    }

    /// Insert or replace the record for its key.
    pub fn upsert(&mut self, record: SpamRecord) {
        self.entries.insert(record.phone_number.clone(), record);
    }

    /// Check membership for a canonical number.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the record for a canonical number.
    pub fn get(&self, key: &str) -> Option<&SpamRecord> {
        self.entries.get(key)
    }

    /// Get a mutable record for a canonical number.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut SpamRecord> {
        self.entries.get_mut(key)
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot of all records, most-reported first. Ties break on the
    /// number itself so the listing is stable across calls.
    pub fn records_by_report_count(&self) -> Vec<SpamRecord> {
        let mut records: Vec<SpamRecord> = self.entries.values().cloned().collect();
        records.sort_by(|a, b| {
            b.report_count
                .cmp(&a.report_count)
                .then_with(|| a.phone_number.cmp(&b.phone_number))
        });
        records
    }

    /// Maximum `last_updated` across all records, `None` when empty.
    pub fn last_update_timestamp(&self) -> Option<Timestamp> {
        self.entries.values().map(|r| r.last_updated).max()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
