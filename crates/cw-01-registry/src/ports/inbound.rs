//! Inbound Ports (Driving Ports)
//!
//! The API that external components use to interact with the registry.

use async_trait::async_trait;
use shared_types::{SpamRecord, Timestamp};

use crate::domain::RegistryError;

/// Primary registry API (Driving Port)
///
/// The single authoritative handle to the two persistence layers. Callers
/// never open the underlying stores directly.
#[async_trait]
pub trait SpamRegistryApi: Send + Sync {
    /// Open both stores and import the flat log into the indexed view.
    ///
    /// Idempotent: concurrent and repeated calls converge on one import.
    /// Must complete before the first `lookup` is trusted.
    async fn initialize(&self) -> Result<(), RegistryError>;

    /// Point existence check against the indexed view only.
    ///
    /// This is the call-setup hot path; it never touches the flat log.
    /// Fails with `NotReady` before initialization completes.
    async fn lookup(&self, key: &str) -> Result<bool, RegistryError>;

    /// Replace the entire record set in both stores.
    ///
    /// The flat log is written first; if that write fails the indexed view
    /// is left untouched and the error propagates. A concurrent `lookup`
    /// observes either the old or the new complete set, never a partial one.
    async fn replace_all(&self, records: Vec<SpamRecord>) -> Result<(), RegistryError>;

    /// Append one record to the log and upsert it into the indexed view
    /// (replace-on-conflict).
    async fn append_one(&self, record: SpamRecord) -> Result<(), RegistryError>;

    /// Bump the report count for an existing number and stamp it as updated.
    ///
    /// # Returns
    /// - `Ok(true)`: the number existed and was updated
    /// - `Ok(false)`: the number is not in the registry; nothing written
    async fn increment_report(&self, key: &str) -> Result<bool, RegistryError>;

    /// Snapshot of all records, most-reported first.
    async fn all_records(&self) -> Result<Vec<SpamRecord>, RegistryError>;

    /// Maximum `last_updated` across all records, `None` when empty.
    async fn last_update_timestamp(&self) -> Result<Option<Timestamp>, RegistryError>;
}
