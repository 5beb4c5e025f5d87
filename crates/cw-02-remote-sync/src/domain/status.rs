//! # Sync Status
//!
//! The four-valued status owned by the coordinator for the lifetime of one
//! check/update cycle, plus the snapshot handed to the presentation layer.

use serde::{Deserialize, Serialize};
use shared_types::Timestamp;

/// Staleness verdict of the local registry against the remote list.
///
/// Transient, never persisted. Superseded wholesale by each new check or
/// update; never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncStatus {
    /// No check has completed yet this process.
    Unknown,
    /// Local registry is at least as new as the remote list.
    UpToDate {
        /// Max `last_updated` across the local registry.
        last_updated: Timestamp,
    },
    /// The remote list is newer than the local registry.
    ///
    /// When the remote exposes no modification timestamp the coordinator
    /// substitutes "now", so `remote` may be a conservative overestimate.
    NeedsUpdate {
        /// Max `last_updated` across the local registry (0 when empty).
        local: Timestamp,
        /// The remote list's modification timestamp, or "now" as fallback.
        remote: Timestamp,
    },
    /// Check or update failed; the message is shown to the user for retry.
    Error {
        /// Human-readable failure reason.
        message: String,
    },
}

/// The status surface consumed by the presentation layer.
///
/// `checking`/`updating` flag an operation in flight; `update_succeeded` is
/// a transient affordance raised after a successful update and auto-cleared
/// after a fixed display interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Result of the most recent completed check or update.
    pub status: SyncStatus,
    /// A `check()` is in flight.
    pub checking: bool,
    /// An `update()` is in flight.
    pub updating: bool,
    /// A recent `update()` succeeded; cleared automatically.
    pub update_succeeded: bool,
}
