//! Error types for the sync subsystem

use thiserror::Error;

/// Errors that can occur in the sync subsystem
///
/// All variants end up as a human-readable `SyncStatus::Error` message for
/// the presentation layer; none of them propagate past the coordinator.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Timeout, DNS failure, connection reset, non-success HTTP status.
    #[error("Network failure: {0}")]
    Network(String),

    /// The remote payload could not be interpreted as a number list.
    #[error("Parse failure: {0}")]
    Parse(String),

    /// The registry refused the write (storage unavailable or not ready).
    #[error("Storage failure: {0}")]
    Storage(String),
}
