//! Error types for the registry subsystem

use thiserror::Error;

/// Errors that can occur in the registry subsystem
///
/// Storage failure is a distinct condition from "number not present": callers
/// on the write path must propagate it, because swallowing it would silently
/// desynchronize the flat log and the indexed view.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The underlying store could not be opened, read, or written.
    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },

    /// A read arrived before `initialize()` completed the log import.
    #[error("Registry not initialized")]
    NotReady,
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::StorageUnavailable {
            message: err.to_string(),
        }
    }
}
