//! Error types for the screening subsystem

use thiserror::Error;

/// Errors the spam-lookup port can report.
///
/// The decision engine catches every variant and degrades to "allow"; these
/// exist so the degradation can be logged with its cause, not so they can
/// reach the host.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The registry has not finished its initial import.
    #[error("Registry not ready")]
    NotReady,

    /// The registry's store failed.
    #[error("Lookup unavailable: {message}")]
    Unavailable { message: String },
}
