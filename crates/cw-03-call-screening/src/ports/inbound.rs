//! Inbound Ports (Driving Ports)
//!
//! The API the host's call-interception mechanism drives.

use async_trait::async_trait;

use crate::domain::CallVerdict;

/// Primary screening API (Driving Port)
#[async_trait]
pub trait CallScreeningApi: Send + Sync {
    /// Decide what to do with an incoming call.
    ///
    /// `raw_handle` is the handle text as delivered by the host, possibly
    /// absent or full of formatting. This method is total: it never errors
    /// and never panics, because an unhandled fault here drops the call.
    async fn screen(&self, raw_handle: Option<&str>) -> CallVerdict;
}
