//! # Call Decision Engine
//!
//! Normalizes the incoming handle and asks the registry for membership.
//! No caching of its own: the lookup port is backed by the registry's
//! in-memory index, which is fast enough for the call-setup deadline.

use std::sync::Arc;

use async_trait::async_trait;

use shared_types::normalize_number;

use crate::domain::CallVerdict;
use crate::ports::inbound::CallScreeningApi;
use crate::ports::outbound::SpamLookup;

/// The Call Decision Engine.
pub struct CallDecisionEngine<L: SpamLookup> {
    /// Membership query into the registry (driven port).
    lookup: Arc<L>,
}

impl<L: SpamLookup> CallDecisionEngine<L> {
    /// Create an engine over the given lookup port.
    pub fn new(lookup: Arc<L>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl<L: SpamLookup + 'static> CallScreeningApi for CallDecisionEngine<L> {
    async fn screen(&self, raw_handle: Option<&str>) -> CallVerdict {
        // No identifiable number: never block on missing information.
        let Some(number) = raw_handle.and_then(normalize_number) else {
            tracing::debug!("[cw-03] no phone number available, allowing call");
            return CallVerdict::allow();
        };

        match self.lookup.is_spam(&number).await {
            Ok(true) => {
                tracing::info!("[cw-03] blocking spam number: {}", number);
                CallVerdict::block()
            }
            Ok(false) => {
                tracing::debug!("[cw-03] allowing non-spam number: {}", number);
                CallVerdict::allow()
            }
            Err(e) => {
                // A wrong allow is acceptable; a faulted call path is not.
                tracing::warn!("[cw-03] lookup failed ({}), allowing call", e);
                CallVerdict::allow()
            }
        }
    }
}
