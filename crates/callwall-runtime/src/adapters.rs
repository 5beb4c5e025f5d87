//! # Port Adapters
//!
//! Subsystem crates depend only on `shared-types`; these adapters are the
//! seams that connect them, implementing the sync and screening subsystems'
//! driven ports on top of the registry's API.

use std::sync::Arc;

use async_trait::async_trait;

use cw_01_registry::{RegistryError, SpamRegistryApi};
use cw_02_remote_sync::{RegistryGateway, SyncError};
use cw_03_call_screening::{LookupError, SpamLookup};
use shared_types::{SpamRecord, Timestamp};

/// Bridges the sync coordinator's registry port to the registry service.
pub struct RegistryGatewayAdapter<R: SpamRegistryApi> {
    registry: Arc<R>,
}

impl<R: SpamRegistryApi> RegistryGatewayAdapter<R> {
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl<R: SpamRegistryApi + 'static> RegistryGateway for RegistryGatewayAdapter<R> {
    async fn last_update_timestamp(&self) -> Result<Option<Timestamp>, SyncError> {
        self.registry
            .last_update_timestamp()
            .await
            .map_err(storage_error)
    }

    async fn replace_all(&self, records: Vec<SpamRecord>) -> Result<(), SyncError> {
        self.registry.replace_all(records).await.map_err(storage_error)
    }
}

fn storage_error(err: RegistryError) -> SyncError {
    SyncError::Storage(err.to_string())
}

/// Bridges the screening engine's lookup port to the registry service.
pub struct SpamLookupAdapter<R: SpamRegistryApi> {
    registry: Arc<R>,
}

impl<R: SpamRegistryApi> SpamLookupAdapter<R> {
    pub fn new(registry: Arc<R>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl<R: SpamRegistryApi + 'static> SpamLookup for SpamLookupAdapter<R> {
    async fn is_spam(&self, key: &str) -> Result<bool, LookupError> {
        self.registry.lookup(key).await.map_err(|err| match err {
            RegistryError::NotReady => LookupError::NotReady,
            RegistryError::StorageUnavailable { message } => {
                LookupError::Unavailable { message }
            }
        })
    }
}
