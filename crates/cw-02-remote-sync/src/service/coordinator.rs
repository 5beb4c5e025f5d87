//! # Remote Sync Coordinator
//!
//! State machine over `SyncStatus`. One coordinator instance owns the status
//! for the process; each check/update cycle supersedes it wholesale.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use shared_types::{SpamRecord, Timestamp};

use crate::config::SyncConfig;
use crate::domain::{parse_payload, StatusSnapshot, SyncError, SyncStatus};
use crate::ports::inbound::SyncApi;
use crate::ports::outbound::{RegistryGateway, RemoteListSource, TimeSource};

/// The Remote Sync Coordinator.
///
/// Generic over its driven ports so tests can swap the remote resource, the
/// registry, and the clock independently.
pub struct RemoteSyncCoordinator<R, G, TS>
where
    R: RemoteListSource,
    G: RegistryGateway,
    TS: TimeSource,
{
    /// The remote authoritative list.
    remote: Arc<R>,
    /// Write surface into the registry subsystem.
    registry: Arc<G>,
    /// Clock for the "no remote timestamp" fallback and import stamping.
    time_source: TS,
    /// Coordinator configuration.
    config: SyncConfig,
    /// Result of the most recent completed check or update.
    status: RwLock<SyncStatus>,
    /// A check is in flight.
    checking: AtomicBool,
    /// An update is in flight.
    updating: AtomicBool,
    /// Transient update-success affordance for the presentation layer.
    update_succeeded: Arc<AtomicBool>,
    /// Owned auto-hide timer for the success flag; aborted on supersession
    /// and on drop rather than left detached.
    success_timer: Mutex<Option<JoinHandle<()>>>,
}

impl<R, G, TS> RemoteSyncCoordinator<R, G, TS>
where
    R: RemoteListSource,
    G: RegistryGateway,
    TS: TimeSource,
{
    /// Create a coordinator in the `Unknown` state.
    pub fn new(remote: Arc<R>, registry: Arc<G>, time_source: TS, config: SyncConfig) -> Self {
        Self {
            remote,
            registry,
            time_source,
            config,
            status: RwLock::new(SyncStatus::Unknown),
            checking: AtomicBool::new(false),
            updating: AtomicBool::new(false),
            update_succeeded: Arc::new(AtomicBool::new(false)),
            success_timer: Mutex::new(None),
        }
    }

    async fn run_check(&self) -> Result<SyncStatus, SyncError> {
        let local = self
            .registry
            .last_update_timestamp()
            .await?
            .unwrap_or_default();

        let remote = match self.remote.modified_at().await? {
            Some(ts) => ts,
            None => {
                // No version protocol exists; without metadata the remote is
                // conservatively treated as newer than anything local.
                tracing::warn!(
                    "[cw-02] remote exposes no modification timestamp, treating as newer"
                );
                self.time_source.now()
            }
        };

        Ok(if local >= remote {
            SyncStatus::UpToDate {
                last_updated: local,
            }
        } else {
            SyncStatus::NeedsUpdate { local, remote }
        })
    }

    async fn run_update(&self) -> Result<(Timestamp, usize), SyncError> {
        let payload = self.remote.fetch_payload().await?;

        let now = self.time_source.now();
        let records: Vec<SpamRecord> = parse_payload(&payload)
            .into_iter()
            .map(|number| SpamRecord::imported(number, now))
            .collect();
        let count = records.len();
        tracing::info!("[cw-02] fetched remote list: {} numbers", count);

        // The registry writes its durable log before its index; a failure
        // here leaves it at last-known-good and becomes our Error status.
        self.registry.replace_all(records).await?;
        Ok((now, count))
    }

    fn raise_success_flag(&self) {
        self.update_succeeded.store(true, Ordering::SeqCst);

        let flag = Arc::clone(&self.update_succeeded);
        let display = Duration::from_millis(self.config.success_display_ms);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(display).await;
            flag.store(false, Ordering::SeqCst);
        });

        // A back-to-back update restarts the display interval.
        let mut slot = self.success_timer.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = slot.replace(timer) {
            previous.abort();
        }
    }
}

#[async_trait]
impl<R, G, TS> SyncApi for RemoteSyncCoordinator<R, G, TS>
where
    R: RemoteListSource + 'static,
    G: RegistryGateway + 'static,
    TS: TimeSource + 'static,
{
    async fn check(&self) -> SyncStatus {
        self.checking.store(true, Ordering::SeqCst);

        let status = self.run_check().await.unwrap_or_else(|e| {
            tracing::warn!("[cw-02] check failed: {}", e);
            SyncStatus::Error {
                message: format!("Failed to check spam list status: {}", e),
            }
        });

        *self.status.write().await = status.clone();
        self.checking.store(false, Ordering::SeqCst);
        status
    }

    async fn update(&self) -> SyncStatus {
        self.updating.store(true, Ordering::SeqCst);

        let status = match self.run_update().await {
            Ok((now, count)) => {
                tracing::info!("[cw-02] registry updated: {} numbers", count);
                self.raise_success_flag();
                SyncStatus::UpToDate { last_updated: now }
            }
            Err(e) => {
                tracing::warn!("[cw-02] update failed: {}", e);
                SyncStatus::Error {
                    message: format!("Failed to update spam list: {}", e),
                }
            }
        };

        *self.status.write().await = status.clone();
        self.updating.store(false, Ordering::SeqCst);
        status
    }

    async fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            status: self.status.read().await.clone(),
            checking: self.checking.load(Ordering::SeqCst),
            updating: self.updating.load(Ordering::SeqCst),
            update_succeeded: self.update_succeeded.load(Ordering::SeqCst),
        }
    }
}

impl<R, G, TS> Drop for RemoteSyncCoordinator<R, G, TS>
where
    R: RemoteListSource,
    G: RegistryGateway,
    TS: TimeSource,
{
    fn drop(&mut self) {
        if let Ok(mut slot) = self.success_timer.lock() {
            if let Some(timer) = slot.take() {
                timer.abort();
            }
        }
    }
}
