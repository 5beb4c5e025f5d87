//! Outbound (Driven) ports for the sync subsystem.
//!
//! These traits define what the coordinator needs from the outside world:
//! the remote list resource, the registry write surface, and a clock.

use async_trait::async_trait;
use shared_types::{SpamRecord, Timestamp};

use crate::domain::SyncError;

/// The remote authoritative list (Driven Port).
#[async_trait]
pub trait RemoteListSource: Send + Sync {
    /// Lightweight metadata probe: the resource's modification timestamp.
    ///
    /// `Ok(None)` means the remote exposes no usable timestamp; the
    /// coordinator decides what to substitute. Implementations must not
    /// download the payload here.
    async fn modified_at(&self) -> Result<Option<Timestamp>, SyncError>;

    /// Full payload fetch: newline-delimited phone numbers, UTF-8.
    async fn fetch_payload(&self) -> Result<String, SyncError>;
}

/// Registry surface the coordinator writes through (Driven Port).
///
/// Implementations bridge to the registry subsystem; storage errors must
/// surface as `SyncError::Storage`, never be swallowed, because a swallowed
/// write failure would desynchronize the registry's two stores.
#[async_trait]
pub trait RegistryGateway: Send + Sync {
    /// Max `last_updated` across the registry, `None` when empty.
    async fn last_update_timestamp(&self) -> Result<Option<Timestamp>, SyncError>;

    /// Atomic full-registry replacement.
    async fn replace_all(&self, records: Vec<SpamRecord>) -> Result<(), SyncError>;
}

/// Time source for consistent timestamp handling.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Mock time source for testing.
pub struct MockTimeSource {
    time: std::sync::atomic::AtomicU64,
}

impl MockTimeSource {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            time: std::sync::atomic::AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.time.fetch_add(ms, std::sync::atomic::Ordering::SeqCst);
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Timestamp {
        self.time.load(std::sync::atomic::Ordering::SeqCst)
    }
}

/// Mock remote list for testing.
///
/// Configured once with builder methods, then shared freely.
#[derive(Debug, Default)]
pub struct MockRemoteList {
    modified_at: Option<Timestamp>,
    payload: Option<String>,
    fail_probe: Option<String>,
    fail_fetch: Option<String>,
}

impl MockRemoteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remote exposes this modification timestamp.
    pub fn with_modified_at(mut self, ts: Timestamp) -> Self {
        self.modified_at = Some(ts);
        self
    }

    /// Remote serves this payload on fetch.
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// The metadata probe fails with this reason.
    pub fn with_probe_failure(mut self, reason: impl Into<String>) -> Self {
        self.fail_probe = Some(reason.into());
        self
    }

    /// The payload fetch fails with this reason.
    pub fn with_fetch_failure(mut self, reason: impl Into<String>) -> Self {
        self.fail_fetch = Some(reason.into());
        self
    }
}

#[async_trait]
impl RemoteListSource for MockRemoteList {
    async fn modified_at(&self) -> Result<Option<Timestamp>, SyncError> {
        if let Some(reason) = &self.fail_probe {
            return Err(SyncError::Network(reason.clone()));
        }
        Ok(self.modified_at)
    }

    async fn fetch_payload(&self) -> Result<String, SyncError> {
        if let Some(reason) = &self.fail_fetch {
            return Err(SyncError::Network(reason.clone()));
        }
        Ok(self.payload.clone().unwrap_or_default())
    }
}

/// Mock registry gateway for testing: an in-memory record set.
#[derive(Debug, Default)]
pub struct MockRegistryGateway {
    records: std::sync::Mutex<Vec<SpamRecord>>,
    fail_writes: Option<String>,
}

impl MockRegistryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the in-memory registry.
    pub fn with_records(self, records: Vec<SpamRecord>) -> Self {
        *self.records.lock().unwrap() = records;
        self
    }

    /// Every write fails with this reason.
    pub fn with_write_failure(mut self, reason: impl Into<String>) -> Self {
        self.fail_writes = Some(reason.into());
        self
    }

    /// Snapshot of the current record set.
    pub fn records(&self) -> Vec<SpamRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistryGateway for MockRegistryGateway {
    async fn last_update_timestamp(&self) -> Result<Option<Timestamp>, SyncError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.last_updated)
            .max())
    }

    async fn replace_all(&self, records: Vec<SpamRecord>) -> Result<(), SyncError> {
        if let Some(reason) = &self.fail_writes {
            return Err(SyncError::Storage(reason.clone()));
        }
        *self.records.lock().unwrap() = records;
        Ok(())
    }
}
