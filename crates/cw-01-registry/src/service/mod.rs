//! # Spam Registry Service
//!
//! The main service implementing the registry API.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `SpamRegistryApi` for all read/write operations
//! 2. Owns one `FlatLogStore` and one `SpamIndex` and keeps them consistent
//! 3. Guards the index with a single-writer/multiple-reader lock so a
//!    lookup during a full replace sees the old or the new complete set
//! 4. Uses dependency injection for the time source

mod registry;

use tokio::sync::{OnceCell, RwLock};

use crate::adapters::FlatLogStore;
use crate::config::RegistryConfig;
use crate::domain::SpamIndex;
use crate::ports::outbound::TimeSource;

/// The Spam Registry Service.
///
/// Process-wide single instance: constructed once by the runtime root,
/// shared by reference, its store handles never change after construction.
pub struct SpamRegistryService<TS: TimeSource> {
    /// Durable flat log, written before the index on every mutation.
    pub(crate) log: FlatLogStore,
    /// Indexed view, the only store the lookup hot path touches.
    pub(crate) index: RwLock<SpamIndex>,
    /// One-shot import guard: the log is imported into the index exactly
    /// once per process, no matter how many callers race `initialize()`.
    pub(crate) import: OnceCell<()>,
    /// Time source for record timestamps and read-side defaulting.
    pub(crate) time_source: TS,
}

impl<TS: TimeSource> SpamRegistryService<TS> {
    /// Create a service over the configured log location.
    pub fn new(config: &RegistryConfig, time_source: TS) -> Self {
        Self::with_log(FlatLogStore::new(config.log_path()), time_source)
    }

    /// Create a service over an explicit log store.
    pub fn with_log(log: FlatLogStore, time_source: TS) -> Self {
        Self {
            log,
            index: RwLock::new(SpamIndex::new()),
            import: OnceCell::new(),
            time_source,
        }
    }

    /// Whether `initialize()` has completed its one-shot import.
    pub fn is_ready(&self) -> bool {
        self.import.get().is_some()
    }
}
