//! # Registry API Implementation
//!
//! Implements the SpamRegistryApi trait for read/write operations.

use async_trait::async_trait;

use shared_types::{SpamRecord, Timestamp};

use super::SpamRegistryService;
use crate::domain::{RegistryError, SpamIndex};
use crate::ports::inbound::SpamRegistryApi;
use crate::ports::outbound::TimeSource;

impl<TS: TimeSource> SpamRegistryService<TS> {
    fn ensure_ready(&self) -> Result<(), RegistryError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(RegistryError::NotReady)
        }
    }
}

#[async_trait]
impl<TS: TimeSource> SpamRegistryApi for SpamRegistryService<TS> {
    async fn initialize(&self) -> Result<(), RegistryError> {
        // On failure the cell stays empty, so a later call retries the
        // import instead of leaving the registry permanently not-ready.
        self.import
            .get_or_try_init(|| async {
                self.log.open().await?;

                let now = self.time_source.now();
                let records = self.log.read_all(now).await?;
                let count = records.len();

                let mut index = self.index.write().await;
                for record in records {
                    index.upsert(record);
                }

                tracing::info!("[cw-01] imported {} records from flat log", count);
                Ok::<(), RegistryError>(())
            })
            .await?;
        Ok(())
    }

    async fn lookup(&self, key: &str) -> Result<bool, RegistryError> {
        self.ensure_ready()?;
        Ok(self.index.read().await.contains(key))
    }

    async fn replace_all(&self, records: Vec<SpamRecord>) -> Result<(), RegistryError> {
        self.ensure_ready()?;

        // Collapse duplicate keys up front so both stores receive the same set.
        let new_index = SpamIndex::from_records(records);
        let record_set = new_index.records_by_report_count();

        // Durable log first: if this fails the index is untouched.
        self.log.write_all(&record_set).await?;

        // Clear-then-repopulate happens as one swap inside the write lock.
        *self.index.write().await = new_index;

        tracing::info!("[cw-01] replaced registry with {} records", record_set.len());
        Ok(())
    }

    async fn append_one(&self, record: SpamRecord) -> Result<(), RegistryError> {
        self.ensure_ready()?;

        self.log.append(&record).await?;
        self.index.write().await.upsert(record);
        Ok(())
    }

    async fn increment_report(&self, key: &str) -> Result<bool, RegistryError> {
        self.ensure_ready()?;

        // One write-lock critical section: readers see the bump only after
        // the log append has succeeded.
        let mut index = self.index.write().await;
        let Some(existing) = index.get(key) else {
            return Ok(false);
        };

        let mut updated = existing.clone();
        updated.report_count = updated.report_count.saturating_add(1);
        updated.last_updated = self.time_source.now();

        self.log.append(&updated).await?;
        index.upsert(updated);
        Ok(true)
    }

    async fn all_records(&self) -> Result<Vec<SpamRecord>, RegistryError> {
        self.ensure_ready()?;
        Ok(self.index.read().await.records_by_report_count())
    }

    async fn last_update_timestamp(&self) -> Result<Option<Timestamp>, RegistryError> {
        self.ensure_ready()?;
        Ok(self.index.read().await.last_update_timestamp())
    }
}
