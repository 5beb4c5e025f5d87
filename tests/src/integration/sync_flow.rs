//! # Sync Integration Flows
//!
//! Drives the coordinator against a real registry (temp-dir flat log), with
//! the remote list mocked. The gateway adapter below mirrors the one the
//! runtime wires between the two subsystems.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use tempfile::tempdir;

    use cw_01_registry::{
        FlatLogStore, MockTimeSource, RegistryError, SpamRegistryApi, SpamRegistryService,
    };
    use cw_02_remote_sync::{
        MockRemoteList, RegistryGateway, RemoteSyncCoordinator, SyncApi, SyncConfig, SyncError,
        SyncStatus,
    };
    use shared_types::{SpamRecord, Timestamp};

    type Registry = SpamRegistryService<MockTimeSource>;

    /// Runtime-style bridge from the coordinator to the registry service.
    struct GatewayAdapter {
        registry: Arc<Registry>,
    }

    #[async_trait]
    impl RegistryGateway for GatewayAdapter {
        async fn last_update_timestamp(&self) -> Result<Option<Timestamp>, SyncError> {
            self.registry
                .last_update_timestamp()
                .await
                .map_err(|e: RegistryError| SyncError::Storage(e.to_string()))
        }

        async fn replace_all(&self, records: Vec<SpamRecord>) -> Result<(), SyncError> {
            self.registry
                .replace_all(records)
                .await
                .map_err(|e: RegistryError| SyncError::Storage(e.to_string()))
        }
    }

    async fn registry_in(dir: &tempfile::TempDir, now: u64) -> Arc<Registry> {
        let registry = Arc::new(Registry::with_log(
            FlatLogStore::new(dir.path().join("spamnumbers.txt")),
            MockTimeSource::new(now),
        ));
        registry.initialize().await.unwrap();
        registry
    }

    fn coordinator_over(
        registry: Arc<Registry>,
        remote: MockRemoteList,
        now: u64,
    ) -> RemoteSyncCoordinator<
        MockRemoteList,
        GatewayAdapter,
        cw_02_remote_sync::MockTimeSource,
    > {
        RemoteSyncCoordinator::new(
            Arc::new(remote),
            Arc::new(GatewayAdapter { registry }),
            cw_02_remote_sync::MockTimeSource::new(now),
            SyncConfig::for_testing(),
        )
    }

    #[tokio::test]
    async fn test_update_populates_empty_registry() {
        let dir = tempdir().unwrap();
        let registry = registry_in(&dir, 1000).await;

        let remote = MockRemoteList::new().with_payload("123456789\n987654321\n\n");
        let coordinator = coordinator_over(Arc::clone(&registry), remote, 9000);

        let status = coordinator.update().await;
        assert_eq!(status, SyncStatus::UpToDate { last_updated: 9000 });

        let records = registry.all_records().await.unwrap();
        let mut numbers: Vec<&str> =
            records.iter().map(|r| r.phone_number.as_str()).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, vec!["123456789", "987654321"]);
        assert!(records.iter().all(|r| r.report_count == 1));
        assert!(records.iter().all(|r| r.last_updated == 9000));
    }

    #[tokio::test]
    async fn test_check_flags_stale_registry() {
        let dir = tempdir().unwrap();
        let registry = registry_in(&dir, 1000).await;
        registry
            .replace_all(vec![SpamRecord::new("111", 1, 1000)])
            .await
            .unwrap();

        let remote = MockRemoteList::new().with_modified_at(2000);
        let coordinator = coordinator_over(registry, remote, 0);

        assert_eq!(
            coordinator.check().await,
            SyncStatus::NeedsUpdate {
                local: 1000,
                remote: 2000
            }
        );
    }

    #[tokio::test]
    async fn test_check_accepts_fresh_registry() {
        let dir = tempdir().unwrap();
        let registry = registry_in(&dir, 5000).await;
        registry
            .replace_all(vec![SpamRecord::new("111", 1, 5000)])
            .await
            .unwrap();

        let remote = MockRemoteList::new().with_modified_at(2000);
        let coordinator = coordinator_over(registry, remote, 0);

        assert_eq!(
            coordinator.check().await,
            SyncStatus::UpToDate { last_updated: 5000 }
        );
    }

    #[tokio::test]
    async fn test_failed_update_leaves_last_known_good_set() {
        let dir = tempdir().unwrap();
        let registry = registry_in(&dir, 1000).await;
        registry
            .replace_all(vec![SpamRecord::new("111", 1, 1000)])
            .await
            .unwrap();

        let remote = MockRemoteList::new().with_fetch_failure("read timed out");
        let coordinator = coordinator_over(Arc::clone(&registry), remote, 9000);

        let status = coordinator.update().await;
        assert!(matches!(status, SyncStatus::Error { .. }));

        // Registry unchanged, on disk and in memory.
        assert!(registry.lookup("111").await.unwrap());
        assert_eq!(registry.last_update_timestamp().await.unwrap(), Some(1000));
    }

    #[tokio::test]
    async fn test_updated_set_survives_restart_then_checks_up_to_date() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("spamnumbers.txt");

        {
            let registry = registry_in(&dir, 1000).await;
            let remote = MockRemoteList::new().with_payload("123456789\n");
            let coordinator = coordinator_over(Arc::clone(&registry), remote, 4000);
            coordinator.update().await;
        }

        let reborn = Arc::new(Registry::with_log(
            FlatLogStore::new(log_path),
            MockTimeSource::new(8000),
        ));
        reborn.initialize().await.unwrap();

        // The remote has not moved since the update; a fresh process agrees.
        let remote = MockRemoteList::new().with_modified_at(3000);
        let coordinator = coordinator_over(Arc::clone(&reborn), remote, 8000);
        assert_eq!(
            coordinator.check().await,
            SyncStatus::UpToDate { last_updated: 4000 }
        );
    }
}
