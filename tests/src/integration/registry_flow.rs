//! # Registry Integration Flows
//!
//! Exercises the dual-persisted registry end to end: full replaces, flat-log
//! round-trips across process restarts, and the reader/writer discipline
//! that keeps lookups consistent while a replace is in flight.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::tempdir;

    use cw_01_registry::{FlatLogStore, MockTimeSource, SpamRegistryApi, SpamRegistryService};
    use shared_types::SpamRecord;

    fn service_at(
        path: std::path::PathBuf,
        now: u64,
    ) -> SpamRegistryService<MockTimeSource> {
        SpamRegistryService::with_log(FlatLogStore::new(path), MockTimeSource::new(now))
    }

    #[tokio::test]
    async fn test_replace_all_round_trips_as_a_set() {
        let dir = tempdir().unwrap();
        let service = service_at(dir.path().join("spamnumbers.txt"), 1000);
        service.initialize().await.unwrap();

        let records = vec![
            SpamRecord::new("123456789", 1, 100),
            SpamRecord::new("987654321", 5, 900),
            SpamRecord::new("+15551234567", 2, 400),
        ];
        service.replace_all(records.clone()).await.unwrap();

        let mut read_back = service.all_records().await.unwrap();
        let mut expected = records;
        read_back.sort_by(|a, b| a.phone_number.cmp(&b.phone_number));
        expected.sort_by(|a, b| a.phone_number.cmp(&b.phone_number));
        assert_eq!(read_back, expected);

        assert_eq!(service.last_update_timestamp().await.unwrap(), Some(900));
    }

    #[tokio::test]
    async fn test_registry_survives_process_restart() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("spamnumbers.txt");

        {
            let service = service_at(log_path.clone(), 1000);
            service.initialize().await.unwrap();
            service
                .replace_all(vec![
                    SpamRecord::new("111", 3, 500),
                    SpamRecord::new("222", 1, 800),
                ])
                .await
                .unwrap();
        }

        // "Restart": a fresh service over the same log bootstraps the index.
        let reborn = service_at(log_path, 2000);
        reborn.initialize().await.unwrap();

        assert!(reborn.lookup("111").await.unwrap());
        assert!(reborn.lookup("222").await.unwrap());
        assert_eq!(reborn.last_update_timestamp().await.unwrap(), Some(800));
    }

    #[tokio::test]
    async fn test_hand_written_log_defaults_on_import() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("spamnumbers.txt");
        // A log as the original file surface may leave it: bare numbers,
        // partial fields, stray blank lines.
        tokio::fs::write(&log_path, "123456789\n\n987654321,5\n555,2,9000\n")
            .await
            .unwrap();

        let service = service_at(log_path, 7000);
        service.initialize().await.unwrap();

        let records = service.all_records().await.unwrap();
        assert_eq!(records.len(), 3);

        let bare = records.iter().find(|r| r.phone_number == "123456789").unwrap();
        assert_eq!((bare.report_count, bare.last_updated), (1, 7000));

        let full = records.iter().find(|r| r.phone_number == "555").unwrap();
        assert_eq!((full.report_count, full.last_updated), (2, 9000));
    }

    #[tokio::test]
    async fn test_initialize_twice_does_not_duplicate() {
        let dir = tempdir().unwrap();
        let service = service_at(dir.path().join("spamnumbers.txt"), 1000);

        service.initialize().await.unwrap();
        service
            .append_one(SpamRecord::new("111", 1, 1000))
            .await
            .unwrap();
        service.initialize().await.unwrap();

        assert_eq!(service.all_records().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_initialize_converges() {
        let dir = tempdir().unwrap();
        let service = Arc::new(service_at(dir.path().join("spamnumbers.txt"), 1000));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move { service.initialize().await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert!(service.all_records().await.unwrap().is_empty());
    }

    /// A key present both before and after a full replace must never be
    /// observed as missing while the replace is in flight.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_lookup_during_replace_sees_old_or_new_set() {
        let dir = tempdir().unwrap();
        let service = Arc::new(service_at(dir.path().join("spamnumbers.txt"), 1000));
        service.initialize().await.unwrap();

        // Big enough sets that replaces take measurable time.
        let old_set: Vec<SpamRecord> = (0..5_000)
            .map(|i| SpamRecord::new(format!("1{:08}", i), 1, 100))
            .chain([SpamRecord::new("777", 1, 100)])
            .collect();
        let new_set: Vec<SpamRecord> = (0..5_000)
            .map(|i| SpamRecord::new(format!("2{:08}", i), 1, 200))
            .chain([SpamRecord::new("777", 2, 200)])
            .collect();
        service.replace_all(old_set).await.unwrap();

        let replacer = {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                for _ in 0..10 {
                    service.replace_all(new_set.clone()).await.unwrap();
                }
            })
        };

        let prober = {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                // "777" exists in both sets; any miss means a reader saw a
                // half-populated index.
                for _ in 0..500 {
                    assert!(service.lookup("777").await.unwrap());
                }
            })
        };

        replacer.await.unwrap();
        prober.await.unwrap();
    }
}
