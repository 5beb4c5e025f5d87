//! # Screening Integration Flows
//!
//! Raw call handle → verdict through the full stack: decision engine over
//! the real registry with a temp-dir flat log. The lookup adapter below
//! mirrors the one the runtime wires between the two subsystems.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use tempfile::tempdir;

    use cw_01_registry::{
        FlatLogStore, MockTimeSource, RegistryError, SpamRegistryApi, SpamRegistryService,
    };
    use cw_03_call_screening::{
        CallDecisionEngine, CallScreeningApi, CallVerdict, LookupError, SpamLookup,
    };
    use shared_types::SpamRecord;

    type Registry = SpamRegistryService<MockTimeSource>;

    /// Runtime-style bridge from the engine to the registry service.
    struct LookupAdapter {
        registry: Arc<Registry>,
    }

    #[async_trait]
    impl SpamLookup for LookupAdapter {
        async fn is_spam(&self, key: &str) -> Result<bool, LookupError> {
            self.registry.lookup(key).await.map_err(|err| match err {
                RegistryError::NotReady => LookupError::NotReady,
                RegistryError::StorageUnavailable { message } => {
                    LookupError::Unavailable { message }
                }
            })
        }
    }

    fn engine_over(registry: Arc<Registry>) -> CallDecisionEngine<LookupAdapter> {
        CallDecisionEngine::new(Arc::new(LookupAdapter { registry }))
    }

    async fn ready_registry(dir: &tempfile::TempDir) -> Arc<Registry> {
        let registry = Arc::new(Registry::with_log(
            FlatLogStore::new(dir.path().join("spamnumbers.txt")),
            MockTimeSource::new(1000),
        ));
        registry.initialize().await.unwrap();
        registry
    }

    #[tokio::test]
    async fn test_formatted_handle_blocks_registered_number() {
        let dir = tempdir().unwrap();
        let registry = ready_registry(&dir).await;
        registry
            .replace_all(vec![SpamRecord::new("+15551234567", 1, 1000)])
            .await
            .unwrap();

        let engine = engine_over(registry);
        let verdict = engine.screen(Some("+1 (555) 123-4567")).await;

        assert!(verdict.block);
        assert!(verdict.silence);
        assert!(verdict.reject_immediately);
        assert!(!verdict.skip_log);
        assert!(!verdict.skip_notification);
    }

    #[tokio::test]
    async fn test_unregistered_and_unidentifiable_handles_allowed() {
        let dir = tempdir().unwrap();
        let registry = ready_registry(&dir).await;
        registry
            .replace_all(vec![SpamRecord::new("+15551234567", 1, 1000)])
            .await
            .unwrap();

        let engine = engine_over(registry);
        assert_eq!(
            engine.screen(Some("+1 (555) 000-0000")).await,
            CallVerdict::allow()
        );
        assert_eq!(engine.screen(None).await, CallVerdict::allow());
        assert_eq!(engine.screen(Some("Withheld")).await, CallVerdict::allow());
    }

    #[tokio::test]
    async fn test_registry_not_ready_fails_open() {
        let dir = tempdir().unwrap();
        // initialize() never called: every lookup reports NotReady.
        let registry = Arc::new(Registry::with_log(
            FlatLogStore::new(dir.path().join("spamnumbers.txt")),
            MockTimeSource::new(1000),
        ));

        let engine = engine_over(registry);
        assert_eq!(
            engine.screen(Some("+15551234567")).await,
            CallVerdict::allow()
        );
    }

    #[tokio::test]
    async fn test_replace_changes_future_verdicts() {
        let dir = tempdir().unwrap();
        let registry = ready_registry(&dir).await;
        registry
            .replace_all(vec![SpamRecord::new("123456789", 1, 1000)])
            .await
            .unwrap();

        let engine = engine_over(Arc::clone(&registry));
        assert!(engine.screen(Some("123456789")).await.block);

        // The number drops out on the next full replace.
        registry
            .replace_all(vec![SpamRecord::new("987654321", 1, 2000)])
            .await
            .unwrap();
        assert!(!engine.screen(Some("123456789")).await.block);
        assert!(engine.screen(Some("987654321")).await.block);
    }
}
