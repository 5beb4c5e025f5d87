//! # Callwall Runtime
//!
//! The main entry point wiring the three subsystems together.
//!
//! ## Architecture
//!
//! Subsystem crates never depend on one another; the runtime owns the
//! adapters that connect them:
//!
//! ```text
//! UI / operator ──check,update──→ RemoteSync(2) ──replace_all──→ Registry(1)
//!                                                                   │
//! Incoming call ──screen──→ CallScreening(3) ──lookup───────────────┘
//!                                                                   │
//!                                            [flat log] ←──────── [index]
//! ```
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load configuration (defaults + environment overrides)
//! 3. Construct the registry and await its one-shot import
//! 4. Wire the sync coordinator and the decision engine through adapters
//! 5. Run a startup staleness check
//! 6. Park until ctrl-c, then shut down gracefully

mod adapters;
mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cw_01_registry::{SpamRegistryApi, SpamRegistryService, SystemTimeSource};
use cw_02_remote_sync::{
    HttpRemoteList, RemoteSyncCoordinator, SyncApi, SystemTimeSource as SyncTimeSource,
};
use cw_03_call_screening::CallDecisionEngine;

use crate::adapters::{RegistryGatewayAdapter, SpamLookupAdapter};
use crate::config::{load_config, RuntimeConfig};

type Registry = SpamRegistryService<SystemTimeSource>;
type Coordinator =
    RemoteSyncCoordinator<HttpRemoteList, RegistryGatewayAdapter<Registry>, SyncTimeSource>;
type Engine = CallDecisionEngine<SpamLookupAdapter<Registry>>;

/// The runtime owning every subsystem for the life of the process.
pub struct CallwallRuntime {
    registry: Arc<Registry>,
    coordinator: Arc<Coordinator>,
    /// Held for the host's call-interception hook; screening requests are
    /// dispatched against it on short-lived tasks, one per incoming call.
    #[allow(dead_code)]
    engine: Arc<Engine>,
}

impl CallwallRuntime {
    /// Construct and wire all subsystems. No I/O happens here.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let registry = Arc::new(Registry::new(&config.registry, SystemTimeSource));

        let remote = Arc::new(
            HttpRemoteList::new(&config.sync).context("Failed to build remote list client")?,
        );
        let gateway = Arc::new(RegistryGatewayAdapter::new(Arc::clone(&registry)));
        let coordinator = Arc::new(RemoteSyncCoordinator::new(
            remote,
            gateway,
            SyncTimeSource,
            config.sync,
        ));

        let lookup = Arc::new(SpamLookupAdapter::new(Arc::clone(&registry)));
        let engine = Arc::new(CallDecisionEngine::new(lookup));

        Ok(Self {
            registry,
            coordinator,
            engine,
        })
    }

    /// Start the runtime: import the registry, then run a staleness check.
    pub async fn start(&self) -> Result<()> {
        info!("===========================================");
        info!("  Callwall Runtime v{}", env!("CARGO_PKG_VERSION"));
        info!("===========================================");

        // The registry must be ready before the first call can be screened.
        self.registry
            .initialize()
            .await
            .context("Failed to initialize spam registry")?;

        let record_count = self.registry.all_records().await?.len();
        info!("Registry ready with {} records", record_count);

        let status = self.coordinator.check().await;
        info!("Startup staleness check: {:?}", status);

        Ok(())
    }

    /// Shut down gracefully. An in-flight check or update is abandoned; the
    /// flat log is only replaced at the very end of a successful cycle, so
    /// there is no half-state to clean up.
    pub fn shutdown(&self) {
        info!("Shutdown complete");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = load_config();

    // Create and start the runtime
    let runtime = CallwallRuntime::new(config)?;
    runtime.start().await?;

    // Keep running until interrupted
    info!("Callwall is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    runtime.shutdown();
    Ok(())
}
