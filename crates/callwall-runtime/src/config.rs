//! # Runtime Configuration
//!
//! Per-subsystem configs assembled into one runtime config, with
//! environment-variable overrides applied on top of the defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use cw_01_registry::RegistryConfig;
use cw_02_remote_sync::SyncConfig;

/// Configuration for the whole runtime.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Registry subsystem configuration.
    pub registry: RegistryConfig,
    /// Sync subsystem configuration.
    pub sync: SyncConfig,
}

/// Load configuration from defaults and environment.
pub fn load_config() -> RuntimeConfig {
    let mut config = RuntimeConfig::default();

    if let Ok(dir) = std::env::var("CALLWALL_DATA_DIR") {
        config.registry.data_dir = dir.into();
        info!("Data directory overridden from environment");
    }

    if let Ok(url) = std::env::var("CALLWALL_REMOTE_URL") {
        config.sync.remote_url = url;
        info!("Remote list URL overridden from environment");
    }

    if let Ok(secs) = std::env::var("CALLWALL_HTTP_TIMEOUT_SECS") {
        match secs.parse() {
            Ok(parsed) => config.sync.http_timeout_secs = parsed,
            Err(_) => warn!("CALLWALL_HTTP_TIMEOUT_SECS must be an integer number of seconds"),
        }
    }

    config
}
