//! # Sync Configuration

use serde::{Deserialize, Serialize};

/// Default remote list resource (newline-delimited numbers, HTTPS).
pub const DEFAULT_REMOTE_URL: &str =
    "https://raw.githubusercontent.com/callwall/spam-lists/master/SpamNumbers.txt";

/// Sync configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncConfig {
    /// URL of the remote list resource.
    pub remote_url: String,

    /// Bound on both the metadata probe and the payload fetch, in seconds.
    pub http_timeout_secs: u64,

    /// How long the transient update-success flag stays raised, in
    /// milliseconds.
    pub success_display_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            http_timeout_secs: 3,
            success_display_ms: 3_000,
        }
    }
}

impl SyncConfig {
    /// Create a config for testing (short intervals, local placeholder URL).
    pub fn for_testing() -> Self {
        Self {
            remote_url: "http://127.0.0.1:0/spamnumbers.txt".to_string(),
            http_timeout_secs: 1,
            success_display_ms: 50,
        }
    }
}
