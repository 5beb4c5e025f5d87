//! # Registry Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Registry configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Directory holding the flat log file.
    pub data_dir: PathBuf,

    /// File name of the flat log inside `data_dir`.
    pub log_file_name: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            log_file_name: "spamnumbers.txt".to_string(),
        }
    }
}

impl RegistryConfig {
    /// Full path of the flat log file.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(&self.log_file_name)
    }
}
