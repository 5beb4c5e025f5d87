//! # Flat Log Store
//!
//! Durable append/replace log of records over a line-oriented file. This is
//! the disaster-recovery source of truth: it is written before the indexed
//! view on every mutation, and re-imported on process start.
//!
//! Full replaces go through a temp file in the same directory followed by a
//! rename, so a crash mid-replace leaves either the old or the new file on
//! disk, never a truncated one.

use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use shared_types::{SpamRecord, Timestamp};

use crate::domain::log_codec::{encode_line, parse_line};
use crate::domain::RegistryError;

/// Line-oriented record log on the local filesystem.
#[derive(Debug, Clone)]
pub struct FlatLogStore {
    path: PathBuf,
}

impl FlatLogStore {
    /// Create a handle for the log at `path`. No I/O happens until `open`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and an empty log file if none exists.
    pub async fn open(&self) -> Result<(), RegistryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        Ok(())
    }

    /// Read every record in the log, skipping blank lines and defaulting
    /// optional fields to (`report_count = 1`, `last_updated = default_timestamp`).
    ///
    /// The result is a sequence in file order; consumers must treat it as a
    /// set once imported (duplicate keys collapse, last occurrence wins).
    pub async fn read_all(
        &self,
        default_timestamp: Timestamp,
    ) -> Result<Vec<SpamRecord>, RegistryError> {
        let content = fs::read_to_string(&self.path).await?;
        Ok(content
            .lines()
            .filter_map(|line| parse_line(line, default_timestamp))
            .collect())
    }

    /// Atomically replace the log contents with the given record set.
    pub async fn write_all(&self, records: &[SpamRecord]) -> Result<(), RegistryError> {
        let mut content = String::new();
        for record in records {
            content.push_str(&encode_line(record));
            content.push('\n');
        }

        let tmp_path = self.path.with_extension("tmp");
        let mut tmp = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_path)
            .await?;
        tmp.write_all(content.as_bytes()).await?;
        tmp.sync_all().await?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    /// Append a single record line to the log.
    pub async fn append(&self, record: &SpamRecord) -> Result<(), RegistryError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(format!("{}\n", encode_line(record)).as_bytes())
            .await?;
        Ok(())
    }
}
