//! # HTTP Remote List Adapter
//!
//! Implements `RemoteListSource` over HTTPS. The metadata probe is a HEAD
//! request reading the `Last-Modified` response header; the payload fetch is
//! a plain GET. Both share one client with a bounded timeout, so a stalled
//! remote turns into a `Network` error instead of hanging a sync cycle.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::LAST_MODIFIED;

use shared_types::Timestamp;

use crate::config::SyncConfig;
use crate::domain::SyncError;
use crate::ports::outbound::RemoteListSource;

/// The remote list behind an HTTP(S) URL.
#[derive(Debug, Clone)]
pub struct HttpRemoteList {
    client: reqwest::Client,
    url: String,
}

impl HttpRemoteList {
    /// Build a client bounded by the configured timeout.
    pub fn new(config: &SyncConfig) -> Result<Self, SyncError> {
        let timeout = Duration::from_secs(config.http_timeout_secs);
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(network_error)?;
        Ok(Self {
            client,
            url: config.remote_url.clone(),
        })
    }

    /// The resource URL this adapter probes and fetches.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RemoteListSource for HttpRemoteList {
    async fn modified_at(&self) -> Result<Option<Timestamp>, SyncError> {
        let response = self
            .client
            .head(&self.url)
            .send()
            .await
            .map_err(network_error)?
            .error_for_status()
            .map_err(network_error)?;

        // Absent or unparseable Last-Modified is "no timestamp", not an
        // error; the coordinator substitutes its own fallback.
        let Some(value) = response.headers().get(LAST_MODIFIED) else {
            return Ok(None);
        };
        let Ok(text) = value.to_str() else {
            return Ok(None);
        };
        Ok(chrono::DateTime::parse_from_rfc2822(text)
            .ok()
            .map(|dt| dt.timestamp_millis() as Timestamp))
    }

    async fn fetch_payload(&self) -> Result<String, SyncError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(network_error)?
            .error_for_status()
            .map_err(network_error)?;

        response.text().await.map_err(network_error)
    }
}

fn network_error(err: reqwest::Error) -> SyncError {
    SyncError::Network(err.to_string())
}
