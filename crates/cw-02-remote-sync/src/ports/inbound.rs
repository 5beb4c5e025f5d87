//! Inbound Ports (Driving Ports)
//!
//! The API the presentation layer uses to drive sync and read its state.

use async_trait::async_trait;

use crate::domain::{StatusSnapshot, SyncStatus};

/// Primary sync API (Driving Port)
///
/// `check` and `update` never return an error: every failure is folded into
/// `SyncStatus::Error` so the UI has exactly one surface to render.
#[async_trait]
pub trait SyncApi: Send + Sync {
    /// Probe the remote list's modification timestamp and compare it with
    /// the local registry. Transitions the status to `UpToDate`,
    /// `NeedsUpdate`, or `Error`.
    async fn check(&self) -> SyncStatus;

    /// Fetch the full remote payload and atomically replace the registry.
    /// Transitions the status to `UpToDate(now)` or `Error`, leaving the
    /// registry at last-known-good on any failure.
    async fn update(&self) -> SyncStatus;

    /// Current status plus the transient busy/success flags.
    async fn status(&self) -> StatusSnapshot;
}
