//! # Remote Sync Subsystem
//!
//! **Subsystem ID:** 2
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Detects staleness of the local spam registry against the single remote
//! authoritative list and performs the atomic full-registry replacement.
//! There is no version protocol on the remote side: the HTTP `Last-Modified`
//! metadata is the only staleness signal, compared against the registry's
//! own max `last_updated`.
//!
//! ## Status State Machine
//!
//! ```text
//! Unknown ──────check──→ [checking] ──local ≥ remote──→ UpToDate(local)
//!    │                       │
//!    │                       ├──local < remote──→ NeedsUpdate(local, remote)
//!    │                       └──failure────────→ Error(message)
//!    │
//!    └──────update──→ [updating] ──success──→ UpToDate(now) + success flag
//!                         └──failure──→ Error(message), registry untouched
//! ```
//!
//! `checking`/`updating` are transient busy flags beside the status, never
//! status values themselves. Each check/update supersedes the previous
//! status wholesale; nothing is merged. The coordinator never retries on
//! its own — the user sees the error and retries.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! cw-02-remote-sync/
//! ├── domain/     # SyncStatus, payload parsing, SyncError
//! ├── ports/      # SyncApi (inbound), RemoteListSource/RegistryGateway (outbound)
//! ├── adapters/   # HttpRemoteList over reqwest
//! ├── service/    # RemoteSyncCoordinator
//! └── config.rs   # SyncConfig
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::HttpRemoteList;
pub use config::SyncConfig;
pub use domain::{parse_payload, StatusSnapshot, SyncError, SyncStatus};
pub use ports::{
    MockRegistryGateway, MockRemoteList, MockTimeSource, RegistryGateway, RemoteListSource,
    SyncApi, SystemTimeSource, TimeSource,
};
pub use service::RemoteSyncCoordinator;
