//! # Spam Number Registry Subsystem
//!
//! **Subsystem ID:** 1
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Owns the two persistence layers for flagged phone numbers and keeps them
//! consistent: a flat append/replace log (the disaster-recovery source of
//! truth) and an in-memory indexed view (the hot lookup path). All reads and
//! writes from other subsystems go through [`SpamRegistryApi`].
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Dual-store consistency | `service/registry.rs` - log written before index swap |
//! | Key uniqueness (replace-on-conflict) | `domain/index.rs` - keyed upsert |
//! | Listing ordered by report count | `domain/index.rs` - `records_by_report_count()` |
//! | No lookup before import | `service/registry.rs` - `NotReady` guard |
//!
//! ## Write Ordering
//!
//! The flat log is always written before the indexed view:
//!
//! ```text
//! replace_all ──→ [flat log: tmp file + rename] ──→ [index: swap under write lock]
//! append_one  ──→ [flat log: append line]       ──→ [index: upsert]
//! ```
//!
//! A crash between the two steps leaves the log ahead of the index; the next
//! process start re-imports the log, so the log always wins.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! cw-01-registry/
//! ├── domain/     # SpamIndex, log line codec, RegistryError
//! ├── ports/      # SpamRegistryApi (inbound), TimeSource (outbound)
//! ├── adapters/   # FlatLogStore over tokio::fs
//! ├── service/    # SpamRegistryService orchestrating both stores
//! └── config.rs   # RegistryConfig
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::FlatLogStore;
pub use config::RegistryConfig;
pub use domain::{RegistryError, SpamIndex};
pub use ports::{MockTimeSource, SpamRegistryApi, SystemTimeSource, TimeSource};
pub use service::SpamRegistryService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
