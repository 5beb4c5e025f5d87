//! # Callwall Test Suite
//!
//! Unified test crate containing cross-subsystem flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── registry_flow.rs    # dual-store consistency, round-trips, races
//!     ├── sync_flow.rs        # check/update against a real registry
//!     └── screening_flow.rs   # raw handle → verdict through the full stack
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p callwall-tests
//!
//! # By category
//! cargo test -p callwall-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
