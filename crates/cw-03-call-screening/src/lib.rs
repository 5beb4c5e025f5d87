//! # Call Screening Subsystem
//!
//! **Subsystem ID:** 3
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Turns an incoming raw call handle into an allow/block verdict for the
//! host's call-interception mechanism, within a call-setup deadline. The
//! engine is fail-open end to end: a missing number, a registry that is not
//! ready, or a storage fault all produce "allow". A spam call slipping
//! through is acceptable; a dropped legitimate call is not.
//!
//! ## Verdict Policy
//!
//! | Outcome | block | silence | reject_immediately | skip_log | skip_notification |
//! |---------|-------|---------|--------------------|----------|-------------------|
//! | Allow   | false | false   | false              | false    | false             |
//! | Block   | true  | true    | true               | false    | false             |
//!
//! A blocked call is always still logged and notified; an allowed call is
//! never suppressed in any way.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! cw-03-call-screening/
//! ├── domain/     # CallVerdict, LookupError
//! ├── ports/      # CallScreeningApi (inbound), SpamLookup (outbound)
//! └── service/    # CallDecisionEngine
//! ```

pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{CallVerdict, LookupError};
pub use ports::{CallScreeningApi, MockSpamLookup, SpamLookup};
pub use service::CallDecisionEngine;
