//! # Call Verdict
//!
//! The decision handed back to the host's call-interception mechanism.

use serde::{Deserialize, Serialize};

/// What the host should do with an incoming call.
///
/// Only two shapes of this value exist, produced by [`CallVerdict::allow`]
/// and [`CallVerdict::block`]; the flag combinations are policy, not
/// per-call choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallVerdict {
    /// Prevent the call from ringing through.
    pub block: bool,
    /// Ensure no sound is played for the call.
    pub silence: bool,
    /// Reject immediately instead of letting it ring out.
    pub reject_immediately: bool,
    /// Omit the call from the host's call log.
    pub skip_log: bool,
    /// Omit the host's notification for the call.
    pub skip_notification: bool,
}

impl CallVerdict {
    /// Let the call through untouched.
    pub fn allow() -> Self {
        Self {
            block: false,
            silence: false,
            reject_immediately: false,
            skip_log: false,
            skip_notification: false,
        }
    }

    /// Block the call: silence it and reject it immediately, but still
    /// record a log entry and raise a notification so the user can see
    /// what was blocked.
    pub fn block() -> Self {
        Self {
            block: true,
            silence: true,
            reject_immediately: true,
            skip_log: false,
            skip_notification: false,
        }
    }
}
