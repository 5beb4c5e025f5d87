//! Outbound (Driven) ports for the screening subsystem.

use async_trait::async_trait;

use crate::domain::LookupError;

/// Membership query against the spam registry (Driven Port).
///
/// Implementations must answer from an indexed in-memory view; this sits on
/// the call-setup hot path and has a sub-second budget end to end.
#[async_trait]
pub trait SpamLookup: Send + Sync {
    /// Whether the canonical number is registered as spam.
    async fn is_spam(&self, key: &str) -> Result<bool, LookupError>;
}

/// Mock lookup for testing.
#[derive(Debug, Default)]
pub struct MockSpamLookup {
    numbers: std::collections::HashSet<String>,
    failure: Option<String>,
    not_ready: bool,
}

impl MockSpamLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spam number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.numbers.insert(number.into());
        self
    }

    /// Every lookup fails with this reason.
    pub fn with_failure(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    /// Every lookup reports the registry as not ready.
    pub fn not_ready(mut self) -> Self {
        self.not_ready = true;
        self
    }
}

#[async_trait]
impl SpamLookup for MockSpamLookup {
    async fn is_spam(&self, key: &str) -> Result<bool, LookupError> {
        if self.not_ready {
            return Err(LookupError::NotReady);
        }
        if let Some(reason) = &self.failure {
            return Err(LookupError::Unavailable {
                message: reason.clone(),
            });
        }
        Ok(self.numbers.contains(key))
    }
}
