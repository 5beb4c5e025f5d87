//! Ports for the screening subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::CallScreeningApi;
pub use outbound::{MockSpamLookup, SpamLookup};
