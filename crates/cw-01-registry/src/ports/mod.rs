//! Ports for the registry subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::SpamRegistryApi;
pub use outbound::{MockTimeSource, SystemTimeSource, TimeSource};
