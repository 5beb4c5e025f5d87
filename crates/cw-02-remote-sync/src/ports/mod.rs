//! Ports for the sync subsystem.

pub mod inbound;
pub mod outbound;

pub use inbound::SyncApi;
pub use outbound::{
    MockRegistryGateway, MockRemoteList, MockTimeSource, RegistryGateway, RemoteListSource,
    SystemTimeSource, TimeSource,
};
