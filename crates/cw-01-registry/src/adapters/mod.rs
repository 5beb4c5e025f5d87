//! Adapters for the registry subsystem.

mod flat_log;

pub use flat_log::FlatLogStore;
