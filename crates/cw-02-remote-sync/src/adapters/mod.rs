//! Adapters for the sync subsystem.

mod http;

pub use http::HttpRemoteList;
