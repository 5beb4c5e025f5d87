//! # Call Decision Engine Service

mod engine;

pub use engine::CallDecisionEngine;
