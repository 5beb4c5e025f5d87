//! # Shared Types Crate
//!
//! This crate contains the domain entities shared across subsystems and the
//! phone-number normalizer every boundary uses before touching a number.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Canonical Keys Only**: A phone number crosses a subsystem boundary
//!   only after `normalize_number` has reduced it to its canonical form.
//! - **No Subsystem Logic**: Storage, sync, and screening behavior live in
//!   their own crates; this crate holds data and pure functions only.

pub mod entities;
pub mod normalize;

pub use entities::*;
pub use normalize::normalize_number;
