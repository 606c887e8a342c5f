//! # Utilities Module
//!
//! Shared helpers that are not tied to a single game system.

pub mod random;

pub use random::*;
