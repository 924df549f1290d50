//! Configuration types
//!
//! Compile-time timing constants for the controller.

pub mod types;

pub use types::*;
