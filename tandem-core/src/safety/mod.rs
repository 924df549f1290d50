//! Safety interlock
//!
//! Detects fault conditions and latches the terminal fault state.

pub mod latch;

pub use latch::{FaultKind, FaultLatch, SafetyStatus};
