//! Per-tick sub-state machines
//!
//! The settle gate and the correction sequencer, plus the events the
//! controller reports.

pub mod correction;
pub mod events;
pub mod settle;

pub use correction::{CorrectionSequencer, CorrectionState, CorrectionStep};
pub use events::Event;
pub use settle::SettleGate;
