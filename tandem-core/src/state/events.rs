//! Events reported by the controller
//!
//! The core does not log. Each tick returns the events it produced and the
//! firmware turns them into log lines.

use crate::safety::FaultKind;
use crate::traits::Motor;

/// Something worth reporting happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A correction run was started on this motor
    CorrectionStarted(Motor),
    /// A correction run used its budget and both limits were clear
    CorrectionFinished(Motor),
    /// The fault latch tripped this tick
    FaultTripped(FaultKind),
    /// Fault indication, reported on every faulted tick
    Faulted(FaultKind),
}
