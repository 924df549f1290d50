//! Manual drive evaluation
//!
//! Reached only when nothing of higher priority claimed the tick.

use crate::config::IdlePolicy;
use crate::traits::{Direction, MotorCommand, SwitchSnapshot};

/// Map the manual controls onto a command for both motors
///
/// `down` wins over `up`; the fault latch has already rejected the case
/// where both are pressed. With neither pressed the result depends on the
/// idle policy: `Hold` issues nothing, leaving the last output in place.
pub fn evaluate(snapshot: &SwitchSnapshot, policy: IdlePolicy) -> Option<MotorCommand> {
    if snapshot.down {
        Some(MotorCommand::both(Direction::In))
    } else if snapshot.up {
        Some(MotorCommand::both(Direction::Out))
    } else {
        match policy {
            IdlePolicy::Hold => None,
            IdlePolicy::ForceOff => Some(MotorCommand::all_off()),
        }
    }
}
