//! Switch snapshot and the sampler trait

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Motor;

/// Logical state of the four inputs for one tick
///
/// All fields are active-high: `true` means pressed / limit reached,
/// whatever the electrical level on the pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwitchSnapshot {
    /// Manual "up" control
    pub up: bool,
    /// Manual "down" control
    pub down: bool,
    /// Left desync limit switch
    pub left_limit: bool,
    /// Right desync limit switch
    pub right_limit: bool,
}

impl SwitchSnapshot {
    /// All inputs released
    pub const fn released() -> Self {
        Self {
            up: false,
            down: false,
            left_limit: false,
            right_limit: false,
        }
    }

    /// Check if either manual control is pressed
    pub fn any_manual(&self) -> bool {
        self.up || self.down
    }

    /// Check if either limit switch is active
    pub fn any_limit(&self) -> bool {
        self.left_limit || self.right_limit
    }

    /// Limit switch state for one side
    pub fn limit(&self, motor: Motor) -> bool {
        match motor {
            Motor::Left => self.left_limit,
            Motor::Right => self.right_limit,
        }
    }
}

/// Errors reported by a switch sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// An input line could not be read
    ReadFault,
}

/// Source of switch snapshots
///
/// Called once per tick. Must have bounded latency and no side effects
/// beyond the read itself.
pub trait SwitchSampler {
    fn sample(&mut self) -> Result<SwitchSnapshot, SensorError>;
}
