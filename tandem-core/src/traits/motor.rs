//! Motor command types and the motor driver trait
//!
//! The core never addresses individual relays. It hands one
//! [`MotorCommand`] per tick to a [`MotorDriver`], which owns the
//! mapping onto physical outputs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the two actuator motors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Motor {
    Left,
    Right,
}

impl Motor {
    /// Both motors, in output order
    pub const ALL: [Motor; 2] = [Motor::Left, Motor::Right];
}

/// Actuator travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Motor stopped, both relay lines released
    #[default]
    Off,
    /// Retract (lowers the chair)
    In,
    /// Extend (raises the chair)
    Out,
}

impl Direction {
    /// Check if this direction drives the motor
    pub fn is_moving(self) -> bool {
        !matches!(self, Direction::Off)
    }
}

/// Set of motors a command applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotorSet {
    left: bool,
    right: bool,
}

impl MotorSet {
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };
    pub const LEFT: Self = Self {
        left: true,
        right: false,
    };
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
    };
    pub const BOTH: Self = Self {
        left: true,
        right: true,
    };

    /// Set holding a single motor
    pub const fn only(motor: Motor) -> Self {
        match motor {
            Motor::Left => Self::LEFT,
            Motor::Right => Self::RIGHT,
        }
    }

    /// Check if the set contains a motor
    pub fn contains(&self, motor: Motor) -> bool {
        match motor {
            Motor::Left => self.left,
            Motor::Right => self.right,
        }
    }

    /// Check if no motor is selected
    pub fn is_empty(&self) -> bool {
        !self.left && !self.right
    }
}

/// Command for one tick: a direction applied to a set of motors
///
/// Motors outside `selection` are always driven `Off` by the same call,
/// so a driver never keeps a stale direction on the unselected motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotorCommand {
    pub selection: MotorSet,
    pub direction: Direction,
}

impl MotorCommand {
    /// Both motors stopped
    pub const fn all_off() -> Self {
        Self {
            selection: MotorSet::BOTH,
            direction: Direction::Off,
        }
    }

    /// Drive both motors in one direction
    pub const fn both(direction: Direction) -> Self {
        Self {
            selection: MotorSet::BOTH,
            direction,
        }
    }

    /// Drive a single motor; the other one is forced off
    pub const fn single(motor: Motor, direction: Direction) -> Self {
        Self {
            selection: MotorSet::only(motor),
            direction,
        }
    }

    /// Direction a given motor receives from this command
    pub fn direction_for(&self, motor: Motor) -> Direction {
        if self.selection.contains(motor) {
            self.direction
        } else {
            Direction::Off
        }
    }

    /// Check if this command stops every motor
    pub fn is_stop(&self) -> bool {
        self.selection.is_empty() || !self.direction.is_moving()
    }
}

/// Errors reported by a motor driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// An output line could not be driven
    OutputFault,
}

/// Motor driver for the actuator pair
///
/// Implementations must be idempotent, must never assert both the in and
/// out lines of one motor at the same time, and must drive every motor
/// outside the selection to `Off` within the same call.
pub trait MotorDriver {
    /// Apply a command to the motor pair
    fn command(&mut self, cmd: MotorCommand) -> Result<(), MotorError>;

    /// Stop both motors
    fn stop_all(&mut self) -> Result<(), MotorError> {
        self.command(MotorCommand::all_off())
    }
}
