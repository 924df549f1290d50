//! Relay motor driver for the actuator pair
//!
//! This driver provides:
//! - One relay pair per motor (in line, out line)
//! - Break-before-make switching: the opposite line is released before
//!   the requested one is asserted
//! - Active-high or active-low relay boards
//!
//! # Usage
//!
//! ```ignore
//! let mut motors = RelayMotorDriver::new(
//!     RelayPair::new(left_in, left_out),
//!     RelayPair::new(right_in, right_out),
//!     RelayConfig::default(),
//! )?;
//!
//! // Once per tick:
//! motors.command(MotorCommand::single(Motor::Left, Direction::In))?;
//! ```
//!
//! # Safety
//!
//! The in and out lines of one motor are never asserted together. With the
//! usual NO/NC polarity-reversing wiring both lines closed would short the
//! supply through the motor.

use embedded_hal::digital::OutputPin;
use tandem_core::traits::{Direction, Motor, MotorCommand, MotorDriver, MotorError};

/// Relay board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayConfig {
    /// Relay coil is energized by a high output (true) or low output (false)
    pub active_high: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self { active_high: true }
    }
}

/// The two relay lines of one motor
pub struct RelayPair<P> {
    in_pin: P,
    out_pin: P,
}

impl<P: OutputPin> RelayPair<P> {
    pub fn new(in_pin: P, out_pin: P) -> Self {
        Self { in_pin, out_pin }
    }
}

/// Logical relay state (true = energized)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayOutputs {
    pub left_in: bool,
    pub left_out: bool,
    pub right_in: bool,
    pub right_out: bool,
}

/// Relay driver for both motors
pub struct RelayMotorDriver<P> {
    left: RelayPair<P>,
    right: RelayPair<P>,
    config: RelayConfig,
    /// Last direction applied to each motor, indexed [left, right]
    directions: [Direction; 2],
}

impl<P: OutputPin> RelayMotorDriver<P> {
    /// Create the driver and release every relay
    pub fn new(
        left: RelayPair<P>,
        right: RelayPair<P>,
        config: RelayConfig,
    ) -> Result<Self, MotorError> {
        let mut driver = Self {
            left,
            right,
            config,
            directions: [Direction::Off; 2],
        };
        for motor in Motor::ALL {
            driver.apply(motor, Direction::Off)?;
        }
        Ok(driver)
    }

    /// Last direction applied to a motor
    pub fn direction(&self, motor: Motor) -> Direction {
        self.directions[Self::index(motor)]
    }

    /// Logical relay state derived from the applied directions
    pub fn outputs(&self) -> RelayOutputs {
        let left = self.direction(Motor::Left);
        let right = self.direction(Motor::Right);
        RelayOutputs {
            left_in: left == Direction::In,
            left_out: left == Direction::Out,
            right_in: right == Direction::In,
            right_out: right == Direction::Out,
        }
    }

    fn index(motor: Motor) -> usize {
        match motor {
            Motor::Left => 0,
            Motor::Right => 1,
        }
    }

    fn pair(&mut self, motor: Motor) -> &mut RelayPair<P> {
        match motor {
            Motor::Left => &mut self.left,
            Motor::Right => &mut self.right,
        }
    }

    fn drive_line(pin: &mut P, energized: bool, active_high: bool) -> Result<(), MotorError> {
        let result = if energized == active_high {
            pin.set_high()
        } else {
            pin.set_low()
        };
        result.map_err(|_| MotorError::OutputFault)
    }

    /// Apply a direction to one motor
    ///
    /// The recorded direction is `Off` while the lines are switching and
    /// only takes the new value once both writes succeed.
    fn apply(&mut self, motor: Motor, direction: Direction) -> Result<(), MotorError> {
        let active_high = self.config.active_high;
        self.directions[Self::index(motor)] = Direction::Off;
        let pair = self.pair(motor);

        match direction {
            Direction::Off => {
                Self::drive_line(&mut pair.in_pin, false, active_high)?;
                Self::drive_line(&mut pair.out_pin, false, active_high)?;
            }
            Direction::In => {
                Self::drive_line(&mut pair.out_pin, false, active_high)?;
                Self::drive_line(&mut pair.in_pin, true, active_high)?;
            }
            Direction::Out => {
                Self::drive_line(&mut pair.in_pin, false, active_high)?;
                Self::drive_line(&mut pair.out_pin, true, active_high)?;
            }
        }

        self.directions[Self::index(motor)] = direction;
        Ok(())
    }
}

impl<P: OutputPin> MotorDriver for RelayMotorDriver<P> {
    fn command(&mut self, cmd: MotorCommand) -> Result<(), MotorError> {
        // Stop the unselected motor before driving the selected one
        for motor in Motor::ALL {
            if !cmd.selection.contains(motor) {
                self.apply(motor, Direction::Off)?;
            }
        }
        for motor in Motor::ALL {
            if cmd.selection.contains(motor) {
                self.apply(motor, cmd.direction)?;
            }
        }
        Ok(())
    }
}
