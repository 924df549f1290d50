//! Collaborator traits
//!
//! These traits define the interface between the decision core and the
//! hardware-specific switch and relay implementations.

pub mod motor;
pub mod switches;

pub use motor::{Direction, Motor, MotorCommand, MotorDriver, MotorError, MotorSet};
pub use switches::{SensorError, SwitchSampler, SwitchSnapshot};
