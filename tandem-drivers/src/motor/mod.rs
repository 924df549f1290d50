//! Motor driver implementations
//!
//! Each actuator motor is switched by a pair of relays, one per travel
//! direction.

pub mod relay;

#[cfg(test)]
mod proptests;

pub use relay::{RelayConfig, RelayMotorDriver, RelayOutputs, RelayPair};
