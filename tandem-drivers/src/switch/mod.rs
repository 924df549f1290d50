//! Switch sampler implementations

pub mod gpio;

pub use gpio::{GpioSwitchSampler, SwitchConfig, SwitchInputs};
