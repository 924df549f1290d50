//! GPIO switch sampler
//!
//! Reads the two manual controls and the two limit switches from digital
//! inputs and converts electrical levels to active-high logical values.
//! The switches are normally wired to ground with pull-ups, so they read
//! low when closed.

use embedded_hal::digital::InputPin;
use tandem_core::traits::{SensorError, SwitchSampler, SwitchSnapshot};

/// Input polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchConfig {
    /// A closed switch reads low (pull-up wiring)
    pub active_low: bool,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self { active_low: true }
    }
}

/// The four input pins
pub struct SwitchInputs<P> {
    pub up: P,
    pub down: P,
    pub left_limit: P,
    pub right_limit: P,
}

/// Switch sampler over `embedded-hal` input pins
pub struct GpioSwitchSampler<P> {
    inputs: SwitchInputs<P>,
    config: SwitchConfig,
}

impl<P: InputPin> GpioSwitchSampler<P> {
    pub fn new(inputs: SwitchInputs<P>, config: SwitchConfig) -> Self {
        Self { inputs, config }
    }

    fn read(pin: &mut P, active_low: bool) -> Result<bool, SensorError> {
        let result = if active_low {
            pin.is_low()
        } else {
            pin.is_high()
        };
        result.map_err(|_| SensorError::ReadFault)
    }
}

impl<P: InputPin> SwitchSampler for GpioSwitchSampler<P> {
    fn sample(&mut self) -> Result<SwitchSnapshot, SensorError> {
        let active_low = self.config.active_low;
        Ok(SwitchSnapshot {
            up: Self::read(&mut self.inputs.up, active_low)?,
            down: Self::read(&mut self.inputs.down, active_low)?,
            left_limit: Self::read(&mut self.inputs.left_limit, active_low)?,
            right_limit: Self::read(&mut self.inputs.right_limit, active_low)?,
        })
    }
}
