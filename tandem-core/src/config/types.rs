//! Controller configuration
//!
//! There is no runtime configuration surface. These values are fixed at
//! compile time through [`ControllerConfig::DEFAULT`]; the struct exists so
//! tests and hardened builds can pick different constants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::controller::TickPace;

/// Settle window length in ticks
pub const SETTLE_TICKS: u16 = 10;

/// Correction budget in ticks
///
/// 750 ticks at 1 ms is 0.75 s. Older design notes quote about a fifth of a
/// second; this constant is the one the hardware was validated with.
pub const CORRECTION_BUDGET_TICKS: u16 = 750;

/// Nominal period between decision ticks (ms)
pub const TICK_PERIOD_MS: u32 = 1;

/// Period between ticks while faulted (ms)
pub const FAULT_PERIOD_MS: u32 = 1000;

/// What manual drive does when neither control is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IdlePolicy {
    /// Issue no command; the previous output stays asserted
    #[default]
    Hold,
    /// Command both motors off
    ForceOff,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Correction budget must be at least one tick
    ZeroCorrectionBudget,
    /// Tick periods must be nonzero
    ZeroTickPeriod,
}

/// Controller timing constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    /// Ticks of forced-off output after a transition
    pub settle_ticks: u16,
    /// Maximum active ticks of one correction run
    pub correction_budget_ticks: u16,
    /// Tick period during normal operation (ms)
    pub tick_period_ms: u32,
    /// Tick period while faulted (ms)
    pub fault_period_ms: u32,
    /// Manual-drive behavior with no control pressed
    pub idle_policy: IdlePolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ControllerConfig {
    pub const DEFAULT: Self = Self {
        settle_ticks: SETTLE_TICKS,
        correction_budget_ticks: CORRECTION_BUDGET_TICKS,
        tick_period_ms: TICK_PERIOD_MS,
        fault_period_ms: FAULT_PERIOD_MS,
        idle_policy: IdlePolicy::Hold,
    };

    /// Default timing with idle output forced off
    pub const fn hardened() -> Self {
        Self {
            idle_policy: IdlePolicy::ForceOff,
            ..Self::DEFAULT
        }
    }

    /// Check the constants describe a usable controller
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.correction_budget_ticks == 0 {
            return Err(ConfigError::ZeroCorrectionBudget);
        }
        if self.tick_period_ms == 0 || self.fault_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        Ok(())
    }

    /// Wait time in ms before the next tick
    pub fn pace_ms(&self, pace: TickPace) -> u32 {
        match pace {
            TickPace::Normal => self.tick_period_ms,
            TickPace::Faulted => self.fault_period_ms,
        }
    }
}
