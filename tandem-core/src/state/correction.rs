//! Correction sequencer
//!
//! When one limit switch closes, the actuator pair has drifted apart. The
//! sequencer drives the motor on that side inward for a bounded number of
//! ticks to bring the pair back together. It only ever drives `In`.
//!
//! ```text
//! Idle ──limit──▶ Correcting(motor, budget) ──n reaches 0──▶ Idle
//!                      │  ▲                        │
//!                 no manual press                  └─ limit still set ─▶ Fault
//!                 (paused, n kept)
//! ```

use crate::traits::{Motor, SwitchSnapshot};

/// Correction progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CorrectionState {
    /// No correction in progress
    #[default]
    Idle,
    /// Driving `motor` inward with `ticks_remaining` of budget left
    Correcting { motor: Motor, ticks_remaining: u16 },
}

impl CorrectionState {
    /// Motor being corrected, if any
    pub fn active_motor(&self) -> Option<Motor> {
        match self {
            CorrectionState::Idle => None,
            CorrectionState::Correcting { motor, .. } => Some(*motor),
        }
    }

    /// Budget left (0 when idle)
    pub fn ticks_remaining(&self) -> u16 {
        match self {
            CorrectionState::Idle => 0,
            CorrectionState::Correcting {
                ticks_remaining, ..
            } => *ticks_remaining,
        }
    }
}

/// Result of advancing an active correction by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CorrectionStep {
    /// Drive the motor inward this tick
    Drive(Motor),
    /// No manual control held; stop without spending budget
    Paused(Motor),
    /// Budget spent and both limit switches clear
    Finished(Motor),
    /// Budget spent but a limit switch is still active
    TimedOut(Motor),
}

/// Timed self-correction state machine
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CorrectionSequencer {
    state: CorrectionState,
    budget: u16,
}

impl CorrectionSequencer {
    /// Create an idle sequencer with the given budget in ticks
    pub fn new(budget: u16) -> Self {
        Self {
            state: CorrectionState::Idle,
            budget,
        }
    }

    pub fn state(&self) -> CorrectionState {
        self.state
    }

    /// Check if a correction is in progress
    pub fn is_active(&self) -> bool {
        !matches!(self.state, CorrectionState::Idle)
    }

    /// Start a correction if idle and a limit switch is active
    ///
    /// Returns the motor being corrected. The left side wins if both
    /// switches are set; callers reject that case as a fault first.
    pub fn try_start(&mut self, snapshot: &SwitchSnapshot) -> Option<Motor> {
        if self.is_active() {
            return None;
        }
        let motor = Motor::ALL.into_iter().find(|m| snapshot.limit(*m))?;
        self.state = CorrectionState::Correcting {
            motor,
            ticks_remaining: self.budget,
        };
        Some(motor)
    }

    /// Advance an active correction by one tick
    ///
    /// Returns `None` when idle.
    pub fn advance(&mut self, snapshot: &SwitchSnapshot) -> Option<CorrectionStep> {
        let CorrectionState::Correcting {
            motor,
            ticks_remaining,
        } = self.state
        else {
            return None;
        };

        if !snapshot.any_manual() {
            return Some(CorrectionStep::Paused(motor));
        }

        let left = ticks_remaining.saturating_sub(1);
        if left > 0 {
            self.state = CorrectionState::Correcting {
                motor,
                ticks_remaining: left,
            };
            return Some(CorrectionStep::Drive(motor));
        }

        self.state = CorrectionState::Idle;
        if snapshot.any_limit() {
            Some(CorrectionStep::TimedOut(motor))
        } else {
            Some(CorrectionStep::Finished(motor))
        }
    }

    /// Drop any correction in progress
    pub fn cancel(&mut self) {
        self.state = CorrectionState::Idle;
    }
}
