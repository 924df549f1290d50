//! Debounce / settle gate
//!
//! After any state-changing event the gate holds every output off for a
//! fixed number of ticks. This absorbs switch bounce and gives a stopped
//! motor time to coast and its relays time to release before a new
//! direction is commanded.

use crate::traits::SwitchSnapshot;

/// Settle countdown plus the last stable manual switch state
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettleGate {
    /// Ticks of forced-off output still to run
    remaining: u16,
    /// Value `remaining` is reset to when armed
    length: u16,
    /// Up control as of the last stable tick
    prev_up: bool,
    /// Down control as of the last stable tick
    prev_down: bool,
}

impl SettleGate {
    /// Create a gate that is already armed, as at power-on
    pub fn new(length: u16) -> Self {
        Self {
            remaining: length,
            length,
            prev_up: false,
            prev_down: false,
        }
    }

    /// Restart the settle window
    pub fn arm(&mut self) {
        self.remaining = self.length;
    }

    /// Check if the window is open
    pub fn is_settling(&self) -> bool {
        self.remaining > 0
    }

    /// Ticks left in the window
    pub fn remaining(&self) -> u16 {
        self.remaining
    }

    /// Consume one tick of the window
    ///
    /// Returns `true` if the gate claimed this tick.
    pub fn tick(&mut self) -> bool {
        if !self.is_settling() {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Record a manual switch transition
    ///
    /// If up/down differ from the last stable values, the new values are
    /// stored, the window is armed and `true` is returned.
    pub fn check_transition(&mut self, snapshot: &SwitchSnapshot) -> bool {
        if snapshot.up == self.prev_up && snapshot.down == self.prev_down {
            return false;
        }
        self.prev_up = snapshot.up;
        self.prev_down = snapshot.down;
        self.arm();
        true
    }
}
