//! Fault latch
//!
//! Detects contradictory input and latches a terminal fault. Nothing in
//! this crate clears the latch; only a restart of the controller does.

use crate::traits::SwitchSnapshot;

/// Reason the latch tripped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Both limit switches active on the same tick
    SimultaneousLimit,
    /// Up and down pressed on the same tick
    SimultaneousCommand,
    /// A correction used its full budget and the limit switch never cleared
    CorrectionTimeout,
    /// Switch sampler or motor driver reported a hardware error
    IoFault,
}

/// Safety condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// Motion permitted
    Ok,
    /// Latched; all motion suppressed
    Fault(FaultKind),
}

impl SafetyStatus {
    pub fn is_fault(&self) -> bool {
        matches!(self, SafetyStatus::Fault(_))
    }
}

/// Monotonic fault latch
///
/// Holds the first fault that tripped it. Later faults do not overwrite
/// the recorded kind.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultLatch {
    kind: Option<FaultKind>,
}

impl FaultLatch {
    /// Create an untripped latch
    pub const fn new() -> Self {
        Self { kind: None }
    }

    /// Classify a snapshot without touching the latch
    ///
    /// Limit switches are checked before the manual controls.
    fn detect(snapshot: &SwitchSnapshot) -> Option<FaultKind> {
        if snapshot.left_limit && snapshot.right_limit {
            return Some(FaultKind::SimultaneousLimit);
        }
        if snapshot.up && snapshot.down {
            return Some(FaultKind::SimultaneousCommand);
        }
        None
    }

    /// Inspect a snapshot, tripping the latch on contradictory input
    pub fn check(&mut self, snapshot: &SwitchSnapshot) -> SafetyStatus {
        if let Some(kind) = Self::detect(snapshot) {
            self.trip(kind);
        }
        self.status()
    }

    /// Trip the latch
    ///
    /// Returns `true` if this call tripped it, `false` if it was already
    /// tripped.
    pub fn trip(&mut self, kind: FaultKind) -> bool {
        if self.kind.is_some() {
            return false;
        }
        self.kind = Some(kind);
        true
    }

    /// Check if the latch has tripped
    pub fn is_tripped(&self) -> bool {
        self.kind.is_some()
    }

    /// Get the fault that tripped the latch
    pub fn kind(&self) -> Option<FaultKind> {
        self.kind
    }

    /// Current status
    pub fn status(&self) -> SafetyStatus {
        match self.kind {
            Some(kind) => SafetyStatus::Fault(kind),
            None => SafetyStatus::Ok,
        }
    }
}
