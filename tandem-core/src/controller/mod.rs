//! Tick dispatch
//!
//! [`Controller`] owns all controller state and evaluates the stages once
//! per tick in a fixed order:
//!
//! 1. Fault latch
//! 2. Settle gate
//! 3. Correction sequencer
//! 4. Manual transition check (re-arms the settle gate)
//! 5. Manual drive
//!
//! The first stage that claims the tick decides the command; the rest are
//! skipped.

pub mod manual;

#[cfg(test)]
mod proptests;

use heapless::Vec;

use crate::config::{ConfigError, ControllerConfig};
use crate::safety::{FaultKind, FaultLatch, SafetyStatus};
use crate::state::{CorrectionSequencer, CorrectionState, CorrectionStep, Event, SettleGate};
use crate::traits::{Direction, MotorCommand, MotorDriver, SwitchSampler, SwitchSnapshot};

/// Maximum events a single tick can report
pub const MAX_TICK_EVENTS: usize = 4;

/// Stage that decided a tick's command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// Latch tripped; everything off
    Fault,
    /// Settle window open, or a manual transition just armed it
    Settle,
    /// Correction started, running, paused or ending
    Correction,
    /// Manual controls evaluated
    Manual,
}

/// How long the caller waits before the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickPace {
    /// Normal control period
    Normal,
    /// Long period used once faulted
    Faulted,
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// Stage that claimed the tick
    pub stage: Stage,
    /// Command to hand to the motor driver (`None` = leave outputs as-is)
    pub command: Option<MotorCommand>,
    /// Events produced this tick
    pub events: Vec<Event, MAX_TICK_EVENTS>,
    /// Pacing before the next tick
    pub pace: TickPace,
}

/// Snapshot of controller state for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerStatus {
    /// Stage of the most recent tick (`Settle` before the first tick)
    pub stage: Stage,
    /// Settle ticks still to run
    pub settle_ticks_remaining: u16,
    /// Correction progress
    pub correction: CorrectionState,
    /// Latched fault, if any
    pub fault: Option<FaultKind>,
    /// Ticks evaluated since start (wrapping)
    pub ticks: u32,
}

/// Interlocked controller for the actuator pair
#[derive(Debug, Clone)]
pub struct Controller {
    config: ControllerConfig,
    latch: FaultLatch,
    settle: SettleGate,
    correction: CorrectionSequencer,
    last_stage: Stage,
    ticks: u32,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Create a controller with the compiled-in constants
    ///
    /// The settle gate starts armed, so the first ticks are always off.
    pub fn new() -> Self {
        Self::build(ControllerConfig::DEFAULT)
    }

    /// Create a controller with explicit constants
    ///
    /// The config is validated first; a controller never runs with a
    /// config that could disable correction or pacing.
    pub fn with_config(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ControllerConfig) -> Self {
        Self {
            config,
            latch: FaultLatch::new(),
            settle: SettleGate::new(config.settle_ticks),
            correction: CorrectionSequencer::new(config.correction_budget_ticks),
            last_stage: Stage::Settle,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Check if the fault latch has tripped
    pub fn is_faulted(&self) -> bool {
        self.latch.status().is_fault()
    }

    /// Latched fault, if any
    pub fn fault(&self) -> Option<FaultKind> {
        self.latch.kind()
    }

    pub fn correction(&self) -> CorrectionState {
        self.correction.state()
    }

    pub fn status(&self) -> ControllerStatus {
        ControllerStatus {
            stage: self.last_stage,
            settle_ticks_remaining: self.settle.remaining(),
            correction: self.correction.state(),
            fault: self.latch.kind(),
            ticks: self.ticks,
        }
    }

    /// Evaluate one tick against a switch snapshot
    pub fn tick(&mut self, snapshot: SwitchSnapshot) -> TickOutcome {
        let mut events = Vec::new();
        let (stage, command) = self.dispatch(&snapshot, &mut events);
        self.finish(stage, command, events)
    }

    /// Sample, evaluate and apply one tick
    ///
    /// A sampler or driver error trips [`FaultKind::IoFault`]. After a
    /// driver error both motors are stopped on a best-effort basis.
    pub fn step<S, D>(&mut self, sampler: &mut S, driver: &mut D) -> TickOutcome
    where
        S: SwitchSampler,
        D: MotorDriver,
    {
        let mut outcome = match sampler.sample() {
            Ok(snapshot) => self.tick(snapshot),
            Err(_) => {
                let mut events = Vec::new();
                self.trip(FaultKind::IoFault, &mut events);
                self.finish(Stage::Fault, Some(MotorCommand::all_off()), events)
            }
        };

        let Some(cmd) = outcome.command else {
            return outcome;
        };
        if driver.command(cmd).is_ok() {
            return outcome;
        }

        // Best effort; the latch keeps commanding off on every later tick
        let _ = driver.stop_all();
        let was_faulted = self.latch.is_tripped();
        self.trip(FaultKind::IoFault, &mut outcome.events);
        if !was_faulted {
            let _ = outcome.events.push(Event::Faulted(FaultKind::IoFault));
        }
        outcome.stage = Stage::Fault;
        outcome.command = Some(MotorCommand::all_off());
        outcome.pace = TickPace::Faulted;
        self.last_stage = Stage::Fault;
        outcome
    }

    fn dispatch(
        &mut self,
        snapshot: &SwitchSnapshot,
        events: &mut Vec<Event, MAX_TICK_EVENTS>,
    ) -> (Stage, Option<MotorCommand>) {
        let off = Some(MotorCommand::all_off());

        let was_tripped = self.latch.is_tripped();
        if let SafetyStatus::Fault(kind) = self.latch.check(snapshot) {
            if !was_tripped {
                self.latched(kind, events);
            }
            return (Stage::Fault, off);
        }

        if self.settle.tick() {
            return (Stage::Settle, off);
        }

        if let Some(motor) = self.correction.try_start(snapshot) {
            self.settle.arm();
            let _ = events.push(Event::CorrectionStarted(motor));
            return (Stage::Correction, off);
        }

        if let Some(step) = self.correction.advance(snapshot) {
            let command = match step {
                CorrectionStep::Drive(motor) => MotorCommand::single(motor, Direction::In),
                CorrectionStep::Paused(_) => MotorCommand::all_off(),
                CorrectionStep::Finished(motor) => {
                    let _ = events.push(Event::CorrectionFinished(motor));
                    MotorCommand::all_off()
                }
                CorrectionStep::TimedOut(_) => {
                    self.trip(FaultKind::CorrectionTimeout, events);
                    MotorCommand::all_off()
                }
            };
            return (Stage::Correction, Some(command));
        }

        if self.settle.check_transition(snapshot) {
            return (Stage::Settle, off);
        }

        (
            Stage::Manual,
            manual::evaluate(snapshot, self.config.idle_policy),
        )
    }

    fn trip(&mut self, kind: FaultKind, events: &mut Vec<Event, MAX_TICK_EVENTS>) {
        if self.latch.trip(kind) {
            self.latched(kind, events);
        }
    }

    /// Bookkeeping for a latch that just tripped
    fn latched(&mut self, kind: FaultKind, events: &mut Vec<Event, MAX_TICK_EVENTS>) {
        self.correction.cancel();
        let _ = events.push(Event::FaultTripped(kind));
    }

    fn finish(
        &mut self,
        stage: Stage,
        command: Option<MotorCommand>,
        mut events: Vec<Event, MAX_TICK_EVENTS>,
    ) -> TickOutcome {
        self.ticks = self.ticks.wrapping_add(1);
        self.last_stage = stage;

        let pace = match self.latch.status() {
            SafetyStatus::Fault(kind) => {
                let _ = events.push(Event::Faulted(kind));
                TickPace::Faulted
            }
            SafetyStatus::Ok => TickPace::Normal,
        };

        TickOutcome {
            stage,
            command,
            events,
            pace,
        }
    }
}
