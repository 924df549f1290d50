//! Board-agnostic decision core for the recliner controller
//!
//! This crate contains all logic that does not depend on specific
//! hardware:
//!
//! - Collaborator traits (switch sampler, motor driver)
//! - Fault latch
//! - Settle gate and correction sequencer
//! - Tick dispatch (`Controller`)
//! - Compile-time configuration
//!
//! Everything is driven by [`controller::Controller::tick`], which takes one
//! switch snapshot and returns the command, events and pacing for that tick.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod safety;
pub mod state;
pub mod traits;

pub use controller::{Controller, ControllerStatus, Stage, TickOutcome};
