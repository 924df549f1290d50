//! Inter-task communication channels
//!
//! Uses embassy-sync primitives for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use tandem_core::ControllerStatus;

/// Latest controller status (updated by the controller every tick)
pub static STATUS: Signal<CriticalSectionRawMutex, ControllerStatus> = Signal::new();
