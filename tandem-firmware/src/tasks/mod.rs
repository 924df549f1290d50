//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod controller;
pub mod status_led;

pub use controller::controller_task;
pub use status_led::status_led_task;
