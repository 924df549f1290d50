//! Board pin assignment
//!
//! Raspberry Pi Pico wiring:
//!
//! ```text
//! GPIO2  up switch          (to GND, pulled up)
//! GPIO3  down switch        (to GND, pulled up)
//! GPIO4  left limit switch  (to GND, pulled up)
//! GPIO5  right limit switch (to GND, pulled up)
//! GPIO6  left motor  IN relay
//! GPIO7  left motor  OUT relay
//! GPIO8  right motor IN relay
//! GPIO9  right motor OUT relay
//! GPIO25 on-board status LED
//! ```

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;

use tandem_drivers::motor::RelayPair;
use tandem_drivers::switch::SwitchInputs;

/// Configured board I/O
pub struct Board {
    pub switches: SwitchInputs<Input<'static>>,
    pub left_relays: RelayPair<Output<'static>>,
    pub right_relays: RelayPair<Output<'static>>,
    pub led: Output<'static>,
}

impl Board {
    /// Take the pins out of the peripheral set
    ///
    /// Relay outputs start low (released) so no motor moves before the
    /// controller runs.
    pub fn new(p: Peripherals) -> Self {
        let switches = SwitchInputs {
            up: Input::new(p.PIN_2, Pull::Up),
            down: Input::new(p.PIN_3, Pull::Up),
            left_limit: Input::new(p.PIN_4, Pull::Up),
            right_limit: Input::new(p.PIN_5, Pull::Up),
        };

        let left_relays = RelayPair::new(
            Output::new(p.PIN_6, Level::Low),
            Output::new(p.PIN_7, Level::Low),
        );
        let right_relays = RelayPair::new(
            Output::new(p.PIN_8, Level::Low),
            Output::new(p.PIN_9, Level::Low),
        );

        Self {
            switches,
            left_relays,
            right_relays,
            led: Output::new(p.PIN_25, Level::Low),
        }
    }
}
