//! Tandem - twin-actuator recliner controller firmware
//!
//! Main firmware binary for RP2040-based boards. Wires the switch inputs
//! and relay outputs to the decision core and runs the control loop.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use tandem_core::config::ControllerConfig;
use tandem_core::Controller;
use tandem_drivers::motor::{RelayConfig, RelayMotorDriver};
use tandem_drivers::switch::{GpioSwitchSampler, SwitchConfig};

mod board;
mod channels;
mod tasks;

use board::Board;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tandem firmware starting...");

    let p = embassy_rp::init(Default::default());
    let board = Board::new(p);
    info!("Pins configured");

    // Relays are released before anything else runs
    let motors = unwrap!(RelayMotorDriver::new(
        board.left_relays,
        board.right_relays,
        RelayConfig::default(),
    ));
    let sampler = GpioSwitchSampler::new(board.switches, SwitchConfig::default());
    info!("Relays released, switches ready");

    let config = ControllerConfig::DEFAULT;
    let controller = match Controller::with_config(config) {
        Ok(controller) => controller,
        Err(e) => {
            // Motors stay released; nothing is spawned
            error!("Invalid controller config: {:?}", e);
            loop {
                embassy_time::Timer::after_secs(60).await;
            }
        }
    };
    info!(
        "Controller config: settle={} ticks, correction budget={} ticks, tick={}ms",
        config.settle_ticks, config.correction_budget_ticks, config.tick_period_ms
    );

    // Spawn tasks
    spawner.spawn(tasks::status_led_task(board.led)).unwrap();
    spawner
        .spawn(tasks::controller_task(controller, sampler, motors))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
    }
}
