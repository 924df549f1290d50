//! Control loop task
//!
//! Samples the switches, runs one controller tick, applies the command to
//! the relays and waits for the next tick. Normal ticks follow a fixed
//! ticker; once faulted the loop slows to the fault period.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Ticker, Timer};

use tandem_core::controller::TickPace;
use tandem_core::state::Event;
use tandem_core::traits::Motor;
use tandem_core::Controller;
use tandem_drivers::motor::RelayMotorDriver;
use tandem_drivers::switch::GpioSwitchSampler;

use crate::channels::STATUS;

pub type BoardSampler = GpioSwitchSampler<Input<'static>>;
pub type BoardMotors = RelayMotorDriver<Output<'static>>;

/// Controller task - one decision per tick
#[embassy_executor::task]
pub async fn controller_task(
    mut controller: Controller,
    mut sampler: BoardSampler,
    mut motors: BoardMotors,
) {
    info!("Controller task started");

    let config = *controller.config();
    let mut ticker = Ticker::every(Duration::from_millis(config.tick_period_ms as u64));

    loop {
        let outcome = controller.step(&mut sampler, &mut motors);

        for event in outcome.events.iter() {
            log_event(event);
        }
        if let Some(cmd) = outcome.command {
            trace!("{:?}: {:?}", outcome.stage, cmd);
        }

        STATUS.signal(controller.status());

        match outcome.pace {
            TickPace::Normal => ticker.next().await,
            TickPace::Faulted => {
                Timer::after_millis(config.pace_ms(TickPace::Faulted) as u64).await
            }
        }
    }
}

fn log_event(event: &Event) {
    match event {
        Event::CorrectionStarted(Motor::Left) => info!("beginning left correction"),
        Event::CorrectionStarted(Motor::Right) => info!("beginning right correction"),
        Event::CorrectionFinished(motor) => info!("{:?} correction complete", motor),
        Event::FaultTripped(kind) => {
            error!("Fault latched: {:?}; motion disabled until restart", kind)
        }
        Event::Faulted(kind) => error!("FAULT: {:?}", kind),
    }
}
