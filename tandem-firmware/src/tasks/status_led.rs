//! Status LED task
//!
//! - Slow blink: running normally
//! - Fast blink: correction in progress
//! - Solid on: faulted

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Instant, Timer};

use tandem_core::ControllerStatus;

use crate::channels::STATUS;

const SLOW_BLINK_MS: u64 = 500;
const FAST_BLINK_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
enum LedPattern {
    SlowBlink,
    FastBlink,
    Solid,
}

impl LedPattern {
    fn from_status(status: &ControllerStatus) -> Self {
        if status.fault.is_some() {
            LedPattern::Solid
        } else if status.correction.active_motor().is_some() {
            LedPattern::FastBlink
        } else {
            LedPattern::SlowBlink
        }
    }
}

#[embassy_executor::task]
pub async fn status_led_task(mut led: Output<'static>) {
    info!("Status LED task started");

    let mut pattern = LedPattern::SlowBlink;
    let mut next_toggle = Instant::now();

    loop {
        let period_ms = match pattern {
            LedPattern::SlowBlink => SLOW_BLINK_MS,
            LedPattern::FastBlink => FAST_BLINK_MS,
            LedPattern::Solid => {
                led.set_high();
                // Fault is terminal; nothing left to show
                loop {
                    Timer::after_secs(60).await;
                }
            }
        };

        // Status arrives every tick; toggles run off a fixed deadline
        match select(STATUS.wait(), Timer::at(next_toggle)).await {
            Either::First(status) => {
                let next = LedPattern::from_status(&status);
                if next != pattern {
                    debug!("LED pattern {:?} -> {:?}", pattern, next);
                    pattern = next;
                }
            }
            Either::Second(()) => {
                led.toggle();
                next_toggle += Duration::from_millis(period_ms);
            }
        }
    }
}
