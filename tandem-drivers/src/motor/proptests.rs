//! Controller output replayed through the relay driver

use proptest::prelude::*;

use tandem_core::traits::{MotorDriver, SwitchSnapshot};
use tandem_core::Controller;

use super::{RelayConfig, RelayMotorDriver, RelayPair};
use crate::mock::{new_log, MockPin};

fn held_snapshot() -> impl Strategy<Value = (SwitchSnapshot, u16)> {
    (
        prop_oneof![
            30 => Just((false, false)),
            30 => Just((true, false)),
            40 => Just((false, true)),
            1 => Just((true, true)),
        ],
        prop::bool::weighted(0.08),
        prop::bool::weighted(0.08),
        1u16..800,
    )
        .prop_map(|((up, down), left_limit, right_limit, hold)| {
            (
                SwitchSnapshot {
                    up,
                    down,
                    left_limit,
                    right_limit,
                },
                hold,
            )
        })
}

fn input_sequence() -> impl Strategy<Value = Vec<SwitchSnapshot>> {
    prop::collection::vec(held_snapshot(), 1..16).prop_map(|segments| {
        segments
            .into_iter()
            .flat_map(|(snap, hold)| core::iter::repeat(snap).take(hold as usize))
            .collect()
    })
}

proptest! {
    #[test]
    fn relay_lines_mutually_exclusive(
        inputs in input_sequence(),
        active_high in any::<bool>(),
    ) {
        let log = new_log();
        let pins = [
            MockPin::new(0, &log),
            MockPin::new(1, &log),
            MockPin::new(2, &log),
            MockPin::new(3, &log),
        ];
        let mut driver = RelayMotorDriver::new(
            RelayPair::new(pins[0].clone(), pins[1].clone()),
            RelayPair::new(pins[2].clone(), pins[3].clone()),
            RelayConfig { active_high },
        )
        .unwrap();
        let mut ctrl = Controller::new();

        for snap in inputs {
            if let Some(cmd) = ctrl.tick(snap).command {
                prop_assert!(driver.command(cmd).is_ok());
            }
            let out = driver.outputs();
            prop_assert!(!(out.left_in && out.left_out));
            prop_assert!(!(out.right_in && out.right_out));
        }

        // Every intermediate pin state, not just the state after each tick
        let mut energized = [false; 4];
        for (id, level) in log.borrow().iter() {
            energized[*id as usize] = *level == active_high;
            prop_assert!(!(energized[0] && energized[1]));
            prop_assert!(!(energized[2] && energized[3]));
        }
    }
}
