//! Property tests over long random input sequences

use proptest::prelude::*;

use super::{Controller, Stage};
use crate::config::ControllerConfig;
use crate::safety::FaultKind;
use crate::state::{CorrectionState, Event};
use crate::traits::{Direction, Motor, MotorCommand, SwitchSnapshot};

/// Manual controls, with both pressed kept rare so runs get past the
/// first few segments
fn manual_controls() -> impl Strategy<Value = (bool, bool)> {
    prop_oneof![
        30 => Just((false, false)),
        30 => Just((true, false)),
        40 => Just((false, true)),
        1 => Just((true, true)),
    ]
}

/// Switch state held for a number of ticks
fn held_snapshot() -> impl Strategy<Value = (SwitchSnapshot, u16)> {
    (
        manual_controls(),
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
    fn fault_is_monotonic(inputs in input_sequence()) {
        let mut ctrl = Controller::new();
        let mut faulted = false;

        for snap in inputs {
            let out = ctrl.tick(snap);
            if faulted {
                prop_assert_eq!(out.stage, Stage::Fault);
                prop_assert_eq!(out.command, Some(MotorCommand::all_off()));
            }
            faulted = ctrl.is_faulted();
            if faulted {
                prop_assert!(out.command.map_or(false, |c| c.is_stop()));
                prop_assert!(out.events.iter().any(|e| matches!(e, Event::Faulted(_))));
            }
        }
    }

    #[test]
    fn settle_window_forces_off(inputs in input_sequence()) {
        let mut ctrl = Controller::new();

        for snap in inputs {
            let settling = ctrl.status().settle_ticks_remaining > 0;
            let out = ctrl.tick(snap);
            if settling {
                prop_assert_eq!(out.command, Some(MotorCommand::all_off()));
            }
        }
    }

    #[test]
    fn correction_never_drives_out(inputs in input_sequence()) {
        let mut ctrl = Controller::new();

        for snap in inputs {
            let active_before = ctrl.correction().active_motor();
            let out = ctrl.tick(snap);
            let active = active_before.or(ctrl.correction().active_motor());
            if let (Some(motor), Some(cmd)) = (active, out.command) {
                prop_assert_ne!(cmd.direction, Direction::Out);
                for other in Motor::ALL.into_iter().filter(|m| *m != motor) {
                    prop_assert_eq!(cmd.direction_for(other), Direction::Off);
                }
            }
        }
    }

    #[test]
    fn correction_is_bounded(inputs in input_sequence()) {
        let budget = ControllerConfig::DEFAULT.correction_budget_ticks;
        let mut ctrl = Controller::new();
        let mut drive_ticks = 0u16;

        for snap in inputs {
            let out = ctrl.tick(snap);
            prop_assert!(ctrl.correction().ticks_remaining() <= budget);

            if out.stage == Stage::Correction && out.command.map_or(false, |c| !c.is_stop()) {
                drive_ticks += 1;
                prop_assert!(drive_ticks < budget);
            }

            if ctrl.correction() == CorrectionState::Idle {
                drive_ticks = 0;
            }

            if out.events.contains(&Event::FaultTripped(FaultKind::CorrectionTimeout)) {
                prop_assert!(ctrl.is_faulted());
            }
        }
    }

    #[test]
    fn no_direct_reversal(inputs in input_sequence()) {
        let mut ctrl = Controller::new();
        // Direction currently held on each motor; `None` commands keep it
        let mut applied = [Direction::Off; 2];

        for snap in inputs {
            let Some(cmd) = ctrl.tick(snap).command else {
                continue;
            };
            for (i, motor) in Motor::ALL.into_iter().enumerate() {
                let next = cmd.direction_for(motor);
                if applied[i].is_moving() && next.is_moving() {
                    prop_assert_eq!(next, applied[i]);
                }
                applied[i] = next;
            }
        }
    }
}
