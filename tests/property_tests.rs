//! Property-based tests for the controller.
//!
//! Random interleavings of button presses and expiries are replayed against
//! the controller and checked against the latch and sequencing rules.

use crosswalk::controller::{Controller, ControllerEvent, ControllerResponse};
use crosswalk::core::{next_phase, successor, PedestrianRequest, Phase};
use crosswalk::observer::TransitionLog;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_phase()(index in 0..7usize) -> Phase {
        Phase::ALL[index]
    }
}

fn arbitrary_event() -> impl Strategy<Value = ControllerEvent> {
    prop_oneof![
        3 => Just(ControllerEvent::TimeExpired),
        1 => Just(ControllerEvent::ButtonPressed),
    ]
}

proptest! {
    #[test]
    fn transition_is_deterministic(phase in arbitrary_phase(), pending in any::<bool>()) {
        let request = if pending { PedestrianRequest::Pending } else { PedestrianRequest::Idle };
        prop_assert_eq!(next_phase(phase, request), next_phase(phase, request));
    }

    #[test]
    fn successor_is_listed_in_table(phase in arbitrary_phase(), pending in any::<bool>()) {
        let request = if pending { PedestrianRequest::Pending } else { PedestrianRequest::Idle };
        prop_assert!(successor(phase).targets().contains(&next_phase(phase, request)));
    }

    #[test]
    fn every_step_follows_the_table(events in prop::collection::vec(arbitrary_event(), 0..200)) {
        let mut controller = Controller::new();
        controller.initialize();

        for event in events {
            let before = controller.current_phase();
            let pending = controller.has_pedestrian_request();
            match controller.handle_event(event) {
                ControllerResponse::Entered(entered) => {
                    let request = if pending { PedestrianRequest::Pending } else { PedestrianRequest::Idle };
                    prop_assert_eq!(entered.from, Some(before));
                    prop_assert_eq!(entered.phase, next_phase(before, request));
                    prop_assert_eq!(entered.duration, entered.phase.duration());
                    prop_assert!(entered.signals.is_conflict_free());
                }
                ControllerResponse::Pressed(_) => {
                    prop_assert_eq!(controller.current_phase(), before);
                    prop_assert!(controller.has_pedestrian_request());
                }
            }
        }
    }

    #[test]
    fn latch_matches_press_since_last_walk(events in prop::collection::vec(arbitrary_event(), 0..200)) {
        let mut controller = Controller::new();
        controller.initialize();
        let mut pressed_since_walk = false;

        for event in events {
            match controller.handle_event(event) {
                ControllerResponse::Pressed(_) => pressed_since_walk = true,
                ControllerResponse::Entered(entered) if entered.phase == Phase::Walk => {
                    pressed_since_walk = false;
                }
                ControllerResponse::Entered(_) => {}
            }
            prop_assert_eq!(controller.has_pedestrian_request(), pressed_since_walk);
        }
    }

    #[test]
    fn one_walk_per_latch(events in prop::collection::vec(arbitrary_event(), 0..300)) {
        let log = TransitionLog::with_capacity(512);
        let mut controller = Controller::new().with_observer(Box::new(log.clone()));
        controller.initialize();

        // Number of times a press set an idle latch.
        let mut latches = 0u64;
        for event in events {
            if let ControllerResponse::Pressed(outcome) = controller.handle_event(event) {
                if outcome == crosswalk::PressOutcome::Latched {
                    latches += 1;
                }
            }
        }

        let outstanding = u64::from(controller.has_pedestrian_request());
        prop_assert_eq!(log.walk_count() + outstanding, latches);
    }

    #[test]
    fn pedestrian_phases_only_follow_car_red(events in prop::collection::vec(arbitrary_event(), 0..200)) {
        let log = TransitionLog::with_capacity(512);
        let mut controller = Controller::new().with_observer(Box::new(log.clone()));
        controller.initialize();

        for event in events {
            controller.handle_event(event);
        }

        for pair in log.path().windows(2) {
            if pair[1] == Phase::WalkPrep {
                prop_assert_eq!(pair[0], Phase::CarRed);
            }
            if pair[0] == Phase::WalkFinish {
                prop_assert_eq!(pair[1], Phase::CarRedYellow);
            }
        }
    }

    #[test]
    fn no_press_never_walks(expiries in 0..100usize) {
        let mut controller = Controller::new();
        controller.initialize();
        for _ in 0..expiries {
            let entered = controller.timeout_expired();
            prop_assert!(!entered.phase.is_pedestrian_phase());
        }
    }

    #[test]
    fn phase_name_roundtrip(phase in arbitrary_phase()) {
        prop_assert_eq!(phase.name().parse::<Phase>().unwrap(), phase);
        let json = serde_json::to_string(&phase).unwrap();
        let back: Phase = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, phase);
    }
}
