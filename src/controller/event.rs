//! Inputs to and notifications from the controller.

use crate::core::{Phase, PressOutcome, SignalAspect};
use serde::{Deserialize, Serialize};

/// Notification emitted whenever a phase is entered.
///
/// `duration` is always the phase's tabulated duration; drivers count down
/// exactly this value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PhaseEntered {
    /// Phase that was left, `None` for the notification emitted by `initialize()`.
    pub from: Option<Phase>,
    pub phase: Phase,
    pub duration: u32,
    pub signals: SignalAspect,
}

impl PhaseEntered {
    pub(crate) fn new(from: Option<Phase>, phase: Phase) -> Self {
        Self {
            from,
            phase,
            duration: phase.duration(),
            signals: phase.signals(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.phase.name()
    }
}

/// Queued input for collaborators that funnel everything through one channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ControllerEvent {
    TimeExpired,
    ButtonPressed,
}

/// Result of [`Controller::handle_event`](crate::controller::Controller::handle_event).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControllerResponse {
    Entered(PhaseEntered),
    Pressed(PressOutcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_takes_duration_from_the_table() {
        for phase in Phase::ALL {
            let event = PhaseEntered::new(None, phase);
            assert_eq!(event.duration, phase.duration());
            assert_eq!(event.signals, phase.signals());
            assert_eq!(event.name(), phase.name());
        }
    }

    #[test]
    fn notification_serializes_with_phase_names() {
        let event = PhaseEntered::new(Some(Phase::WalkPrep), Phase::Walk);
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["from"], "WALK_PREP");
        assert_eq!(json["phase"], "WALK");
        assert_eq!(json["duration"], 5);
    }
}
