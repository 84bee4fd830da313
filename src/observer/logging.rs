//! Observer that renders notifications through the `log` facade.

use super::PhaseObserver;
use crate::controller::PhaseEntered;
use crate::core::PressOutcome;

const TARGET: &str = "crosswalk::signals";

/// Logs every phase entry at `info` and button presses at `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingObserver;

impl PhaseObserver for LoggingObserver {
    fn on_phase_entered(&mut self, event: &PhaseEntered) {
        match event.from {
            Some(from) => log::info!(
                target: TARGET,
                "{} -> {} ({}) {}",
                from,
                event.phase,
                event.duration,
                event.signals
            ),
            None => log::info!(
                target: TARGET,
                "start {} ({}) {}",
                event.phase,
                event.duration,
                event.signals
            ),
        }
    }

    fn on_button_pressed(&mut self, outcome: PressOutcome) {
        match outcome {
            PressOutcome::Latched => log::debug!(target: TARGET, "pedestrian request latched"),
            PressOutcome::AlreadyPending => {
                log::debug!(target: TARGET, "pedestrian request already waiting")
            }
        }
    }
}
