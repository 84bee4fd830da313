//! The intersection controller.
//!
//! The controller is purely reactive: it never sleeps, blocks or schedules.
//! A driver tells it when the current phase's countdown has expired and when
//! the pedestrian button is pressed; the controller answers with the phase to
//! display and how long to count down.

mod event;
mod shared;

pub use event::{ControllerEvent, ControllerResponse, PhaseEntered};
pub use shared::SharedController;

use crate::core::{next_phase, PedestrianRequest, Phase, PressOutcome, SignalAspect};
use crate::observer::PhaseObserver;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-in-time view of the controller, for display or diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    pub phase: Phase,
    pub duration: u32,
    pub signals: SignalAspect,
    pub pedestrian_request: bool,
}

/// Traffic-intersection state machine.
///
/// # Example
///
/// ```rust
/// use crosswalk::controller::Controller;
/// use crosswalk::core::Phase;
///
/// let mut controller = Controller::new();
/// let entered = controller.initialize();
/// assert_eq!(entered.phase, Phase::CarGreen);
/// assert_eq!(entered.duration, 10);
///
/// controller.button_pressed();
/// controller.timeout_expired(); // CAR_YELLOW
/// controller.timeout_expired(); // CAR_RED
/// assert_eq!(controller.timeout_expired().phase, Phase::WalkPrep);
/// assert_eq!(controller.timeout_expired().phase, Phase::Walk);
/// assert!(!controller.has_pedestrian_request());
/// ```
pub struct Controller {
    current: Phase,
    request: PedestrianRequest,
    observers: Vec<Box<dyn PhaseObserver>>,
}

impl Controller {
    /// Create a controller in `CarGreen` with no pending request.
    ///
    /// No notification is emitted until [`initialize`](Self::initialize).
    pub fn new() -> Self {
        Self {
            current: Phase::CarGreen,
            request: PedestrianRequest::Idle,
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: Box<dyn PhaseObserver>) {
        self.observers.push(observer);
    }

    /// Builder-style [`add_observer`](Self::add_observer).
    pub fn with_observer(mut self, observer: Box<dyn PhaseObserver>) -> Self {
        self.add_observer(observer);
        self
    }

    /// Current phase (pure).
    pub fn current_phase(&self) -> Phase {
        self.current
    }

    /// Whether a pedestrian request is latched (pure).
    pub fn has_pedestrian_request(&self) -> bool {
        self.request.is_pending()
    }

    /// Reset to `CarGreen` with no pending request and announce it.
    pub fn initialize(&mut self) -> PhaseEntered {
        self.current = Phase::CarGreen;
        self.request = PedestrianRequest::Idle;
        log::debug!("controller initialized in {}", self.current);
        self.notify(PhaseEntered::new(None, self.current))
    }

    /// Advance exactly one phase.
    ///
    /// The caller asserts that the current phase's countdown has run out;
    /// calling early still performs a real transition.
    pub fn timeout_expired(&mut self) -> PhaseEntered {
        let from = self.current;
        let to = next_phase(from, self.request);
        if to == Phase::Walk && self.request.consume() {
            log::info!("pedestrian request serviced");
        }
        self.current = to;
        log::debug!("{} -> {} ({})", from, to, to.duration());
        self.notify(PhaseEntered::new(Some(from), to))
    }

    /// Latch a pedestrian request. Valid in every phase.
    ///
    /// The request is serviced at the next `CarRed` decision that has not
    /// been taken yet.
    pub fn button_pressed(&mut self) -> PressOutcome {
        let outcome = self.request.press();
        match outcome {
            PressOutcome::Latched => log::info!("pedestrian request latched in {}", self.current),
            PressOutcome::AlreadyPending => log::trace!("pedestrian request already latched"),
        }
        for observer in &mut self.observers {
            observer.on_button_pressed(outcome);
        }
        outcome
    }

    /// Dispatch a queued event to the matching operation.
    pub fn handle_event(&mut self, event: ControllerEvent) -> ControllerResponse {
        match event {
            ControllerEvent::TimeExpired => ControllerResponse::Entered(self.timeout_expired()),
            ControllerEvent::ButtonPressed => ControllerResponse::Pressed(self.button_pressed()),
        }
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            phase: self.current,
            duration: self.current.duration(),
            signals: self.current.signals(),
            pedestrian_request: self.request.is_pending(),
        }
    }

    fn notify(&mut self, event: PhaseEntered) -> PhaseEntered {
        for observer in &mut self.observers {
            observer.on_phase_entered(&event);
        }
        event
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("current", &self.current)
            .field("request", &self.request)
            .field("observers", &self.observers.len())
            .finish()
    }
}
