//! Observers of controller notifications.
//!
//! The controller pushes one [`PhaseEntered`] per transition to every
//! registered observer, in registration order. Observers must not assume
//! anything about wall-clock time; they only see phases and durations.

mod history;
mod logging;

pub use history::{TransitionLog, TransitionRecord};
pub use logging::LoggingObserver;

use crate::controller::PhaseEntered;
use crate::core::PressOutcome;

/// Receiver of controller notifications.
///
/// Observers run synchronously inside the controller operation. Behind a
/// [`SharedController`](crate::controller::SharedController) that means
/// under its lock, so an observer must not call back into the same handle.
///
/// The phase and latch are updated before any observer runs. If an observer
/// panics, observers registered after it miss that notification; the
/// controller itself stays consistent.
///
/// # Example
///
/// ```rust
/// use crosswalk::controller::{Controller, PhaseEntered};
/// use crosswalk::observer::PhaseObserver;
///
/// struct Countdown {
///     remaining: u32,
/// }
///
/// impl PhaseObserver for Countdown {
///     fn on_phase_entered(&mut self, event: &PhaseEntered) {
///         self.remaining = event.duration;
///     }
/// }
///
/// let mut controller = Controller::new();
/// controller.add_observer(Box::new(Countdown { remaining: 0 }));
/// controller.initialize();
/// ```
pub trait PhaseObserver: Send {
    /// Called once for every phase entered, including the initial one.
    fn on_phase_entered(&mut self, event: &PhaseEntered);

    /// Called for every button press, with its effect on the latch.
    ///
    /// Default implementation ignores presses.
    fn on_button_pressed(&mut self, _outcome: PressOutcome) {}
}

/// Adapter turning a closure into a [`PhaseObserver`].
///
/// # Example
///
/// ```rust
/// use crosswalk::controller::Controller;
/// use crosswalk::observer::FnObserver;
///
/// let mut controller = Controller::new();
/// controller.add_observer(Box::new(FnObserver::new(|event| {
///     println!("{} for {}", event.name(), event.duration);
/// })));
/// controller.initialize();
/// ```
pub struct FnObserver<F> {
    callback: F,
}

impl<F> FnObserver<F>
where
    F: FnMut(&PhaseEntered) + Send,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> PhaseObserver for FnObserver<F>
where
    F: FnMut(&PhaseEntered) + Send,
{
    fn on_phase_entered(&mut self, event: &PhaseEntered) {
        (self.callback)(event)
    }
}
