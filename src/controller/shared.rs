//! Lock-serialized controller handle for multi-threaded hosts.

use super::{Controller, ControllerEvent, ControllerResponse, ControllerSnapshot, PhaseEntered};
use crate::core::{Phase, PressOutcome};
use crate::observer::PhaseObserver;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle that runs every controller operation under one lock.
///
/// A timer thread and an input thread can each hold a clone; the phase and
/// the request latch are always read and updated together.
///
/// # Example
///
/// ```rust
/// use crosswalk::controller::{Controller, SharedController};
/// use std::thread;
///
/// let shared = SharedController::new(Controller::new());
/// shared.initialize();
///
/// let button = shared.clone();
/// thread::spawn(move || {
///     button.button_pressed();
/// })
/// .join()
/// .unwrap();
///
/// assert!(shared.has_pedestrian_request());
/// ```
#[derive(Clone, Debug)]
pub struct SharedController {
    inner: Arc<Mutex<Controller>>,
}

impl SharedController {
    pub fn new(controller: Controller) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    // The phase and latch are updated before observers run, so a lock
    // poisoned by a panicking observer still guards a valid state.
    fn lock(&self) -> MutexGuard<'_, Controller> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an observer.
    ///
    /// Observers are called while the lock is held. One that calls back into
    /// this handle (or a clone of it) deadlocks.
    pub fn add_observer(&self, observer: Box<dyn PhaseObserver>) {
        self.lock().add_observer(observer);
    }

    pub fn initialize(&self) -> PhaseEntered {
        self.lock().initialize()
    }

    pub fn timeout_expired(&self) -> PhaseEntered {
        self.lock().timeout_expired()
    }

    pub fn button_pressed(&self) -> PressOutcome {
        self.lock().button_pressed()
    }

    pub fn has_pedestrian_request(&self) -> bool {
        self.lock().has_pedestrian_request()
    }

    pub fn current_phase(&self) -> Phase {
        self.lock().current_phase()
    }

    pub fn handle_event(&self, event: ControllerEvent) -> ControllerResponse {
        self.lock().handle_event(event)
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        self.lock().snapshot()
    }

    /// Run `f` with exclusive access, for compound reads.
    pub fn with<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> R {
        f(&mut self.lock())
    }
}

impl From<Controller> for SharedController {
    fn from(controller: Controller) -> Self {
        Self::new(controller)
    }
}
