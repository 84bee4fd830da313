//! Reference collaborator that owns the countdown.
//!
//! The driver has no notion of wall-clock time either: something outside it
//! (a tokio interval, a test loop) calls [`Driver::tick`] once per time unit.
//! The countdown is always loaded from the duration the controller reports.

use crate::controller::{Controller, PhaseEntered};
use crate::core::{Phase, PressOutcome};

/// Countdown bookkeeping around a [`Controller`].
///
/// # Example
///
/// ```rust
/// use crosswalk::controller::Controller;
/// use crosswalk::core::Phase;
/// use crosswalk::driver::Driver;
///
/// let mut driver = Driver::new(Controller::new());
/// driver.start();
/// assert_eq!(driver.remaining(), 10);
///
/// for _ in 0..9 {
///     assert!(driver.tick().is_none());
/// }
/// let entered = driver.tick().unwrap();
/// assert_eq!(entered.phase, Phase::CarYellow);
/// assert_eq!(driver.remaining(), 2);
/// ```
#[derive(Debug)]
pub struct Driver {
    controller: Controller,
    remaining: u32,
    started: bool,
}

impl Driver {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            remaining: 0,
            started: false,
        }
    }

    /// Initialize the controller and load the first countdown.
    pub fn start(&mut self) -> PhaseEntered {
        self.started = true;
        let entered = self.controller.initialize();
        self.load(entered)
    }

    /// Count down one time unit; on reaching zero, advance the controller.
    ///
    /// Returns the newly entered phase, if any. A tick on a driver that was
    /// never started starts it and counts as the first unit of `CarGreen`.
    pub fn tick(&mut self) -> Option<PhaseEntered> {
        if !self.started {
            let entered = self.start();
            self.remaining = self.remaining.saturating_sub(1);
            return Some(entered);
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return None;
        }
        let entered = self.controller.timeout_expired();
        Some(self.load(entered))
    }

    /// Expire the current phase immediately (single-step / debug).
    pub fn skip(&mut self) -> PhaseEntered {
        if !self.started {
            self.start();
        }
        let entered = self.controller.timeout_expired();
        self.load(entered)
    }

    /// Forward a pedestrian button press.
    pub fn press(&mut self) -> PressOutcome {
        self.controller.button_pressed()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn phase(&self) -> Phase {
        self.controller.current_phase()
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn into_controller(self) -> Controller {
        self.controller
    }

    fn load(&mut self, entered: PhaseEntered) -> PhaseEntered {
        self.remaining = entered.duration;
        entered
    }
}
