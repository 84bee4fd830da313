//! Pure core of the controller.
//!
//! This module contains everything that decides *what happens next*:
//! - The seven phases and their fixed durations
//! - The lamp aspects shown during each phase
//! - The pedestrian request latch
//! - The transition table with its single branch at `CarRed`
//!
//! Nothing here knows about observers, threads or wall-clock time.

mod error;
mod phase;
mod request;
mod signals;
mod transition;

pub use error::ParsePhaseError;
pub use phase::Phase;
pub use request::{PedestrianRequest, PressOutcome};
pub use signals::{PedestrianLight, SignalAspect, VehicleLights};
pub use transition::{next_phase, successor, Successor};
