//! Crosswalk: a deterministic traffic-intersection controller
//!
//! Crosswalk sequences a vehicle signal (green, yellow, red, red-yellow) and a
//! pedestrian signal (walk, don't walk). The controller is driven by two
//! inputs only: "the current phase's countdown expired" and "the pedestrian
//! button was pressed". It never keeps time itself.
//!
//! # Core Concepts
//!
//! - **Phase**: one of seven states, each with a fixed duration
//! - **Latch**: a pedestrian request, set by a press and consumed on entering `WALK`
//! - **Decision point**: `CAR_RED`, the only phase whose successor depends on the latch
//! - **Observers**: receivers of the `(phase, duration)` notification
//!
//! # Example
//!
//! ```rust
//! use crosswalk::controller::Controller;
//! use crosswalk::core::Phase;
//!
//! let mut controller = Controller::new();
//! controller.initialize();
//!
//! // A press during green is serviced once vehicles are stopped.
//! controller.button_pressed();
//! let path: Vec<Phase> = (0..7).map(|_| controller.timeout_expired().phase).collect();
//! assert_eq!(
//!     path,
//!     vec![
//!         Phase::CarYellow,
//!         Phase::CarRed,
//!         Phase::WalkPrep,
//!         Phase::Walk,
//!         Phase::WalkFinish,
//!         Phase::CarRedYellow,
//!         Phase::CarGreen,
//!     ]
//! );
//! assert!(!controller.has_pedestrian_request());
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod driver;
pub mod observer;

// Re-export commonly used types
pub use config::{ConfigError, CrosswalkConfig};
pub use controller::{Controller, PhaseEntered, SharedController};
pub use self::core::{PedestrianRequest, Phase, PressOutcome};
pub use driver::Driver;
pub use observer::{LoggingObserver, PhaseObserver, TransitionLog};
