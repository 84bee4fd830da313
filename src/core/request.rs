//! The pedestrian request latch.
//!
//! A press sets the latch; entering the walk phase consumes it. Nothing else
//! touches it, so one latched request can never grant more than one walk.

use serde::{Deserialize, Serialize};

/// Single-slot pedestrian request.
///
/// # Example
///
/// ```rust
/// use crosswalk::core::{PedestrianRequest, PressOutcome};
///
/// let mut request = PedestrianRequest::default();
/// assert_eq!(request.press(), PressOutcome::Latched);
/// assert_eq!(request.press(), PressOutcome::AlreadyPending);
/// assert!(request.is_pending());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum PedestrianRequest {
    #[default]
    Idle,
    Pending,
}

/// What a button press did to the latch.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PressOutcome {
    /// The press set a previously idle latch.
    Latched,
    /// A request was already waiting; the latch is unchanged.
    AlreadyPending,
}

impl PedestrianRequest {
    /// Set the latch. Idempotent.
    pub fn press(&mut self) -> PressOutcome {
        match self {
            Self::Idle => {
                *self = Self::Pending;
                PressOutcome::Latched
            }
            Self::Pending => PressOutcome::AlreadyPending,
        }
    }

    /// Clear the latch, returning whether a request was pending.
    pub(crate) fn consume(&mut self) -> bool {
        std::mem::take(self) == Self::Pending
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(PedestrianRequest::default(), PedestrianRequest::Idle);
        assert!(!PedestrianRequest::default().is_pending());
    }

    #[test]
    fn repeated_presses_keep_one_request() {
        let mut request = PedestrianRequest::default();
        assert_eq!(request.press(), PressOutcome::Latched);
        for _ in 0..5 {
            assert_eq!(request.press(), PressOutcome::AlreadyPending);
        }
        assert!(request.consume());
        assert!(!request.consume());
    }

    #[test]
    fn consume_on_idle_is_noop() {
        let mut request = PedestrianRequest::Idle;
        assert!(!request.consume());
        assert_eq!(request, PedestrianRequest::Idle);
    }
}
