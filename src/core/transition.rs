//! The transition table.
//!
//! Every phase has exactly one [`Successor`] entry. Only `CarRed` branches,
//! and it branches on nothing but the pedestrian latch.

use super::phase::Phase;
use super::request::PedestrianRequest;

/// Where a phase goes when its countdown expires.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Successor {
    /// Unconditional successor.
    Fixed(Phase),
    /// Successor chosen by the pedestrian latch at the moment of expiry.
    Branch {
        when_requested: Phase,
        otherwise: Phase,
    },
}

impl Successor {
    /// Pick the target phase (pure).
    pub fn resolve(&self, request: PedestrianRequest) -> Phase {
        match *self {
            Self::Fixed(next) => next,
            Self::Branch {
                when_requested,
                otherwise,
            } => {
                if request.is_pending() {
                    when_requested
                } else {
                    otherwise
                }
            }
        }
    }

    /// Every phase reachable through this entry.
    pub fn targets(&self) -> Vec<Phase> {
        match *self {
            Self::Fixed(next) => vec![next],
            Self::Branch {
                when_requested,
                otherwise,
            } => vec![when_requested, otherwise],
        }
    }
}

/// Transition table entry for `phase`.
pub fn successor(phase: Phase) -> Successor {
    match phase {
        Phase::CarGreen => Successor::Fixed(Phase::CarYellow),
        Phase::CarYellow => Successor::Fixed(Phase::CarRed),
        Phase::CarRed => Successor::Branch {
            when_requested: Phase::WalkPrep,
            otherwise: Phase::CarRedYellow,
        },
        Phase::WalkPrep => Successor::Fixed(Phase::Walk),
        Phase::Walk => Successor::Fixed(Phase::WalkFinish),
        Phase::WalkFinish => Successor::Fixed(Phase::CarRedYellow),
        Phase::CarRedYellow => Successor::Fixed(Phase::CarGreen),
    }
}

/// The phase entered when `phase` expires with the latch in `request`.
///
/// # Example
///
/// ```rust
/// use crosswalk::core::{next_phase, PedestrianRequest, Phase};
///
/// assert_eq!(next_phase(Phase::CarRed, PedestrianRequest::Idle), Phase::CarRedYellow);
/// assert_eq!(next_phase(Phase::CarRed, PedestrianRequest::Pending), Phase::WalkPrep);
/// assert_eq!(next_phase(Phase::CarGreen, PedestrianRequest::Pending), Phase::CarYellow);
/// ```
pub fn next_phase(phase: Phase, request: PedestrianRequest) -> Phase {
    successor(phase).resolve(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn car_red_is_the_only_branch() {
        for phase in Phase::ALL {
            let is_branch = matches!(successor(phase), Successor::Branch { .. });
            assert_eq!(is_branch, phase == Phase::CarRed, "{phase}");
        }
    }

    #[test]
    fn fixed_entries_ignore_the_latch() {
        for phase in Phase::ALL.into_iter().filter(|p| *p != Phase::CarRed) {
            assert_eq!(
                next_phase(phase, PedestrianRequest::Idle),
                next_phase(phase, PedestrianRequest::Pending)
            );
        }
    }

    #[test]
    fn pedestrian_phases_are_entered_only_from_car_red() {
        for phase in Phase::ALL {
            for target in successor(phase).targets() {
                if target == Phase::WalkPrep {
                    assert_eq!(phase, Phase::CarRed);
                }
            }
        }
    }

    #[test]
    fn walk_sequence_rejoins_at_red_yellow() {
        assert_eq!(
            next_phase(Phase::WalkPrep, PedestrianRequest::Idle),
            Phase::Walk
        );
        assert_eq!(
            next_phase(Phase::Walk, PedestrianRequest::Idle),
            Phase::WalkFinish
        );
        assert_eq!(
            next_phase(Phase::WalkFinish, PedestrianRequest::Pending),
            Phase::CarRedYellow
        );
    }

    #[test]
    fn every_phase_is_reachable() {
        let mut reached: Vec<Phase> = Phase::ALL
            .into_iter()
            .flat_map(|p| successor(p).targets())
            .collect();
        reached.sort_by_key(|p| p.name());
        reached.dedup();
        assert_eq!(reached.len(), Phase::ALL.len());
    }
}
