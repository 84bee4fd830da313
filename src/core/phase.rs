//! Controller phases and their fixed timing table.
//!
//! A phase is one of the seven mutually exclusive states of the intersection.
//! Each phase carries a nominal duration in time units; the duration never
//! changes at runtime and is the only value a driver may count down.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParsePhaseError;
use super::signals::{PedestrianLight, SignalAspect, VehicleLights};

/// One of the seven controller states.
///
/// The vehicle phases ([`CarGreen`](Phase::CarGreen), [`CarYellow`](Phase::CarYellow),
/// [`CarRed`](Phase::CarRed), [`CarRedYellow`](Phase::CarRedYellow)) form the
/// normal loop. The pedestrian phases ([`WalkPrep`](Phase::WalkPrep),
/// [`Walk`](Phase::Walk), [`WalkFinish`](Phase::WalkFinish)) are only ever
/// entered from `CarRed` and hand control back to `CarRedYellow`.
///
/// # Example
///
/// ```rust
/// use crosswalk::core::Phase;
///
/// assert_eq!(Phase::CarGreen.duration(), 10);
/// assert_eq!(Phase::Walk.name(), "WALK");
/// assert_eq!("CAR_RED".parse::<Phase>().unwrap(), Phase::CarRed);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    CarGreen,
    CarYellow,
    CarRed,
    CarRedYellow,
    WalkPrep,
    Walk,
    WalkFinish,
}

impl Phase {
    /// Every phase, in timing-table order.
    pub const ALL: [Phase; 7] = [
        Phase::CarGreen,
        Phase::CarYellow,
        Phase::CarRed,
        Phase::CarRedYellow,
        Phase::WalkPrep,
        Phase::Walk,
        Phase::WalkFinish,
    ];

    /// Display name, as reported to drivers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CarGreen => "CAR_GREEN",
            Self::CarYellow => "CAR_YELLOW",
            Self::CarRed => "CAR_RED",
            Self::CarRedYellow => "CAR_RED_YELLOW",
            Self::WalkPrep => "WALK_PREP",
            Self::Walk => "WALK",
            Self::WalkFinish => "WALK_FINISH",
        }
    }

    /// Nominal duration of the phase in time units.
    pub fn duration(&self) -> u32 {
        match self {
            Self::CarGreen => 10,
            Self::CarYellow => 2,
            Self::CarRed => 8,
            Self::CarRedYellow => 2,
            Self::WalkPrep => 1,
            Self::Walk => 5,
            Self::WalkFinish => 2,
        }
    }

    /// True for the three phases of the pedestrian sub-sequence.
    pub fn is_pedestrian_phase(&self) -> bool {
        matches!(self, Self::WalkPrep | Self::Walk | Self::WalkFinish)
    }

    /// Lamp states displayed while this phase is active.
    pub fn signals(&self) -> SignalAspect {
        let vehicle = match self {
            Self::CarGreen => VehicleLights::GREEN,
            Self::CarYellow => VehicleLights::YELLOW,
            Self::CarRedYellow => VehicleLights::RED_YELLOW,
            Self::CarRed | Self::WalkPrep | Self::Walk | Self::WalkFinish => VehicleLights::RED,
        };
        let pedestrian = match self {
            Self::Walk => PedestrianLight::Walk,
            _ => PedestrianLight::DontWalk,
        };
        SignalAspect {
            vehicle,
            pedestrian,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = ParsePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|phase| phase.name() == s)
            .ok_or_else(|| ParsePhaseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_match_timing_table() {
        let table: Vec<(Phase, u32)> = Phase::ALL.iter().map(|p| (*p, p.duration())).collect();
        assert_eq!(
            table,
            vec![
                (Phase::CarGreen, 10),
                (Phase::CarYellow, 2),
                (Phase::CarRed, 8),
                (Phase::CarRedYellow, 2),
                (Phase::WalkPrep, 1),
                (Phase::Walk, 5),
                (Phase::WalkFinish, 2),
            ]
        );
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for phase in Phase::ALL {
            assert_eq!(phase.name().parse::<Phase>(), Ok(phase));
            assert_eq!(phase.to_string(), phase.name());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "CAR_BLUE".parse::<Phase>().unwrap_err();
        assert_eq!(err, ParsePhaseError("CAR_BLUE".to_string()));
        assert_eq!(err.to_string(), "Unknown phase name 'CAR_BLUE'");
    }

    #[test]
    fn pedestrian_phases_are_identified() {
        let pedestrian: Vec<Phase> = Phase::ALL
            .into_iter()
            .filter(Phase::is_pedestrian_phase)
            .collect();
        assert_eq!(
            pedestrian,
            vec![Phase::WalkPrep, Phase::Walk, Phase::WalkFinish]
        );
    }

    #[test]
    fn walk_is_only_shown_behind_a_red_vehicle_signal() {
        for phase in Phase::ALL {
            let aspect = phase.signals();
            if aspect.pedestrian == PedestrianLight::Walk {
                assert_eq!(phase, Phase::Walk);
                assert_eq!(aspect.vehicle, VehicleLights::RED);
            }
        }
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&Phase::CarRedYellow).unwrap();
        assert_eq!(json, "\"CAR_RED_YELLOW\"");
        let back: Phase = serde_json::from_str("\"WALK_PREP\"").unwrap();
        assert_eq!(back, Phase::WalkPrep);
    }
}
