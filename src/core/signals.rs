//! Lamp aspects shown by the vehicle and pedestrian signal heads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three vehicle lamps.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct VehicleLights {
    pub red: bool,
    pub yellow: bool,
    pub green: bool,
}

impl VehicleLights {
    pub const GREEN: Self = Self {
        red: false,
        yellow: false,
        green: true,
    };
    pub const YELLOW: Self = Self {
        red: false,
        yellow: true,
        green: false,
    };
    pub const RED: Self = Self {
        red: true,
        yellow: false,
        green: false,
    };
    pub const RED_YELLOW: Self = Self {
        red: true,
        yellow: true,
        green: false,
    };

    /// Vehicles are fully held: red lit, nothing else.
    pub fn is_stop(&self) -> bool {
        *self == Self::RED
    }
}

/// The pedestrian signal head.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PedestrianLight {
    DontWalk,
    Walk,
}

/// Everything a display needs to render one phase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SignalAspect {
    pub vehicle: VehicleLights,
    pub pedestrian: PedestrianLight,
}

impl SignalAspect {
    /// Pedestrians may only walk while vehicles are held at red.
    pub fn is_conflict_free(&self) -> bool {
        self.pedestrian == PedestrianLight::DontWalk || self.vehicle.is_stop()
    }
}

impl fmt::Display for SignalAspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lamp = |on: bool, glyph: char| if on { glyph } else { '.' };
        write!(
            f,
            "[{}{}{}] {}",
            lamp(self.vehicle.red, 'R'),
            lamp(self.vehicle.yellow, 'Y'),
            lamp(self.vehicle.green, 'G'),
            match self.pedestrian {
                PedestrianLight::Walk => "WALK",
                PedestrianLight::DontWalk => "DONT WALK",
            }
        )
    }
}
