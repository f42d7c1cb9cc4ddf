use std::fmt;

use bada_core::units::ft;
use serde::Deserialize;
use uom::si::angle::radian;
use uom::si::f64::{Angle, Length};

/// Coarse flight phase used to pick a fuel-flow sub-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightPhase {
    Takeoff,
    Climb,
    Cruise,
    Descent,
    Landing,
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FlightPhase::Takeoff => "TAKEOFF",
            FlightPhase::Climb => "CLIMB",
            FlightPhase::Cruise => "CRUISE",
            FlightPhase::Descent => "DESCENT",
            FlightPhase::Landing => "LANDING",
        })
    }
}

/// Altitude thresholds [ft] of the phase ladder.
///
/// Each threshold is the inclusive lower bound of the bucket above it.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhaseThresholds {
    /// Below this a climbing aircraft is taking off.
    pub takeoff_ft: f64,
    /// Below this (and above takeoff) a climbing aircraft is in initial climb.
    pub initial_climb_ft: f64,
    /// Below this (and above landing) a descending aircraft is on approach.
    pub approach_ft: f64,
    /// Below this a descending aircraft is landing.
    pub landing_ft: f64,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            takeoff_ft: 400.0,
            initial_climb_ft: 2_000.0,
            approach_ft: 8_000.0,
            landing_ft: 3_000.0,
        }
    }
}

impl PhaseThresholds {
    /// Classify by altitude; the sign of the path angle picks the ladder.
    /// A zero path angle counts as climbing.
    pub fn classify(&self, alt: Length, path_angle: Angle) -> FlightPhase {
        if path_angle.get::<radian>() >= 0.0 {
            if alt < ft(self.takeoff_ft) {
                FlightPhase::Takeoff
            } else if alt < ft(self.initial_climb_ft) {
                FlightPhase::Climb
            } else {
                FlightPhase::Cruise
            }
        } else if alt < ft(self.landing_ft) {
            FlightPhase::Landing
        } else if alt < ft(self.approach_ft) {
            FlightPhase::Descent
        } else {
            FlightPhase::Cruise
        }
    }
}
