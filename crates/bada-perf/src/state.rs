use bada_core::tas2mach;
use uom::si::angle::radian;
use uom::si::f64::{Angle, Length, Mass, Velocity};

/// Instantaneous flight condition fed to drag and fuel-flow evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub mass: Mass,
    /// True airspeed
    pub tas: Velocity,
    pub altitude: Length,
    /// Flight path angle, positive climbing
    pub path_angle: Angle,
}

impl FlightState {
    /// Level flight at the given mass, speed and altitude.
    pub fn new(mass: Mass, tas: Velocity, altitude: Length) -> Self {
        Self {
            mass,
            tas,
            altitude,
            path_angle: Angle::new::<radian>(0.0),
        }
    }

    #[must_use]
    pub fn with_path_angle(mut self, path_angle: Angle) -> Self {
        self.path_angle = path_angle;
        self
    }

    /// Mach number in the standard atmosphere.
    pub fn mach(&self) -> f64 {
        tas2mach(self.tas, self.altitude)
    }
}
