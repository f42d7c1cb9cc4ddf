//! Fuel flow.
//!
//!   F = δ · √θ · W_mref · a0 · C_F / LHV
//!
//! C_F comes from the non-idle table (polynomial in C_T and Mach) when the
//! engines deliver climb or cruise thrust, and from the idle table
//! (polynomial in δ and Mach, scaled by √θ/δ) otherwise.

use std::sync::Arc;

use bada_core::units::{kt, metres};
use bada_core::{nested_horner, pressure_ratio, sea_level_sound_speed, tas2mach, temperature_ratio};
use bada_models::{paths, CoefficientStore};
use uom::si::f64::{Angle, Force, Length, MassRate, ThermodynamicTemperature, Velocity};
use uom::si::force::newton;
use uom::si::mass_rate::kilogram_per_second;
use uom::si::velocity::meter_per_second;

use crate::drag::Drag;
use crate::phase::{FlightPhase, PhaseThresholds};
use crate::state::FlightState;
use crate::thrust::Thrust;
use crate::Result;

/// Lower clamp of `at_thrust`, as a fraction of sea-level static takeoff thrust.
pub const MIN_THRUST_RATIO: f64 = 0.07;

const CF_ROW: usize = 5;
const IDLE_CF_ROW: usize = 3;

/// Fuel-flow model of one aircraft type.
#[derive(Debug, Clone)]
pub struct FuelFlow {
    store: Arc<CoefficientStore>,
    thrust: Thrust,
    phases: PhaseThresholds,
}

impl FuelFlow {
    pub fn new(store: Arc<CoefficientStore>) -> Self {
        Self::with_thresholds(store, PhaseThresholds::default())
    }

    pub fn with_thresholds(store: Arc<CoefficientStore>, phases: PhaseThresholds) -> Self {
        Self {
            thrust: Thrust::new(Arc::clone(&store)),
            store,
            phases,
        }
    }

    pub fn thrust(&self) -> &Thrust {
        &self.thrust
    }

    pub fn drag(&self) -> &Drag {
        self.thrust.drag()
    }

    pub fn thresholds(&self) -> &PhaseThresholds {
        &self.phases
    }

    /// Flight phase from altitude and the sign of the path angle.
    pub fn get_phase(&self, alt: Length, path_angle: Angle) -> FlightPhase {
        self.phases.classify(alt, path_angle)
    }

    /// Fuel flow during climb, cruise or descent, clean configuration.
    pub fn enroute(
        &self,
        state: &FlightState,
        temp: Option<ThermodynamicTemperature>,
    ) -> Result<MassRate> {
        let alt = state.altitude;
        let phase = self.get_phase(alt, state.path_angle);
        let mach = state.mach();
        let dp = pressure_ratio(alt);
        let theta = temperature_ratio(alt, temp);
        let w_mref = self.thrust.reference_weight()?;

        let cf = match phase {
            FlightPhase::Climb => {
                let ct = self.thrust.climb_ct(state.tas, alt, dp, temp, None)?;
                self.nonidle_cf(ct, mach)?
            }
            FlightPhase::Cruise => {
                let drag = self.drag().clean_drag(state)?;
                let ct = drag.get::<newton>() / (w_mref * dp);
                self.nonidle_cf(ct, mach)?
            }
            FlightPhase::Takeoff | FlightPhase::Descent | FlightPhase::Landing => {
                let coeffs = self.store.coefficients(paths::IDLE_CF)?;
                nested_horner(&coeffs, IDLE_CF_ROW, dp, mach) * theta.sqrt() / dp
            }
        };

        self.fuel_flow(cf, dp, theta, w_mref)
    }

    /// Fuel flow needed to deliver `thrust` at the given speed and altitude (ISA).
    ///
    /// With `limit`, thrust is clamped to [`MIN_THRUST_RATIO`, 1] times the
    /// sea-level static takeoff thrust.
    pub fn at_thrust(
        &self,
        thrust: Force,
        tas: Velocity,
        alt: Length,
        limit: bool,
    ) -> Result<MassRate> {
        let mut thrust = thrust.get::<newton>();
        if limit {
            let max = self.thrust.takeoff(kt(0.0), None, None)?.get::<newton>();
            thrust = thrust.max(MIN_THRUST_RATIO * max).min(max);
        }

        let dp = pressure_ratio(alt);
        let theta = temperature_ratio(alt, None);
        let w_mref = self.thrust.reference_weight()?;
        let ct = thrust / (w_mref * dp);
        let cf = self.nonidle_cf(ct, tas2mach(tas, alt))?;
        self.fuel_flow(cf, dp, theta, w_mref)
    }

    /// Fuel flow at takeoff thrust scaled by `throttle` (1 = full thrust).
    ///
    /// `alt` is the airport elevation, sea level by default.
    pub fn takeoff(&self, tas: Velocity, alt: Option<Length>, throttle: f64) -> Result<MassRate> {
        let alt = alt.unwrap_or_else(|| metres(0.0));
        let t_max = self.thrust.takeoff(tas, Some(alt), None)?;
        Ok(self.at_thrust(t_max, tas, alt, true)? * throttle)
    }

    fn nonidle_cf(&self, ct: f64, mach: f64) -> Result<f64> {
        let coeffs = self.store.coefficients(paths::CF)?;
        Ok(nested_horner(&coeffs, CF_ROW, ct, mach))
    }

    fn fuel_flow(&self, cf: f64, dp: f64, theta: f64, w_mref: f64) -> Result<MassRate> {
        let lhv = self.store.scalar(paths::LHV)?;
        let a0 = sea_level_sound_speed().get::<meter_per_second>();
        Ok(MassRate::new::<kilogram_per_second>(
            dp * theta.sqrt() * w_mref * a0 * cf / lhv,
        ))
    }
}
