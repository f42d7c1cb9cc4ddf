//! Engine thrust.
//!
//! Net thrust from the thrust coefficient:
//!   T = δ · W_mref · C_T,   W_mref = m_ref · g0
//!
//! Non-idle ratings evaluate C_T as a polynomial in Mach and throttle δ_T,
//! where the max-climb throttle is either flat rated (polynomial in Mach and δ)
//! or temperature rated (polynomial in Mach, θ_t = θ·(1 + M²·(γ−1)/2) and δ).
//! The rating switches when the ISA deviation exceeds the table's `kink`.

use std::sync::Arc;

use bada_core::constants::{GAMMA, G_0};
use bada_core::units::{ft, kg, metres};
use bada_core::{
    horner, horner_rows, isa_deviation, nested_horner, pressure_ratio, tas2mach, temperature,
    temperature_ratio,
};
use bada_models::{paths, CoefficientStore};
use uom::si::f64::{Force, Length, Mass, ThermodynamicTemperature, Velocity};
use uom::si::force::newton;

use crate::drag::Drag;
use crate::error::PerformanceError;
use crate::state::FlightState;
use crate::Result;

/// Below this altitude the idle table is not valid and a fixed low throttle is used.
pub const LOW_IDLE_ALTITUDE_FT: f64 = 1_000.0;
/// Throttle substituted for idle near the ground.
pub const LOW_ALTITUDE_IDLE_THROTTLE: f64 = 0.03;

const CT_ROW: usize = 6;
const FLAT_RATING_ROW: usize = 6;
const TEMP_RATING_ROW: usize = 5;
/// Rows of the temperature rating taken over θ_t; the rest go over δ.
const TEMP_RATING_THETA_ROWS: usize = 5;
const IDLE_CT_ROW: usize = 4;

/// Max-climb throttle regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleRating {
    Flat,
    Temperature,
}

impl ThrottleRating {
    /// Temperature rated strictly above the kink, flat rated otherwise.
    pub fn select(isa_deviation: f64, kink: f64) -> Self {
        if isa_deviation > kink {
            ThrottleRating::Temperature
        } else {
            ThrottleRating::Flat
        }
    }
}

/// Thrust model of one aircraft type.
#[derive(Debug, Clone)]
pub struct Thrust {
    store: Arc<CoefficientStore>,
    drag: Drag,
}

impl Thrust {
    pub fn new(store: Arc<CoefficientStore>) -> Self {
        Self {
            drag: Drag::new(Arc::clone(&store)),
            store,
        }
    }

    pub fn drag(&self) -> &Drag {
        &self.drag
    }

    /// m_ref · g0 [N]
    pub(crate) fn reference_weight(&self) -> Result<f64> {
        Ok(self.store.scalar(paths::MREF)? * G_0)
    }

    /// Maximum climb thrust.
    pub fn climb(
        &self,
        tas: Velocity,
        alt: Length,
        temp: Option<ThermodynamicTemperature>,
    ) -> Result<Force> {
        let dp = pressure_ratio(alt);
        let ct = self.climb_ct(tas, alt, dp, temp, None)?;
        self.get_thrust(ct, dp)
    }

    /// Max-climb throttle δ_T.
    pub fn compute_throttle(
        &self,
        tas: Velocity,
        alt: Length,
        dp: f64,
        temp: Option<ThermodynamicTemperature>,
    ) -> Result<f64> {
        let kink = self.store.scalar(paths::KINK)?;
        let mach = tas2mach(tas, alt);
        let temp = temp.unwrap_or_else(|| temperature(alt));

        match ThrottleRating::select(isa_deviation(alt, temp), kink) {
            ThrottleRating::Temperature => {
                let theta = temperature_ratio(alt, Some(temp));
                let theta_t = theta * (1.0 + mach * mach * (GAMMA - 1.0) / 2.0);
                let coeffs = self.store.coefficients(paths::TEMP_RATING)?;
                let rows = horner_rows(&coeffs, TEMP_RATING_ROW, mach, 0);
                let (over_theta, over_dp) = rows.split_at(rows.len().min(TEMP_RATING_THETA_ROWS));
                Ok(horner(over_theta, theta_t) + horner(over_dp, dp))
            }
            ThrottleRating::Flat => {
                let coeffs = self.store.coefficients(paths::FLAT_RATING)?;
                Ok(nested_horner(&coeffs, FLAT_RATING_ROW, mach, dp))
            }
        }
    }

    /// Non-idle thrust coefficient.
    ///
    /// `throttle` defaults to the max-climb throttle.
    pub fn climb_ct(
        &self,
        tas: Velocity,
        alt: Length,
        dp: f64,
        temp: Option<ThermodynamicTemperature>,
        throttle: Option<f64>,
    ) -> Result<f64> {
        let throttle = match throttle {
            Some(throttle) => throttle,
            None => self.compute_throttle(tas, alt, dp, temp)?,
        };
        let mach = tas2mach(tas, alt);
        let coeffs = self.store.coefficients(paths::CT)?;
        Ok(nested_horner(&coeffs, CT_ROW, mach, throttle))
    }

    /// Idle thrust in descent.
    pub fn descent_idle(&self, tas: Velocity, alt: Length) -> Result<Force> {
        let dp = pressure_ratio(alt);
        if alt < ft(LOW_IDLE_ALTITUDE_FT) {
            let ct = self.climb_ct(tas, alt, dp, None, Some(LOW_ALTITUDE_IDLE_THROTTLE))?;
            return self.get_thrust(ct, dp);
        }

        let mach = tas2mach(tas, alt);
        let coeffs = self.store.coefficients(paths::IDLE_CT)?;
        let ct = horner(&horner_rows(&coeffs, IDLE_CT_ROW, dp, -1), mach);
        self.get_thrust(ct, dp)
    }

    /// Cruise thrust: equal to clean drag in steady level flight.
    ///
    /// `mass` defaults to the maximum takeoff mass.
    pub fn cruise(&self, tas: Velocity, alt: Length, mass: Option<Mass>) -> Result<Force> {
        let mass = match mass {
            Some(mass) => mass,
            None => kg(self.store.scalar(paths::MTOW)?),
        };
        self.drag.clean_drag(&FlightState::new(mass, tas, alt))
    }

    /// Takeoff thrust: max climb at the runway, sea level by default.
    pub fn takeoff(
        &self,
        tas: Velocity,
        alt: Option<Length>,
        temp: Option<ThermodynamicTemperature>,
    ) -> Result<Force> {
        self.climb(tas, alt.unwrap_or_else(|| metres(0.0)), temp)
    }

    /// T = δ · W_mref · C_T
    pub fn get_thrust(&self, ct: f64, dp: f64) -> Result<Force> {
        Ok(Force::new::<newton>(dp * self.reference_weight()? * ct))
    }

    /// Idle thrust coefficient. Not provided by this model.
    pub fn idle_ct(
        &self,
        _tas: Velocity,
        _alt: Length,
        _temp: Option<ThermodynamicTemperature>,
    ) -> Result<f64> {
        Err(PerformanceError::NotImplemented("idle thrust coefficient"))
    }
}
