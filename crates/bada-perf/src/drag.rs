//! Aerodynamic drag.
//!
//! Lift coefficient from the vertical equilibrium:
//!   C_L = 2·m·g0 / (δ·p0·γ·S·M²·cos γ_path)
//!
//! Clean polar (landing gear up, no high lift):
//!   C_D = scalar · (C0 + C2·C_L² + C6·C_L⁶)
//! with each Ck = Σ d_i / (1 − M²)^e_i over its five coefficients.
//!
//! Drag force:
//!   D = ½·δ·p0·γ·S·M²·C_D

use std::sync::Arc;

use bada_core::constants::{GAMMA, G_0, P_0};
use bada_core::{inverse_power_sum, pressure_ratio};
use bada_models::{paths, CoefficientStore, StoreError};
use uom::si::angle::{degree, radian};
use uom::si::f64::{Angle, Force, Length};
use uom::si::force::newton;
use uom::si::mass::kilogram;

use crate::error::PerformanceError;
use crate::state::FlightState;
use crate::Result;

/// Exponents of (1 − M²) for the C0, C2 and C6 groups of the clean polar.
const CLEAN_EXPONENTS: [[f64; 5]; 3] = [
    [0.0, 0.5, 1.0, 1.5, 2.0],
    [0.0, 1.5, 3.0, 4.5, 6.0],
    [0.0, 7.0, 7.5, 8.0, 8.5],
];

/// Value reported by the legacy clean-drag surface above `M_max`.
pub const OUT_OF_ENVELOPE_SENTINEL: f64 = 2.0;

/// Outcome of a clean-drag evaluation that tolerates the Mach envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CleanDrag {
    Force(Force),
    /// Mach above the polar's validity; no force was computed.
    OutOfEnvelope { mach: f64, mach_max: f64 },
}

impl CleanDrag {
    /// Legacy scalar view: newtons, or [`OUT_OF_ENVELOPE_SENTINEL`].
    pub fn value(&self) -> f64 {
        match self {
            CleanDrag::Force(force) => force.get::<newton>(),
            CleanDrag::OutOfEnvelope { .. } => OUT_OF_ENVELOPE_SENTINEL,
        }
    }

    pub fn into_result(self) -> Result<Force> {
        match self {
            CleanDrag::Force(force) => Ok(force),
            CleanDrag::OutOfEnvelope { mach, mach_max } => {
                Err(PerformanceError::DomainViolation { mach, mach_max })
            }
        }
    }
}

/// D = ½·δ·p0·γ·S·M²·C_D, with S in m².
pub fn drag_force(mach: f64, dp: f64, wing_area: f64, cd: f64) -> Force {
    Force::new::<newton>(0.5 * dp * P_0 * GAMMA * wing_area * mach * mach * cd)
}

/// Fails with [`PerformanceError::DegenerateState`] when no finite C_L holds the
/// path: zero airspeed, or a vertical path.
fn lift_coefficient_at(state: &FlightState, mach: f64, dp: f64, wing_area: f64) -> Result<f64> {
    let cos_path = state.path_angle.get::<radian>().cos();
    if mach <= 0.0 || cos_path <= f64::EPSILON {
        return Err(PerformanceError::DegenerateState {
            mach,
            path_angle_deg: state.path_angle.get::<degree>(),
        });
    }
    let weight = state.mass.get::<kilogram>() * G_0;
    Ok(2.0 * weight / (dp * P_0 * GAMMA * wing_area * mach * mach * cos_path))
}

/// Drag model of one aircraft type.
#[derive(Debug, Clone)]
pub struct Drag {
    store: Arc<CoefficientStore>,
}

impl Drag {
    pub fn new(store: Arc<CoefficientStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<CoefficientStore> {
        &self.store
    }

    /// Pressure ratio δ at `alt` in the standard atmosphere.
    pub fn pressure_ratio(&self, alt: Length) -> f64 {
        pressure_ratio(alt)
    }

    fn wing_area(&self) -> Result<f64> {
        Ok(self.store.scalar(paths::WING_AREA)?)
    }

    /// Lift coefficient required to hold the state's path.
    ///
    /// Zero airspeed or a vertical path is a [`PerformanceError::DegenerateState`].
    pub fn lift_coefficient(&self, state: &FlightState) -> Result<f64> {
        let dp = self.pressure_ratio(state.altitude);
        lift_coefficient_at(state, state.mach(), dp, self.wing_area()?)
    }

    /// Clean drag coefficient, ignoring the Mach envelope.
    pub fn clean_drag_coefficient(&self, state: &FlightState) -> Result<f64> {
        let cl = self.lift_coefficient(state)?;
        self.clean_polar(state.mach(), cl)
    }

    fn clean_polar(&self, mach: f64, cl: f64) -> Result<f64> {
        let d = self.store.coefficients(paths::CLEAN_CD)?;
        if d.len() < 15 {
            return Err(StoreError::UnexpectedKind {
                path: paths::CLEAN_CD.to_owned(),
                expected: "15-coefficient drag polar",
            }
            .into());
        }
        let base = 1.0 - mach * mach;
        let c0 = inverse_power_sum(&d[0..5], base, &CLEAN_EXPONENTS[0]);
        let c2 = inverse_power_sum(&d[5..10], base, &CLEAN_EXPONENTS[1]);
        let c6 = inverse_power_sum(&d[10..15], base, &CLEAN_EXPONENTS[2]);
        let scalar = self.store.scalar(paths::CLEAN_SCALAR)?;
        Ok(scalar * (c0 + c2 * cl.powi(2) + c6 * cl.powi(6)))
    }

    /// Clean drag, reporting an out-of-envelope Mach as a value rather than an error.
    pub fn clean_drag_or_sentinel(&self, state: &FlightState) -> Result<CleanDrag> {
        let mach = state.mach();
        let mach_max = self.store.scalar(paths::CLEAN_M_MAX)?;
        if mach > mach_max {
            log::trace!(
                "{}: Mach {mach:.3} above clean polar limit {mach_max:.3}",
                self.store.aircraft_type()
            );
            return Ok(CleanDrag::OutOfEnvelope { mach, mach_max });
        }

        let dp = self.pressure_ratio(state.altitude);
        let s = self.wing_area()?;
        let cl = lift_coefficient_at(state, mach, dp, s)?;
        let cd = self.clean_polar(mach, cl)?;
        Ok(CleanDrag::Force(drag_force(mach, dp, s, cd)))
    }

    /// Clean drag force. Fails with [`PerformanceError::DomainViolation`] above `M_max`.
    pub fn clean_drag(&self, state: &FlightState) -> Result<Force> {
        self.clean_drag_or_sentinel(state)?.into_result()
    }

    /// Drag coefficient with high lift devices and/or landing gear deployed.
    ///
    /// C_D = d1 + d2·C_L + d3·C_L²
    pub fn nonclean_drag(
        &self,
        state: &FlightState,
        _flap_angle: Angle,
        landing_gear_down: bool,
    ) -> Result<f64> {
        // TODO: pick the Configuration whose HL_id matches the flap angle; only the
        // first configuration carrying the gear state is read today.

        let path = paths::nonclean_cd(landing_gear_down);
        let d = self.store.coefficients(&path)?;
        let [d1, d2, d3] = d[..] else {
            return Err(StoreError::UnexpectedKind {
                path,
                expected: "3-coefficient quadratic",
            }
            .into());
        };
        let cl = self.lift_coefficient(state)?;
        Ok(d1 + d2 * cl + d3 * cl * cl)
    }
}
