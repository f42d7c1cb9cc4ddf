//! Core performance-model math
//!
//! Includes:
//! - Physical constants of the standard atmosphere
//! - Unit helpers (thin constructors over `uom`)
//! - Standard atmosphere with the tropopause at 11 000 m
//! - Polynomial evaluation (Horner, row-nested Horner, inverse power sums)
//!
//! Physical quantities cross the public API as `uom` values; dimensionless
//! ratios (Mach, dP, dT) are plain `f64`.

use uom::si::f64::{Length, MassDensity, Pressure, ThermodynamicTemperature, Velocity};
use uom::si::length::meter;
use uom::si::mass_density::kilogram_per_cubic_meter;
use uom::si::pressure::pascal;
use uom::si::thermodynamic_temperature::kelvin;
use uom::si::velocity::meter_per_second;

/// -------------------------
/// Constants
/// -------------------------

pub mod constants {
    /// Standard gravity [m/s²]
    pub const G_0: f64 = 9.806_65;
    /// Specific gas constant for dry air [J/(kg·K)]
    pub const R: f64 = 287.052_87;
    /// Ratio of specific heats for air
    pub const GAMMA: f64 = 1.4;
    /// Sea-level standard temperature [K]
    pub const T_0: f64 = 288.15;
    /// Sea-level standard pressure [Pa]
    pub const P_0: f64 = 101_325.0;
    /// Sea-level standard density [kg/m³]
    pub const RHO_0: f64 = 1.225;
    /// Temperature gradient below the tropopause [K/m]
    pub const BETA_T: f64 = -0.006_5;
    /// Tropopause altitude [m]
    pub const H_TROP: f64 = 11_000.0;
}

use constants::{BETA_T, GAMMA, G_0, H_TROP, P_0, R, T_0};

/// -------------------------
/// Units
/// -------------------------

pub mod units {
    use uom::si::f64::{Angle, Length, Mass, ThermodynamicTemperature, Velocity};

    #[inline]
    pub fn ft(v: f64) -> Length {
        Length::new::<uom::si::length::foot>(v)
    }

    #[inline]
    pub fn metres(v: f64) -> Length {
        Length::new::<uom::si::length::meter>(v)
    }

    #[inline]
    pub fn kt(v: f64) -> Velocity {
        Velocity::new::<uom::si::velocity::knot>(v)
    }

    #[inline]
    pub fn mps(v: f64) -> Velocity {
        Velocity::new::<uom::si::velocity::meter_per_second>(v)
    }

    #[inline]
    pub fn kg(v: f64) -> Mass {
        Mass::new::<uom::si::mass::kilogram>(v)
    }

    #[inline]
    pub fn deg(v: f64) -> Angle {
        Angle::new::<uom::si::angle::degree>(v)
    }

    #[inline]
    pub fn kelvin(v: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<uom::si::thermodynamic_temperature::kelvin>(v)
    }
}

/// -------------------------
/// Atmosphere
/// -------------------------

/// Exponent of the pressure/temperature law below the tropopause.
#[inline]
fn troposphere_exponent() -> f64 {
    -G_0 / (BETA_T * R)
}

fn isa_temperature_k(h: f64) -> f64 {
    T_0 + BETA_T * h.min(H_TROP)
}

fn pressure_ratio_at(h: f64) -> f64 {
    if h < H_TROP {
        (isa_temperature_k(h) / T_0).powf(troposphere_exponent())
    } else {
        let t_trop = isa_temperature_k(H_TROP);
        let dp_trop = (t_trop / T_0).powf(troposphere_exponent());
        dp_trop * (-(G_0 / (R * t_trop)) * (h - H_TROP)).exp()
    }
}

/// ISA temperature. Constant above the tropopause.
pub fn temperature(alt: Length) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(isa_temperature_k(alt.get::<meter>()))
}

/// ISA static pressure.
pub fn pressure(alt: Length) -> Pressure {
    Pressure::new::<pascal>(P_0 * pressure_ratio_at(alt.get::<meter>()))
}

/// ISA density from the ideal-gas law.
pub fn density(alt: Length) -> MassDensity {
    let h = alt.get::<meter>();
    let rho = P_0 * pressure_ratio_at(h) / (R * isa_temperature_k(h));
    MassDensity::new::<kilogram_per_cubic_meter>(rho)
}

/// Local speed of sound, `sqrt(γ·R·T)`.
pub fn sound_speed(alt: Length) -> Velocity {
    let t = isa_temperature_k(alt.get::<meter>());
    Velocity::new::<meter_per_second>((GAMMA * R * t).sqrt())
}

/// Sea-level standard speed of sound (a0).
pub fn sea_level_sound_speed() -> Velocity {
    Velocity::new::<meter_per_second>((GAMMA * R * T_0).sqrt())
}

/// True airspeed to Mach number at the given ISA altitude.
pub fn tas2mach(tas: Velocity, alt: Length) -> f64 {
    tas.get::<meter_per_second>() / sound_speed(alt).get::<meter_per_second>()
}

/// Pressure ratio δ = p / p0.
///
/// Below the tropopause this is `(T/T0)^(-g0/(βT·R))`; above it the
/// isothermal law decays exponentially from the tropopause pressure.
pub fn pressure_ratio(alt: Length) -> f64 {
    pressure_ratio_at(alt.get::<meter>())
}

/// Temperature ratio θ = T / T0.
///
/// `temp` overrides the ISA temperature for off-standard days.
pub fn temperature_ratio(alt: Length, temp: Option<ThermodynamicTemperature>) -> f64 {
    let t = temp.unwrap_or_else(|| temperature(alt));
    t.get::<kelvin>() / T_0
}

/// Deviation of `temp` from the ISA temperature at `alt` [K].
pub fn isa_deviation(alt: Length, temp: ThermodynamicTemperature) -> f64 {
    temp.get::<kelvin>() - isa_temperature_k(alt.get::<meter>())
}

/// -------------------------
/// Polynomials
/// -------------------------

/// Evaluate `Σ coeffs[i]·x^i` with Horner's scheme.
///
/// Coefficients are lowest order first. An empty slice evaluates to 0.
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Horner evaluation scaled by `x^smallest_order`.
///
/// Negative orders divide by `x`; callers must not pass `x == 0` then.
pub fn horner_with_order(coeffs: &[f64], x: f64, smallest_order: i32) -> f64 {
    horner(coeffs, x) * x.powi(smallest_order)
}

/// Split `coeffs` into rows of `row_len` and evaluate each row at `x`.
///
/// A trailing short row is evaluated as-is.
///
/// # Panics
/// If `row_len` is zero.
pub fn horner_rows(coeffs: &[f64], row_len: usize, x: f64, smallest_order: i32) -> Vec<f64> {
    coeffs
        .chunks(row_len)
        .map(|row| horner_with_order(row, x, smallest_order))
        .collect()
}

/// Two-level Horner: rows over `inner`, then the row values over `outer`.
pub fn nested_horner(coeffs: &[f64], row_len: usize, inner: f64, outer: f64) -> f64 {
    horner(&horner_rows(coeffs, row_len, inner, 0), outer)
}

/// `Σ coeffs[i] / base^exponents[i]` for non-integer exponents.
///
/// Extra coefficients or exponents beyond the shorter slice are ignored.
pub fn inverse_power_sum(coeffs: &[f64], base: f64, exponents: &[f64]) -> f64 {
    coeffs
        .iter()
        .zip(exponents)
        .fold(0.0, |acc, (&c, &e)| acc + c / base.powf(e))
}

/* -------------------------------- tests -------------------------------- */
