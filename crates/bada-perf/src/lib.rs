//! bada-perf
//!
//! Aircraft performance from the parametric BADA 4 model:
//! - [`Drag`]: lift coefficient, clean drag polar, non-clean (flaps/gear) drag.
//! - [`Thrust`]: max-climb (flat or temperature rated), takeoff, cruise and idle descent.
//! - [`FuelFlow`]: fuel mass flow per flight phase, and fuel flow at a given thrust.
//!
//! Components share one [`bada_models::CoefficientStore`] per aircraft type,
//! normally obtained from an [`bada_models::AircraftRegistry`]. Drag feeds
//! cruise thrust, thrust coefficients feed fuel flow.
//!
//! Conventions:
//! - Physical inputs and outputs are `uom` quantities (altitude `Length`,
//!   airspeed `Velocity`, mass `Mass`, angles `Angle`, temperature
//!   `ThermodynamicTemperature`, thrust/drag `Force`, fuel flow `MassRate`).
//! - Dimensionless values (Mach, δ, θ, C_L, C_D, C_T, C_F, throttle) are `f64`.
//! - All formulas are evaluated in SI internally.

mod config;
mod drag;
mod error;
mod fuel;
mod model;
mod phase;
mod state;
mod thrust;

pub use config::{ConfigError, PerformanceConfig, BADA_PATH_ENV};
pub use drag::{drag_force, CleanDrag, Drag, OUT_OF_ENVELOPE_SENTINEL};
pub use error::PerformanceError;
pub use fuel::{FuelFlow, MIN_THRUST_RATIO};
pub use model::AircraftModel;
pub use phase::{FlightPhase, PhaseThresholds};
pub use state::FlightState;
pub use thrust::{ThrottleRating, Thrust, LOW_ALTITUDE_IDLE_THROTTLE, LOW_IDLE_ALTITUDE_FT};

pub use bada_models::{AircraftRegistry, CoefficientStore, StoreError};

pub type Result<T, E = PerformanceError> = std::result::Result<T, E>;
