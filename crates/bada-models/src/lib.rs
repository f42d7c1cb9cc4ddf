//! bada-models
//!
//! Coefficient tables for the parametric performance model. Each aircraft
//! type has one XML file, `{type}/{type}.xml`, whose elements are addressed
//! by slash-delimited paths such as `PFM/TFM/MCMB/kink`.
//!
//! A path resolves to one of:
//!   - a scalar tagged with the unit declared for that path,
//!   - an ordered sequence of coefficients (children of the element, in
//!     document order, which is also polynomial order),
//!   - a raw text token for non-numeric metadata.
//!
//! Exports:
//!   - [`CoefficientStore`]: one parsed table, with lazily memoized lookups
//!   - [`AircraftRegistry`]: load-once-per-type cache over a [`TableLoader`]
//!   - [`DirectoryLoader`]: the on-disk `{root}/{type}/{type}.xml` layout

mod error;
mod registry;
mod store;
mod table;
mod units;

pub use error::StoreError;
pub use registry::{AircraftRegistry, DirectoryLoader, TableLoader};
pub use store::CoefficientStore;
pub use table::Element;
pub use units::{unit_for, ParamValue, Quantity, Unit};

/// Well-known coefficient paths.
pub mod paths {
    /// Reference wing surface [m²]
    pub const WING_AREA: &str = "AFCM/S";
    /// Maximum Mach of the clean drag polar
    pub const CLEAN_M_MAX: &str = "AFCM/Configuration/LGUP/DPM_clean/M_max";
    /// Clean drag polar, 15 coefficients
    pub const CLEAN_CD: &str = "AFCM/Configuration/LGUP/DPM_clean/CD_clean";
    /// Clean drag scaling factor
    pub const CLEAN_SCALAR: &str = "AFCM/Configuration/LGUP/DPM_clean/scalar";
    /// Reference mass [kg]
    pub const MREF: &str = "PFM/MREF";
    /// Fuel lower heating value [J/kg]
    pub const LHV: &str = "PFM/LHV";
    /// Maximum takeoff mass [kg]
    pub const MTOW: &str = "ACM/ALM/DLM/MTOW";
    /// Non-idle thrust coefficients, rows of 6
    pub const CT: &str = "PFM/TFM/CT";
    /// Non-idle fuel coefficients, rows of 5
    pub const CF: &str = "PFM/TFM/CF";
    /// Idle thrust coefficients, rows of 4
    pub const IDLE_CT: &str = "PFM/TFM/LIDL/CT";
    /// Idle fuel coefficients, rows of 3
    pub const IDLE_CF: &str = "PFM/TFM/LIDL/CF";
    /// Temperature deviation separating flat and temperature rating [K]
    pub const KINK: &str = "PFM/TFM/MCMB/kink";
    /// Flat-rated throttle coefficients, rows of 6
    pub const FLAT_RATING: &str = "PFM/TFM/MCMB/flat_rating";
    /// Temperature-rated throttle coefficients, rows of 5
    pub const TEMP_RATING: &str = "PFM/TFM/MCMB/temp_rating";

    /// Non-clean drag quadratic for the given landing-gear state.
    pub fn nonclean_cd(landing_gear_down: bool) -> String {
        let lg = if landing_gear_down { "LGDN" } else { "LGUP" };
        format!("AFCM/Configuration/{lg}/DPM_nonclean/CD_nonclean")
    }
}
