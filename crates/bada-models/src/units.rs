use std::fmt;

/// Physical unit declared for a coefficient path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    SquareMetre,
    Kilogram,
    JoulePerKilogram,
    Kelvin,
    Dimensionless,
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::SquareMetre => "m^2",
            Unit::Kilogram => "kg",
            Unit::JoulePerKilogram => "J/kg",
            Unit::Kelvin => "K",
            Unit::Dimensionless => "",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/* ----------------------------- path → unit ------------------------------ */

const PARAM_UNITS: &[(&str, Unit)] = &[
    ("AFCM/S", Unit::SquareMetre),
    ("PFM/MREF", Unit::Kilogram),
    ("PFM/LHV", Unit::JoulePerKilogram),
    ("PFM/TFM/MCMB/kink", Unit::Kelvin),
    ("ACM/ALM/DLM/MTOW", Unit::Kilogram),
    ("ACM/ALM/DLM/MZFW", Unit::Kilogram),
    ("ACM/ALM/DLM/MLW", Unit::Kilogram),
    ("ACM/ALM/DLM/OEW", Unit::Kilogram),
    ("ACM/ALM/DLM/MFL", Unit::Kilogram),
];

/// Declared unit for `path`, or `None` when the path is unitless.
pub fn unit_for(path: &str) -> Option<Unit> {
    PARAM_UNITS
        .iter()
        .find(|(p, _)| *p == path)
        .map(|&(_, unit)| unit)
}

/* ------------------------------- values --------------------------------- */

/// A scalar magnitude tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Dimensionless => write!(f, "{}", self.value),
            unit => write!(f, "{} {unit}", self.value),
        }
    }
}

/// Resolved content of a coefficient path.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Scalar(Quantity),
    /// Coefficients in document order (lowest polynomial order first).
    Sequence(Vec<f64>),
    Text(String),
}

impl ParamValue {
    pub fn as_scalar(&self) -> Option<Quantity> {
        match self {
            ParamValue::Scalar(q) => Some(*q),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[f64]> {
        match self {
            ParamValue::Sequence(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(text) => Some(text),
            _ => None,
        }
    }
}
