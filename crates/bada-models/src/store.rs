use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::StoreError;
use crate::table::Element;
use crate::units::{unit_for, ParamValue, Quantity, Unit};

/// Coefficient table of a single aircraft type.
///
/// Lookups are memoized per path: the element tree is walked and its text
/// parsed on the first request only, later requests share the same value.
/// The table is immutable, so the memo never needs invalidating.
#[derive(Debug)]
pub struct CoefficientStore {
    aircraft_type: String,
    root: Element,
    resolved: RwLock<HashMap<String, Arc<ParamValue>>>,
}

impl CoefficientStore {
    pub fn new(aircraft_type: impl Into<String>, root: Element) -> Self {
        Self {
            aircraft_type: aircraft_type.into(),
            root,
            resolved: RwLock::new(HashMap::new()),
        }
    }

    /// Build a store straight from XML text.
    pub fn from_xml_str(aircraft_type: &str, xml: &str) -> Result<Self, StoreError> {
        let root = Element::parse(xml).map_err(|source| StoreError::Xml {
            aircraft: aircraft_type.to_owned(),
            source,
        })?;
        Ok(Self::new(aircraft_type, root))
    }

    pub fn aircraft_type(&self) -> &str {
        &self.aircraft_type
    }

    /// Resolve `path` to its value, parsing it on first use.
    pub fn get_param(&self, path: &str) -> Result<Arc<ParamValue>, StoreError> {
        if let Some(hit) = self
            .resolved
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
        {
            return Ok(Arc::clone(hit));
        }

        let value = Arc::new(self.resolve(path)?);
        log::debug!("{}: resolved `{path}`", self.aircraft_type);

        let mut resolved = self.resolved.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(resolved.entry(path.to_owned()).or_insert(value)))
    }

    /// Scalar at `path` with its unit.
    pub fn quantity(&self, path: &str) -> Result<Quantity, StoreError> {
        self.get_param(path)?
            .as_scalar()
            .ok_or_else(|| unexpected(path, "scalar"))
    }

    /// Scalar magnitude at `path`, in the unit declared for the path.
    pub fn scalar(&self, path: &str) -> Result<f64, StoreError> {
        self.quantity(path).map(|q| q.value)
    }

    /// Coefficient sequence at `path`, in document order.
    pub fn coefficients(&self, path: &str) -> Result<Vec<f64>, StoreError> {
        self.get_param(path)?
            .as_sequence()
            .map(<[f64]>::to_vec)
            .ok_or_else(|| unexpected(path, "coefficient sequence"))
    }

    /// Non-numeric text token at `path`.
    pub fn text(&self, path: &str) -> Result<String, StoreError> {
        self.get_param(path)?
            .as_text()
            .map(str::to_owned)
            .ok_or_else(|| unexpected(path, "text token"))
    }

    fn resolve(&self, path: &str) -> Result<ParamValue, StoreError> {
        let element = self
            .root
            .find(path)
            .ok_or_else(|| StoreError::PathNotFound {
                aircraft: self.aircraft_type.clone(),
                path: path.to_owned(),
            })?;

        if let Some(unit) = unit_for(path) {
            let value = parse_number(path, element.text.as_deref())?;
            return Ok(ParamValue::Scalar(Quantity { value, unit }));
        }

        if element.has_children() {
            let values = element
                .children
                .iter()
                .map(|child| parse_number(path, child.text.as_deref()))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(ParamValue::Sequence(values));
        }

        let text = element.text.clone().unwrap_or_default();
        Ok(match text.parse::<f64>() {
            Ok(value) => ParamValue::Scalar(Quantity {
                value,
                unit: Unit::Dimensionless,
            }),
            Err(_) => ParamValue::Text(text),
        })
    }
}

fn parse_number(path: &str, text: Option<&str>) -> Result<f64, StoreError> {
    let text = text.unwrap_or_default();
    text.parse::<f64>().map_err(|_| StoreError::MalformedValue {
        path: path.to_owned(),
        text: text.to_owned(),
    })
}

fn unexpected(path: &str, expected: &'static str) -> StoreError {
    StoreError::UnexpectedKind {
        path: path.to_owned(),
        expected,
    }
}
