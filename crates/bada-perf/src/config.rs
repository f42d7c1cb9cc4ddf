//! Configuration for locating coefficient tables and tuning phase thresholds.

use std::path::{Path, PathBuf};

use bada_models::AircraftRegistry;
use serde::Deserialize;
use thiserror::Error;

use crate::model::AircraftModel;
use crate::phase::PhaseThresholds;
use crate::Result;

/// Environment variable naming the coefficient table directory.
pub const BADA_PATH_ENV: &str = "BADA_PATH";

/// Performance model settings, read from TOML or JSON.
///
/// ```toml
/// bada_path = "/opt/bada/4.2"
///
/// [phases]
/// takeoff_ft = 400
/// landing_ft = 3000
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceConfig {
    /// Directory holding `{type}/{type}.xml`.
    pub bada_path: PathBuf,
    #[serde(default)]
    pub phases: PhaseThresholds,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no coefficient directory configured; set {BADA_PATH_ENV}")]
    MissingDataPath,
}

impl PerformanceConfig {
    pub fn new(bada_path: impl Into<PathBuf>) -> Self {
        Self {
            bada_path: bada_path.into(),
            phases: PhaseThresholds::default(),
        }
    }

    /// Load from a `.toml` file, or JSON for any other extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "toml") {
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(serde_json::from_str(&contents)?)
        }
    }

    /// Defaults with `bada_path` taken from [`BADA_PATH_ENV`].
    pub fn from_env() -> Result<Self, ConfigError> {
        std::env::var_os(BADA_PATH_ENV)
            .filter(|p| !p.is_empty())
            .map(Self::new)
            .ok_or(ConfigError::MissingDataPath)
    }

    /// Registry reading tables from `bada_path`.
    pub fn registry(&self) -> AircraftRegistry {
        AircraftRegistry::from_dir(&self.bada_path)
    }

    /// Model for `aircraft_type` with this configuration's phase thresholds.
    pub fn load_model(
        &self,
        registry: &AircraftRegistry,
        aircraft_type: &str,
    ) -> Result<AircraftModel> {
        let store = registry.get_aircraft(aircraft_type)?;
        Ok(AircraftModel::with_thresholds(store, self.phases))
    }
}
