#![allow(dead_code)]

use std::path::PathBuf;

use bada_perf::{AircraftModel, AircraftRegistry};

/// Synthetic aircraft under tests/data.
pub const AIRCRAFT: &str = "TEST-JET";
/// m_ref · g0 of the fixture [N]
pub const W_MREF: f64 = 64_000.0 * 9.806_65;
/// Fixture fuel lower heating value [J/kg]
pub const LHV: f64 = 43_030_000.0;

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

pub fn registry() -> AircraftRegistry {
    AircraftRegistry::from_dir(data_dir())
}

pub fn model() -> AircraftModel {
    AircraftModel::load(&registry(), AIRCRAFT).expect("fixture table loads")
}
