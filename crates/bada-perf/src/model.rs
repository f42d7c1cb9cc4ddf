use std::sync::Arc;

use bada_models::{AircraftRegistry, CoefficientStore};

use crate::drag::Drag;
use crate::fuel::FuelFlow;
use crate::phase::PhaseThresholds;
use crate::thrust::Thrust;
use crate::Result;

/// Drag, thrust and fuel-flow components of one aircraft type, sharing one store.
#[derive(Debug, Clone)]
pub struct AircraftModel {
    store: Arc<CoefficientStore>,
    fuel_flow: FuelFlow,
}

impl AircraftModel {
    pub fn new(store: Arc<CoefficientStore>) -> Self {
        Self::with_thresholds(store, PhaseThresholds::default())
    }

    pub fn with_thresholds(store: Arc<CoefficientStore>, phases: PhaseThresholds) -> Self {
        Self {
            fuel_flow: FuelFlow::with_thresholds(Arc::clone(&store), phases),
            store,
        }
    }

    /// Model for `aircraft_type`, loading its table through `registry` if needed.
    pub fn load(registry: &AircraftRegistry, aircraft_type: &str) -> Result<Self> {
        Ok(Self::new(registry.get_aircraft(aircraft_type)?))
    }

    pub fn aircraft_type(&self) -> &str {
        self.store.aircraft_type()
    }

    pub fn store(&self) -> &Arc<CoefficientStore> {
        &self.store
    }

    pub fn drag(&self) -> &Drag {
        self.fuel_flow.drag()
    }

    pub fn thrust(&self) -> &Thrust {
        self.fuel_flow.thrust()
    }

    pub fn fuel_flow(&self) -> &FuelFlow {
        &self.fuel_flow
    }
}
