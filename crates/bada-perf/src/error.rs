use bada_models::StoreError;
use thiserror::Error;

/// Errors raised by the performance components.
#[derive(Debug, Error)]
pub enum PerformanceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0} is not implemented by the performance model")]
    NotImplemented(&'static str),
    #[error("Mach {mach:.3} is outside the clean drag envelope (M_max {mach_max:.3})")]
    DomainViolation { mach: f64, mach_max: f64 },
    #[error("no lift solution at Mach {mach:.3} with path angle {path_angle_deg:.1} deg")]
    DegenerateState { mach: f64, path_angle_deg: f64 },
}
