//! Graph-specific error types.

use sq_core::Real;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Compartment graph and snapshot construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Duplicate compartment name: {name}")]
    DuplicateName { name: String },

    #[error("Invalid volume for {name}: {volume} (must be positive and finite)")]
    InvalidVolume { name: String, volume: Real },

    #[error("Invalid pressure: {pressure} (must be positive and finite)")]
    InvalidPressure { pressure: Real },

    #[error("Unknown compartment: {name}")]
    UnknownCompartment { name: String },

    #[error("Compartment {name} cannot be connected to itself")]
    SelfConnection { name: String },
}

/// Check a compartment volume, returning it unchanged when valid.
pub(crate) fn check_volume(name: &str, volume: Real) -> GraphResult<Real> {
    sq_core::ensure_positive(volume, "volume").map_err(|_| GraphError::InvalidVolume {
        name: name.to_string(),
        volume,
    })
}

/// Check an ambient pressure, returning it unchanged when valid.
pub(crate) fn check_pressure(pressure: Real) -> GraphResult<Real> {
    sq_core::ensure_positive(pressure, "pressure")
        .map_err(|_| GraphError::InvalidPressure { pressure })
}
