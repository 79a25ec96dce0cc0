//! Error types for solver operations.

use sq_core::{Real, SqError};
use sq_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while redistributing volumes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid target pressure: {pressure} (must be positive and finite)")]
    InvalidPressure { pressure: Real },

    #[error("Snapshot references unknown compartment: {name}")]
    UnknownCompartment { name: String },

    #[error("Snapshot has no volume for compartment: {name}")]
    IncompleteSnapshot { name: String },

    #[error("No compressible capacity to absorb {unabsorbed} ml")]
    NoCompressibleCapacity { unabsorbed: Real },

    #[error(
        "Rigid compartments ({rigid_total} ml) leave no room in the compressed total ({new_total} ml)"
    )]
    CompressibleCollapse { rigid_total: Real, new_total: Real },

    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: &'static str },

    #[error("Numeric error: {0}")]
    Numeric(#[from] SqError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type SolverResult<T> = Result<T, SolverError>;
