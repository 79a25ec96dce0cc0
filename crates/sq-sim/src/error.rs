//! Error types for session operations.

use thiserror::Error;

/// Errors encountered while driving a dive session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Solver(#[from] sq_solver::SolverError),

    #[error(transparent)]
    Graph(#[from] sq_graph::GraphError),

    #[error(transparent)]
    Core(#[from] sq_core::SqError),
}

pub type SimResult<T> = Result<T, SimError>;
