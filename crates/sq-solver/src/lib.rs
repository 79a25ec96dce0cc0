//! Boyle's Law volume redistribution for compartment graphs.
//!
//! Given a reference snapshot and a target ambient pressure, the solver
//! compresses the aggregate gas volume by `P1 / P2`, keeps rigid compartments
//! at their reference volume, and splits the rest among compressible
//! compartments in proportion to their baseline (1 atm) volumes.

pub mod error;
pub mod solve;
pub mod sweep;

pub use error::{SolverError, SolverResult};
pub use solve::{SolveOptions, solve, solve_with_options};
pub use sweep::{PressureSweep, Spacing, solve_many};
