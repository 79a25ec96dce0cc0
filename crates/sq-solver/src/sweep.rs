//! Pressure sweeps.
//!
//! Solves one reference snapshot at many target pressures, e.g. to tabulate
//! compartment volumes over a descent. Each point is an independent solve,
//! so points are evaluated in parallel.

use rayon::prelude::*;
use sq_core::Real;
use sq_graph::{CompartmentGraph, Snapshot};
use tracing::debug;

use crate::error::{SolverError, SolverResult};
use crate::solve::{SolveOptions, solve_with_options};

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// A range of target pressures (atm).
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSweep {
    start: Real,
    end: Real,
    points: usize,
    spacing: Spacing,
}

impl PressureSweep {
    /// Create a sweep from `start` to `end` (inclusive) with `points` points.
    pub fn new(start: Real, end: Real, points: usize, spacing: Spacing) -> SolverResult<Self> {
        for pressure in [start, end] {
            if !pressure.is_finite() || pressure <= 0.0 {
                return Err(SolverError::InvalidPressure { pressure });
            }
        }
        if points < 2 {
            return Err(SolverError::InvalidSweep {
                what: "sweep must have at least 2 points",
            });
        }
        if (start - end).abs() < 1e-12 {
            return Err(SolverError::InvalidSweep {
                what: "start and end pressures must be different",
            });
        }
        Ok(Self {
            start,
            end,
            points,
            spacing,
        })
    }

    pub fn linear(start: Real, end: Real, points: usize) -> SolverResult<Self> {
        Self::new(start, end, points, Spacing::Linear)
    }

    /// Generate all target pressures in sweep order.
    pub fn pressures(&self) -> Vec<Real> {
        let n = self.points;
        let mut out: Vec<Real> = match self.spacing {
            Spacing::Linear => {
                let delta = (self.end - self.start) / (n - 1) as Real;
                (0..n).map(|i| self.start + i as Real * delta).collect()
            }
            Spacing::Logarithmic => {
                let log_start = self.start.ln();
                let log_delta = (self.end.ln() - log_start) / (n - 1) as Real;
                (0..n)
                    .map(|i| (log_start + i as Real * log_delta).exp())
                    .collect()
            }
        };
        // Ensure exact endpoints
        out[0] = self.start;
        out[n - 1] = self.end;
        out
    }

    /// Solve every point of the sweep from `reference` (graph baseline if `None`).
    ///
    /// Results are returned in sweep order; the first failing point aborts
    /// the sweep.
    pub fn run(
        &self,
        graph: &CompartmentGraph,
        reference: Option<&Snapshot>,
    ) -> SolverResult<Vec<Snapshot>> {
        solve_many(graph, &self.pressures(), reference, &SolveOptions::default())
    }
}

/// Solve the same reference at each of `pressures`, in parallel.
pub fn solve_many(
    graph: &CompartmentGraph,
    pressures: &[Real],
    reference: Option<&Snapshot>,
    options: &SolveOptions,
) -> SolverResult<Vec<Snapshot>> {
    let initial;
    let reference = match reference {
        Some(snapshot) => snapshot,
        None => {
            initial = graph.initial_snapshot();
            &initial
        }
    };
    debug!(
        points = pressures.len(),
        compartments = graph.len(),
        "running pressure sweep"
    );
    pressures
        .par_iter()
        .map(|&p| solve_with_options(graph, p, Some(reference), options))
        .collect()
}
