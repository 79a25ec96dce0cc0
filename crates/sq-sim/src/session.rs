//! Session object holding the graph and the current snapshot.

use sq_core::constants::{MAX_DEPTH_M, SURFACE_PRESSURE_ATM};
use sq_core::{Real, atm, depth_to_pressure, in_atm, in_m, m, pressure_to_depth};
use sq_graph::{CompartmentGraph, Snapshot};
use tracing::debug;

use crate::error::{SimError, SimResult};

/// A diver's air spaces at the current ambient pressure.
///
/// Every pressure change is solved from the graph's fresh baseline snapshot.
/// Results do not depend on the path taken, so no pressure history is kept.
/// A failed update leaves the session unchanged.
#[derive(Debug, Clone)]
pub struct DiveSession {
    graph: CompartmentGraph,
    current: Snapshot,
}

impl DiveSession {
    /// Start a session at the surface.
    pub fn new(graph: CompartmentGraph) -> Self {
        let current = graph.initial_snapshot();
        Self { graph, current }
    }

    pub fn graph(&self) -> &CompartmentGraph {
        &self.graph
    }

    pub fn into_graph(self) -> CompartmentGraph {
        self.graph
    }

    /// Snapshot at the current ambient pressure.
    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    /// Current ambient pressure in atm.
    pub fn pressure(&self) -> Real {
        self.current.pressure()
    }

    /// Seawater depth in meters matching the current pressure.
    ///
    /// `None` when the pressure is below surface pressure.
    pub fn depth(&self) -> Option<Real> {
        pressure_to_depth(atm(self.pressure())).ok().map(in_m)
    }

    /// Move to an ambient pressure (atm).
    pub fn set_pressure(&mut self, pressure: Real) -> SimResult<&Snapshot> {
        let next = sq_solver::solve(&self.graph, pressure, None)?;
        debug!(
            pressure,
            total_volume = next.total_volume(),
            "session pressure changed"
        );
        self.current = next;
        Ok(&self.current)
    }

    /// Move to a seawater depth in meters.
    ///
    /// Depth is clamped to `[0, MAX_DEPTH_M]`.
    pub fn set_depth(&mut self, depth_m: Real) -> SimResult<&Snapshot> {
        if !depth_m.is_finite() {
            return Err(SimError::InvalidArg {
                what: "depth must be finite",
            });
        }
        let clamped = depth_m.clamp(0.0, MAX_DEPTH_M);
        let pressure = in_atm(depth_to_pressure(m(clamped))?);
        self.set_pressure(pressure)
    }

    /// Return to the surface.
    pub fn surface(&mut self) -> &Snapshot {
        self.current = self.graph.initial_snapshot();
        &self.current
    }

    /// Change a compartment's baseline volume and recompute the current
    /// snapshot at the current pressure.
    ///
    /// If the new baseline cannot be solved at the current pressure the old
    /// volume is restored and the error returned.
    pub fn set_initial_volume(&mut self, name: &str, volume: Real) -> SimResult<&Snapshot> {
        let previous = self
            .graph
            .find(name)
            .map(|c| c.initial_volume)
            .ok_or_else(|| sq_graph::GraphError::UnknownCompartment {
                name: name.to_string(),
            })?;
        self.graph.set_initial_volume(name, volume)?;

        match sq_solver::solve(&self.graph, self.pressure(), None) {
            Ok(next) => {
                debug!(compartment = name, volume, "baseline volume changed");
                self.current = next;
                Ok(&self.current)
            }
            Err(err) => {
                self.graph.set_initial_volume(name, previous)?;
                Err(err.into())
            }
        }
    }

    /// Whether the session is at surface pressure.
    pub fn at_surface(&self) -> bool {
        self.pressure() == SURFACE_PRESSURE_ATM
    }
}
