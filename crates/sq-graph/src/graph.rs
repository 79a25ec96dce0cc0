//! Core compartment graph.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use sq_core::{CompartmentId, Real};

use crate::error::{GraphError, GraphResult, check_volume};
use crate::snapshot::Snapshot;

/// A gas-filled space (lungs, sinus, middle ear, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Compartment {
    pub id: CompartmentId,
    pub name: String,
    /// Reference volume at 1 atm, in ml.
    pub initial_volume: Real,
    /// Rigid compartments keep their volume regardless of pressure.
    pub compressible: bool,
}

/// The set of compartments and their connectivity.
///
/// Compartments are stored in insertion order and addressed by
/// `CompartmentId`. Connectivity is a symmetric, irreflexive adjacency
/// relation kept as one id set per compartment; it describes topology for
/// display and never affects volume redistribution.
#[derive(Debug, Clone, Default)]
pub struct CompartmentGraph {
    compartments: Vec<Compartment>,
    by_name: HashMap<String, CompartmentId>,
    adjacency: Vec<BTreeSet<CompartmentId>>,
}

impl CompartmentGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a compartment and return its ID.
    pub fn add_compartment(
        &mut self,
        name: impl Into<String>,
        initial_volume: Real,
        compressible: bool,
    ) -> GraphResult<CompartmentId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(GraphError::DuplicateName { name });
        }
        let initial_volume = check_volume(&name, initial_volume)?;

        let id = CompartmentId::from_index(self.compartments.len() as u32);
        self.by_name.insert(name.clone(), id);
        self.compartments.push(Compartment {
            id,
            name,
            initial_volume,
            compressible,
        });
        self.adjacency.push(BTreeSet::new());
        Ok(id)
    }

    /// Connect two compartments by name.
    ///
    /// Symmetric; connecting an already connected pair is a no-op.
    pub fn connect(&mut self, a: &str, b: &str) -> GraphResult<()> {
        let ia = self.require(a)?;
        let ib = self.require(b)?;
        if ia == ib {
            return Err(GraphError::SelfConnection {
                name: a.to_string(),
            });
        }
        self.adjacency[ia.slot()].insert(ib);
        self.adjacency[ib.slot()].insert(ia);
        Ok(())
    }

    /// Change a compartment's baseline volume.
    ///
    /// Snapshots produced earlier are values and keep their old volumes.
    pub fn set_initial_volume(&mut self, name: &str, volume: Real) -> GraphResult<()> {
        let id = self.require(name)?;
        let volume = check_volume(name, volume)?;
        self.compartments[id.slot()].initial_volume = volume;
        Ok(())
    }

    /// Snapshot of every compartment's current baseline volume at 1 atm.
    pub fn initial_snapshot(&self) -> Snapshot {
        let volumes: BTreeMap<String, Real> = self
            .compartments
            .iter()
            .map(|c| (c.name.clone(), c.initial_volume))
            .collect();
        Snapshot::from_validated(volumes, sq_core::constants::SURFACE_PRESSURE_ATM)
    }

    /// All compartments in insertion order.
    pub fn compartments(&self) -> &[Compartment] {
        &self.compartments
    }

    /// Get a compartment by ID (returns None if ID out of bounds).
    pub fn compartment(&self, id: CompartmentId) -> Option<&Compartment> {
        self.compartments.get(id.slot())
    }

    /// Look up a compartment by name.
    pub fn find(&self, name: &str) -> Option<&Compartment> {
        self.id_of(name).and_then(|id| self.compartment(id))
    }

    pub fn id_of(&self, name: &str) -> Option<CompartmentId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.compartments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compartments.is_empty()
    }

    /// IDs of the compartments directly connected to `id`, in ID order.
    pub fn neighbors(&self, id: CompartmentId) -> impl Iterator<Item = CompartmentId> + '_ {
        self.adjacency
            .get(id.slot())
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Every undirected connection once, as `(lower, higher)` ID pairs.
    pub fn connections(&self) -> Vec<(CompartmentId, CompartmentId)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, set)| {
                let from = CompartmentId::from_index(i as u32);
                set.iter()
                    .copied()
                    .filter(move |to| from < *to)
                    .map(move |to| (from, to))
            })
            .collect()
    }

    pub fn are_connected(&self, a: CompartmentId, b: CompartmentId) -> bool {
        self.adjacency
            .get(a.slot())
            .is_some_and(|set| set.contains(&b))
    }

    /// Sum of all baseline volumes.
    pub fn total_initial_volume(&self) -> Real {
        sq_core::sum(self.compartments.iter().map(|c| c.initial_volume))
    }

    /// Sum of the baseline volumes of compressible compartments.
    pub fn compressible_capacity(&self) -> Real {
        sq_core::sum(
            self.compartments
                .iter()
                .filter(|c| c.compressible)
                .map(|c| c.initial_volume),
        )
    }

    pub fn compressible_count(&self) -> usize {
        self.compartments.iter().filter(|c| c.compressible).count()
    }

    pub fn rigid_count(&self) -> usize {
        self.len() - self.compressible_count()
    }

    fn require(&self, name: &str) -> GraphResult<CompartmentId> {
        self.id_of(name).ok_or_else(|| GraphError::UnknownCompartment {
            name: name.to_string(),
        })
    }
}
