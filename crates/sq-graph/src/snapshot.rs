//! Immutable volume state at one ambient pressure.

use std::collections::BTreeMap;
use std::fmt;

use sq_core::Real;

use crate::error::{GraphError, GraphResult, check_pressure, check_volume};

/// Volume of every compartment at a given ambient pressure.
///
/// A snapshot is a plain value: it stores names and volumes only, with no
/// link back to the graph it came from. Pass the graph alongside it when
/// compartment metadata is needed. Entries iterate in name order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    volumes: BTreeMap<String, Real>,
    pressure: Real,
}

impl Snapshot {
    /// Build a snapshot from `(name, volume)` pairs at `pressure` (atm).
    ///
    /// Every volume and the pressure must be positive and finite; names must
    /// be unique.
    pub fn new<I, S>(volumes: I, pressure: Real) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (S, Real)>,
        S: Into<String>,
    {
        let pressure = check_pressure(pressure)?;
        let mut map = BTreeMap::new();
        for (name, volume) in volumes {
            let name = name.into();
            let volume = check_volume(&name, volume)?;
            if map.contains_key(&name) {
                return Err(GraphError::DuplicateName { name });
            }
            map.insert(name, volume);
        }
        Ok(Self {
            volumes: map,
            pressure,
        })
    }

    pub(crate) fn from_validated(volumes: BTreeMap<String, Real>, pressure: Real) -> Self {
        Self { volumes, pressure }
    }

    /// Ambient pressure in atm.
    pub fn pressure(&self) -> Real {
        self.pressure
    }

    pub fn volume(&self, name: &str) -> Option<Real> {
        self.volumes.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.volumes.contains_key(name)
    }

    /// `(name, volume)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Real)> + '_ {
        self.volumes.iter().map(|(name, v)| (name.as_str(), *v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.volumes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    pub fn total_volume(&self) -> Real {
        sq_core::sum(self.volumes.values().copied())
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "At {:.2} atm (total {:.2} ml)",
            self.pressure,
            self.total_volume()
        )?;
        for (name, volume) in self.iter() {
            writeln!(f, "{name}: {volume:.2}")?;
        }
        Ok(())
    }
}
