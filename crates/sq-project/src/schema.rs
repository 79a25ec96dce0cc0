//! Model file schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDef {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub compartments: Vec<CompartmentDef>,
    #[serde(default)]
    pub connections: Vec<ConnectionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompartmentDef {
    pub name: String,
    /// Baseline volume at 1 atm.
    pub initial_volume_ml: f64,
    pub compressible: bool,
}

/// Undirected connection between two compartments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionDef {
    pub a: String,
    pub b: String,
}

impl ModelDef {
    pub fn compartment(&self, name: &str) -> Option<&CompartmentDef> {
        self.compartments.iter().find(|c| c.name == name)
    }

    pub fn compartment_mut(&mut self, name: &str) -> Option<&mut CompartmentDef> {
        self.compartments.iter_mut().find(|c| c.name == name)
    }
}
