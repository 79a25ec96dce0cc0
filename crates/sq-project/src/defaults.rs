//! Built-in models.

use crate::schema::{CompartmentDef, ConnectionDef, ModelDef};
use crate::validate::LATEST_VERSION;

/// Air spaces of an adult diver's head and chest.
///
/// Lungs and nasopharynx compress; sinuses and middle ear are bounded by
/// bone. Everything connects through the nasopharynx.
pub fn default_model() -> ModelDef {
    let compartment = |name: &str, initial_volume_ml: f64, compressible: bool| CompartmentDef {
        name: name.to_string(),
        initial_volume_ml,
        compressible,
    };
    let connection = |a: &str, b: &str| ConnectionDef {
        a: a.to_string(),
        b: b.to_string(),
    };

    ModelDef {
        version: LATEST_VERSION,
        name: "Human air spaces".to_string(),
        compartments: vec![
            compartment("lungs", 5000.0, true),
            compartment("nasopharynx", 250.0, true),
            compartment("sinuses", 90.0, false),
            compartment("middle_ear", 1.0, false),
        ],
        connections: vec![
            connection("lungs", "nasopharynx"),
            connection("nasopharynx", "sinuses"),
            connection("nasopharynx", "middle_ear"),
        ],
    }
}
