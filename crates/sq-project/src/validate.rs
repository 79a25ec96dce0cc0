//! Model validation logic.

use crate::schema::{CompartmentDef, ConnectionDef, ModelDef};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_model(model: &ModelDef) -> Result<(), ValidationError> {
    if model.version == 0 || model.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: model.version,
        });
    }

    let mut names = HashSet::new();
    for compartment in &model.compartments {
        if !names.insert(compartment.name.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: compartment.name.clone(),
                context: format!("model '{}' compartments", model.name),
            });
        }
        validate_compartment(compartment)?;
    }

    for connection in &model.connections {
        validate_connection(connection, &names, &model.name)?;
    }

    Ok(())
}

fn validate_compartment(compartment: &CompartmentDef) -> Result<(), ValidationError> {
    if compartment.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: format!("{:?}", compartment.name),
            reason: "must not be empty".to_string(),
        });
    }
    check_volume(&compartment.name, compartment.initial_volume_ml)
}

/// A baseline volume must be positive and finite.
pub(crate) fn check_volume(name: &str, volume_ml: f64) -> Result<(), ValidationError> {
    if sq_core::ensure_positive(volume_ml, "initial_volume_ml").is_err() {
        return Err(ValidationError::InvalidValue {
            field: format!("{name}.initial_volume_ml"),
            value: volume_ml.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}

fn validate_connection(
    connection: &ConnectionDef,
    names: &HashSet<&str>,
    model_name: &str,
) -> Result<(), ValidationError> {
    for end in [&connection.a, &connection.b] {
        if !names.contains(end.as_str()) {
            return Err(ValidationError::MissingReference {
                id: end.clone(),
                context: format!("model '{model_name}' connections"),
            });
        }
    }
    if connection.a == connection.b {
        return Err(ValidationError::InvalidValue {
            field: "connection".to_string(),
            value: format!("{} - {}", connection.a, connection.b),
            reason: "a compartment cannot connect to itself".to_string(),
        });
    }
    Ok(())
}
