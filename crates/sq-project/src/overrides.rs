//! Baseline volume overrides supplied by the user (`lungs=4000`).

use std::fmt;
use std::str::FromStr;

use crate::schema::ModelDef;
use crate::validate::{ValidationError, check_volume};

/// Replacement baseline volume for one compartment.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeOverride {
    pub name: String,
    pub volume_ml: f64,
}

impl FromStr for VolumeOverride {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidValue {
            field: "override".to_string(),
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (name, volume) = s
            .split_once('=')
            .ok_or_else(|| invalid("expected NAME=VOLUME_ML"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid("compartment name is empty"));
        }
        let volume_ml: f64 = volume
            .trim()
            .parse()
            .map_err(|_| invalid("volume is not a number"))?;
        check_volume(name, volume_ml)?;

        Ok(Self {
            name: name.to_string(),
            volume_ml,
        })
    }
}

impl fmt::Display for VolumeOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.volume_ml)
    }
}

/// Apply overrides in order; later entries win.
///
/// Unknown compartments and non-positive volumes are rejected and leave
/// `model` untouched.
pub fn apply_overrides(
    model: &mut ModelDef,
    overrides: &[VolumeOverride],
) -> Result<(), ValidationError> {
    for o in overrides {
        if model.compartment(&o.name).is_none() {
            return Err(ValidationError::MissingReference {
                id: o.name.clone(),
                context: "volume override".to_string(),
            });
        }
        check_volume(&o.name, o.volume_ml)?;
    }
    for o in overrides {
        if let Some(c) = model.compartment_mut(&o.name) {
            c.initial_volume_ml = o.volume_ml;
        }
    }
    Ok(())
}
