//! Project file validation logic.
//!
//! Validation is the gate between untrusted documents and the estimator:
//! the estimator itself accepts any finite reals, so everything that
//! deserves rejection is rejected here. Findings that are suspicious but
//! computable (an outdoor design temperature above the indoor reference,
//! empty containers) come back as warnings instead.

use crate::schema::{BuildingDef, FloorDef, ProjectFile, RoomDef};
use hl_core::{Real, INDOOR_REFERENCE_TEMP_C};
use std::collections::HashSet;
use std::fmt;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version} (latest is {latest})")]
    UnsupportedVersion { version: u32, latest: u32 },

    #[error("Empty name in {context}")]
    EmptyName { context: String },

    #[error("Duplicate name: {name} in {context}")]
    DuplicateName { name: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: Real,
        reason: String,
    },
}

/// Non-fatal findings. Computation proceeds; callers decide whether and
/// how to surface these.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationWarning {
    /// `norm_outside_temp` above the indoor reference: heat loss will be
    /// negative, which is mathematically valid but physically
    /// nonsensical.
    WarmClimate {
        building: String,
        norm_outside_temp: Real,
    },
    BuildingWithoutFloors { building: String },
    FloorWithoutRooms { building: String, floor: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::WarmClimate {
                building,
                norm_outside_temp,
            } => write!(
                f,
                "building '{building}': norm_outside_temp {norm_outside_temp} °C exceeds the \
                 {INDOOR_REFERENCE_TEMP_C} °C indoor reference; heat loss will be negative"
            ),
            ValidationWarning::BuildingWithoutFloors { building } => {
                write!(f, "building '{building}' has no floors")
            }
            ValidationWarning::FloorWithoutRooms { building, floor } => {
                write!(f, "floor '{floor}' in building '{building}' has no rooms")
            }
        }
    }
}

pub fn validate_project(file: &ProjectFile) -> Result<Vec<ValidationWarning>, ValidationError> {
    if file.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
            latest: crate::LATEST_VERSION,
        });
    }
    require_name(&file.name, "project")?;

    let mut warnings = Vec::new();
    let mut building_names = HashSet::new();
    for building in &file.buildings {
        require_name(&building.name, "buildings")?;
        if !building_names.insert(&building.name) {
            return Err(ValidationError::DuplicateName {
                name: building.name.clone(),
                context: "buildings".to_string(),
            });
        }
        validate_building(building, &mut warnings)?;
    }
    Ok(warnings)
}

fn validate_building(
    building: &BuildingDef,
    warnings: &mut Vec<ValidationWarning>,
) -> Result<(), ValidationError> {
    require_finite(
        building.norm_outside_temp,
        format!("building '{}' norm_outside_temp", building.name),
    )?;
    if building.norm_outside_temp > INDOOR_REFERENCE_TEMP_C {
        warnings.push(ValidationWarning::WarmClimate {
            building: building.name.clone(),
            norm_outside_temp: building.norm_outside_temp,
        });
    }
    if building.floors.is_empty() {
        warnings.push(ValidationWarning::BuildingWithoutFloors {
            building: building.name.clone(),
        });
    }

    let mut floor_names = HashSet::new();
    for floor in &building.floors {
        require_name(&floor.name, &format!("building '{}' floors", building.name))?;
        if !floor_names.insert(&floor.name) {
            return Err(ValidationError::DuplicateName {
                name: floor.name.clone(),
                context: format!("building '{}' floors", building.name),
            });
        }
        validate_floor(building, floor, warnings)?;
    }
    Ok(())
}

fn validate_floor(
    building: &BuildingDef,
    floor: &FloorDef,
    warnings: &mut Vec<ValidationWarning>,
) -> Result<(), ValidationError> {
    if floor.rooms.is_empty() {
        warnings.push(ValidationWarning::FloorWithoutRooms {
            building: building.name.clone(),
            floor: floor.name.clone(),
        });
    }
    let mut room_names = HashSet::new();
    for room in &floor.rooms {
        let context = format!("floor '{}' rooms", floor.name);
        require_name(&room.name, &context)?;
        if !room_names.insert(&room.name) {
            return Err(ValidationError::DuplicateName {
                name: room.name.clone(),
                context,
            });
        }
        validate_room(room)?;
    }
    Ok(())
}

fn validate_room(room: &RoomDef) -> Result<(), ValidationError> {
    for (label, value) in room.areas.fields() {
        let field = format!("room '{}' {label}", room.name);
        require_finite(value, field.clone())?;
        if value < 0.0 {
            return Err(ValidationError::InvalidValue {
                field,
                value,
                reason: "area must be non-negative".to_string(),
            });
        }
    }
    Ok(())
}

fn require_name(name: &str, context: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::EmptyName {
            context: context.to_string(),
        })
    } else {
        Ok(())
    }
}

fn require_finite(value: Real, field: String) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be finite".to_string(),
        })
    }
}
