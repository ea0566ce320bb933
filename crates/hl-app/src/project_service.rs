//! Project file loading, saving, validation, and introspection.

use std::path::Path;

use hl_project::schema::ProjectFile;
use hl_project::ValidationWarning;

use crate::error::{AppError, AppResult};

/// Summary of a building for listing.
#[derive(Debug, Clone)]
pub struct BuildingSummary {
    pub name: String,
    pub location: String,
    pub norm_outside_temp: f64,
    pub floor_count: usize,
    pub room_count: usize,
}

/// Load a project file, YAML or JSON by extension.
///
/// Loading validates; a file that loads is structurally sound, though it
/// may still carry data-quality warnings (re-run
/// [`validate_project_file`] to see them).
pub fn load_project_file(path: &Path) -> AppResult<ProjectFile> {
    match extension(path)? {
        Format::Yaml => Ok(hl_project::load_yaml(path)?),
        Format::Json => Ok(hl_project::load_json(path)?),
    }
}

/// Save a project file, YAML or JSON by extension.
pub fn save_project_file(path: &Path, file: &ProjectFile) -> AppResult<()> {
    match extension(path)? {
        Format::Yaml => Ok(hl_project::save_yaml(path, file)?),
        Format::Json => Ok(hl_project::save_json(path, file)?),
    }
}

/// Load and validate, returning the file together with its warnings.
///
/// Warnings are also emitted through `tracing` so they reach logs even
/// when the caller ignores the return value.
pub fn validate_project_file(path: &Path) -> AppResult<(ProjectFile, Vec<ValidationWarning>)> {
    let file = load_project_file(path)?;
    let warnings = hl_project::validate_project(&file)?;
    for warning in &warnings {
        tracing::warn!(project = %file.name, "{warning}");
    }
    Ok((file, warnings))
}

/// List all buildings in the file with floor/room counts.
pub fn list_buildings(file: &ProjectFile) -> Vec<BuildingSummary> {
    file.buildings
        .iter()
        .map(|building| BuildingSummary {
            name: building.name.clone(),
            location: building.location.clone(),
            norm_outside_temp: building.norm_outside_temp,
            floor_count: building.floors.len(),
            room_count: building.floors.iter().map(|f| f.rooms.len()).sum(),
        })
        .collect()
}

enum Format {
    Yaml,
    Json,
}

fn extension(path: &Path) -> AppResult<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(AppError::UnsupportedExtension {
            path: path.to_path_buf(),
        }),
    }
}
