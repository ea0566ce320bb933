//! hl-project: canonical project file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{validate_project, ValidationError, ValidationWarning};

/// Newest file format version this build reads and writes.
pub const LATEST_VERSION: u32 = 1;

pub type ProjectFileResult<T> = Result<T, ProjectFileError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectFileError {
    #[error("Validation error: {0}")]
    Validation(#[from] validate::ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectFileResult<schema::ProjectFile> {
    let content = std::fs::read_to_string(path)?;
    let file: schema::ProjectFile = serde_yaml::from_str(&content)?;
    validate_project(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &std::path::Path, file: &schema::ProjectFile) -> ProjectFileResult<()> {
    validate_project(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectFileResult<schema::ProjectFile> {
    let content = std::fs::read_to_string(path)?;
    let file: schema::ProjectFile = serde_json::from_str(&content)?;
    validate_project(&file)?;
    Ok(file)
}

pub fn save_json(path: &std::path::Path, file: &schema::ProjectFile) -> ProjectFileResult<()> {
    validate_project(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}
