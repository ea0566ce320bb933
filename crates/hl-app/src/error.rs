//! Error types for the hl-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// presents a single surface to frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project file error: {0}")]
    ProjectFile(String),

    #[error("Unsupported project file extension: {path} (expected .yaml, .yml or .json)")]
    UnsupportedExtension { path: PathBuf },

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hl-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<hl_project::ProjectFileError> for AppError {
    fn from(err: hl_project::ProjectFileError) -> Self {
        match err {
            hl_project::ProjectFileError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::ProjectFile(other.to_string()),
        }
    }
}

impl From<hl_project::ValidationError> for AppError {
    fn from(err: hl_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<hl_model::StoreError> for AppError {
    fn from(err: hl_model::StoreError) -> Self {
        AppError::Store(err.to_string())
    }
}
