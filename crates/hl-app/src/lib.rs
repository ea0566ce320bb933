//! Shared application service layer for heatload.
//!
//! One interface for frontends: project file management and estimation
//! live here so a CLI (or any future surface) never talks to the
//! backend crates directly.

pub mod error;
pub mod estimate_service;
pub mod project_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use estimate_service::{estimate_project, estimate_project_file, EstimateSummary};
pub use project_service::{
    list_buildings, load_project_file, save_project_file, validate_project_file, BuildingSummary,
};
