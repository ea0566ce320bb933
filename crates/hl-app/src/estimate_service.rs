//! Estimation over project files and trees.

use std::path::Path;

use hl_estimator::{compute_project_results, ProjectResult};
use hl_model::ProjectTree;
use hl_project::schema::ProjectFile;

use crate::error::AppResult;

/// Headline numbers for one estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateSummary {
    pub building_count: usize,
    pub room_count: usize,
    pub total_heat_loss: f64,
}

impl EstimateSummary {
    fn of(tree: &ProjectTree, result: &ProjectResult) -> Self {
        Self {
            building_count: tree.buildings.len(),
            room_count: result.results.len(),
            total_heat_loss: result.total_heat_loss,
        }
    }
}

/// Estimate a project that is already in memory.
pub fn estimate_project(file: &ProjectFile) -> AppResult<(ProjectResult, EstimateSummary)> {
    let (store, project_id) = file.build_store()?;
    let tree = ProjectTree::collect(&store, project_id);
    tracing::debug!(
        project = %file.name,
        buildings = tree.buildings.len(),
        rooms = tree.room_count(),
        "estimating project tree"
    );
    let result = compute_project_results(&tree);
    let summary = EstimateSummary::of(&tree, &result);
    Ok((result, summary))
}

/// Load, validate (warnings logged), and estimate a project file.
pub fn estimate_project_file(path: &Path) -> AppResult<(ProjectResult, EstimateSummary)> {
    let (file, _warnings) = crate::project_service::validate_project_file(path)?;
    estimate_project(&file)
}
