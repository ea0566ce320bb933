//! Read-only data access seam.

use crate::entities::{Building, Floor, Room};
use hl_core::{BuildingId, FloorId, ProjectId};

/// Read-side view of the persisted hierarchy.
///
/// The estimator never reaches into ambient state; whoever owns the data
/// hands it a reader. Implementations must return children in ascending
/// creation order (id order) — the result ordering contract depends on it.
pub trait HierarchyReader {
    /// All buildings of a project, in creation order.
    fn buildings_of(&self, project_id: ProjectId) -> Vec<&Building>;

    /// All floors of a building, in creation order.
    fn floors_of(&self, building_id: BuildingId) -> Vec<&Floor>;

    /// All rooms of a floor, in creation order.
    fn rooms_of(&self, floor_id: FloorId) -> Vec<&Room>;
}
