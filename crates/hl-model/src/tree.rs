//! Materialized project snapshot.
//!
//! The estimator works over an immutable copy of one project's subtree,
//! collected up front. Once built, the tree is independent of the store
//! it came from, so computations can run in parallel over separate
//! snapshots without coordination.

use crate::entities::{Building, Floor, Room};
use crate::reader::HierarchyReader;
use hl_core::ProjectId;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectTree {
    pub buildings: Vec<TreeBuilding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeBuilding {
    pub building: Building,
    pub floors: Vec<TreeFloor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeFloor {
    pub floor: Floor,
    pub rooms: Vec<Room>,
}

impl ProjectTree {
    /// Collect the full subtree of `project_id` from `reader`.
    ///
    /// Nesting order follows the reader's creation order at every level.
    pub fn collect(reader: &dyn HierarchyReader, project_id: ProjectId) -> Self {
        let buildings = reader
            .buildings_of(project_id)
            .into_iter()
            .map(|building| TreeBuilding {
                building: building.clone(),
                floors: reader
                    .floors_of(building.id)
                    .into_iter()
                    .map(|floor| TreeFloor {
                        floor: floor.clone(),
                        rooms: reader.rooms_of(floor.id).into_iter().cloned().collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { buildings }
    }

    pub fn room_count(&self) -> usize {
        self.buildings
            .iter()
            .flat_map(|b| &b.floors)
            .map(|f| f.rooms.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.room_count() == 0
    }
}
