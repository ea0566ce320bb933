//! Hierarchy entity types.
//!
//! Ownership runs strictly parent → child: User → Project → Building →
//! Floor → Room. Children carry a foreign-key-style parent id instead of
//! back-references, so the structure stays an acyclic tree.

use hl_core::{BuildingId, FloorId, ProjectId, Real, RoomId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub location: String,
    /// Design outdoor temperature in °C. May be negative; values above
    /// the 20 °C indoor reference yield negative heat loss downstream.
    pub norm_outside_temp: Real,
    pub project_id: ProjectId,
}

/// Floors are purely organizational and carry no area data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    pub building_id: BuildingId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub floor_id: FloorId,
    #[serde(flatten)]
    pub areas: RoomAreas,
}

/// The eight exterior-facing surface areas of a room, in m².
///
/// Grouped so the estimator can take exactly the inputs it needs without
/// seeing names or ids.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomAreas {
    pub outer_wall_area: Real,
    pub roof_area: Real,
    pub roof_window_area: Real,
    pub outer_window_area: Real,
    pub outer_door_area: Real,
    pub ceiling_to_unheated_area: Real,
    pub floor_to_unheated_area: Real,
    pub wall_to_unheated_area: Real,
}

impl RoomAreas {
    /// All eight fields as (label, value), in formula order.
    pub fn fields(&self) -> [(&'static str, Real); 8] {
        [
            ("outer_wall_area", self.outer_wall_area),
            ("roof_area", self.roof_area),
            ("roof_window_area", self.roof_window_area),
            ("outer_window_area", self.outer_window_area),
            ("outer_door_area", self.outer_door_area),
            ("ceiling_to_unheated_area", self.ceiling_to_unheated_area),
            ("floor_to_unheated_area", self.floor_to_unheated_area),
            ("wall_to_unheated_area", self.wall_to_unheated_area),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_areas_default_is_all_zero() {
        let areas = RoomAreas::default();
        assert!(areas.fields().iter().all(|(_, v)| *v == 0.0));
    }

    #[test]
    fn room_serializes_areas_inline() {
        let room = Room {
            id: hl_core::Id::from_index(0),
            name: "Living room".to_string(),
            floor_id: hl_core::Id::from_index(0),
            areas: RoomAreas {
                outer_wall_area: 20.0,
                ..RoomAreas::default()
            },
        };
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["outer_wall_area"], 20.0);
        assert!(json.get("areas").is_none());
    }
}
