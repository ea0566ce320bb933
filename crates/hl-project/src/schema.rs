//! Project file schema definitions.
//!
//! The on-disk document nests the hierarchy directly: a project owns
//! buildings, buildings own floors, floors own rooms. Ids are assigned
//! at load time from document order, which makes document order the
//! creation order.

use hl_core::Real;
use hl_model::{MemoryStore, RoomAreas, StoreResult};
use serde::{Deserialize, Serialize};

fn default_version() -> u32 {
    crate::LATEST_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectFile {
    #[serde(default = "default_version")]
    pub version: u32,
    pub name: String,
    /// Username of the owning user.
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub buildings: Vec<BuildingDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildingDef {
    pub name: String,
    #[serde(default)]
    pub location: String,
    /// Design outdoor temperature, °C.
    pub norm_outside_temp: Real,
    #[serde(default)]
    pub floors: Vec<FloorDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FloorDef {
    pub name: String,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomDef {
    pub name: String,
    /// Area fields default to 0.0 when omitted from the document.
    #[serde(flatten)]
    pub areas: RoomAreas,
}

impl ProjectFile {
    /// Load the document into a fresh in-memory store, assigning ids in
    /// document order.
    ///
    /// Returns the store and the project's id. The owner defaults to
    /// "anonymous" when the document names none.
    pub fn build_store(&self) -> StoreResult<(MemoryStore, hl_core::ProjectId)> {
        let mut store = MemoryStore::new();
        let owner = self.owner.as_deref().unwrap_or("anonymous");
        let user_id = store.create_user(owner)?;
        let project_id = store.create_project(&self.name, user_id)?;
        for building in &self.buildings {
            let building_id = store.create_building(
                &building.name,
                &building.location,
                building.norm_outside_temp,
                project_id,
            )?;
            for floor in &building.floors {
                let floor_id = store.create_floor(&floor.name, building_id)?;
                for room in &floor.rooms {
                    store.create_room(&room.name, room.areas, floor_id)?;
                }
            }
        }
        Ok((store, project_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_parses_with_defaults() {
        let doc = "name: Bare\nbuildings:\n  - name: Hut\n    norm_outside_temp: -5.0\n";
        let file: ProjectFile = serde_yaml::from_str(doc).unwrap();
        assert_eq!(file.version, crate::LATEST_VERSION);
        assert!(file.owner.is_none());
        assert_eq!(file.buildings[0].location, "");
        assert!(file.buildings[0].floors.is_empty());
    }

    #[test]
    fn omitted_area_fields_default_to_zero() {
        let doc = "\
name: Partial
buildings:
  - name: Hut
    norm_outside_temp: -5.0
    floors:
      - name: Ground
        rooms:
          - name: Shed
            outer_wall_area: 4.0
";
        let file: ProjectFile = serde_yaml::from_str(doc).unwrap();
        let areas = file.buildings[0].floors[0].rooms[0].areas;
        assert_eq!(areas.outer_wall_area, 4.0);
        assert_eq!(areas.roof_area, 0.0);
        assert_eq!(areas.wall_to_unheated_area, 0.0);
    }

    #[test]
    fn build_store_assigns_ids_in_document_order() {
        let file = ProjectFile {
            version: crate::LATEST_VERSION,
            name: "Estate".to_string(),
            owner: Some("alice".to_string()),
            buildings: vec![
                BuildingDef {
                    name: "First".to_string(),
                    location: "Berlin".to_string(),
                    norm_outside_temp: -12.0,
                    floors: vec![FloorDef {
                        name: "Ground".to_string(),
                        rooms: vec![RoomDef {
                            name: "Hall".to_string(),
                            areas: RoomAreas::default(),
                        }],
                    }],
                },
                BuildingDef {
                    name: "Second".to_string(),
                    location: "Hamburg".to_string(),
                    norm_outside_temp: -10.0,
                    floors: vec![],
                },
            ],
        };
        let (store, project_id) = file.build_store().unwrap();
        use hl_model::HierarchyReader;
        let names: Vec<_> = store
            .buildings_of(project_id)
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, ["First", "Second"]);
        assert_eq!(store.find_user("alice").unwrap().username, "alice");
    }
}
