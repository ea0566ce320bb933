//! In-memory hierarchy store.

use crate::entities::{Building, Floor, Project, Room, RoomAreas, User};
use crate::reader::HierarchyReader;
use hl_core::{BuildingId, FloorId, Id, ProjectId, RoomId, UserId};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Unknown {what} id: {id}")]
    UnknownId { what: &'static str, id: Id },

    #[error("Duplicate username: {username}")]
    DuplicateUsername { username: String },
}

/// Sequential-id store backing tests, the CLI, and anything else that
/// needs a hierarchy without a database.
///
/// Ids are handed out per entity kind in insertion order, so id order is
/// creation order and the `HierarchyReader` contract holds by
/// construction.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Vec<User>,
    projects: Vec<Project>,
    buildings: Vec<Building>,
    floors: Vec<Floor>,
    rooms: Vec<Room>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_user(&mut self, username: &str) -> StoreResult<UserId> {
        if self.users.iter().any(|u| u.username == username) {
            return Err(StoreError::DuplicateUsername {
                username: username.to_string(),
            });
        }
        let id = Id::from_index(self.users.len() as u32);
        self.users.push(User {
            id,
            username: username.to_string(),
        });
        Ok(id)
    }

    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn create_project(&mut self, name: &str, user_id: UserId) -> StoreResult<ProjectId> {
        self.require(&self.users, user_id, "user")?;
        let id = Id::from_index(self.projects.len() as u32);
        self.projects.push(Project {
            id,
            name: name.to_string(),
            user_id,
        });
        Ok(id)
    }

    pub fn create_building(
        &mut self,
        name: &str,
        location: &str,
        norm_outside_temp: f64,
        project_id: ProjectId,
    ) -> StoreResult<BuildingId> {
        self.require(&self.projects, project_id, "project")?;
        let id = Id::from_index(self.buildings.len() as u32);
        self.buildings.push(Building {
            id,
            name: name.to_string(),
            location: location.to_string(),
            norm_outside_temp,
            project_id,
        });
        Ok(id)
    }

    pub fn create_floor(&mut self, name: &str, building_id: BuildingId) -> StoreResult<FloorId> {
        self.require(&self.buildings, building_id, "building")?;
        let id = Id::from_index(self.floors.len() as u32);
        self.floors.push(Floor {
            id,
            name: name.to_string(),
            building_id,
        });
        Ok(id)
    }

    pub fn create_room(
        &mut self,
        name: &str,
        areas: RoomAreas,
        floor_id: FloorId,
    ) -> StoreResult<RoomId> {
        self.require(&self.floors, floor_id, "floor")?;
        let id = Id::from_index(self.rooms.len() as u32);
        self.rooms.push(Room {
            id,
            name: name.to_string(),
            floor_id,
            areas,
        });
        Ok(id)
    }

    pub fn projects_of(&self, user_id: UserId) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.user_id == user_id)
            .collect()
    }

    fn require<T: HasId>(&self, entities: &[T], id: Id, what: &'static str) -> StoreResult<()> {
        if entities.iter().any(|e| e.id() == id) {
            Ok(())
        } else {
            Err(StoreError::UnknownId { what, id })
        }
    }
}

impl HierarchyReader for MemoryStore {
    fn buildings_of(&self, project_id: ProjectId) -> Vec<&Building> {
        self.buildings
            .iter()
            .filter(|b| b.project_id == project_id)
            .collect()
    }

    fn floors_of(&self, building_id: BuildingId) -> Vec<&Floor> {
        self.floors
            .iter()
            .filter(|f| f.building_id == building_id)
            .collect()
    }

    fn rooms_of(&self, floor_id: FloorId) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.floor_id == floor_id).collect()
    }
}

trait HasId {
    fn id(&self) -> Id;
}

macro_rules! impl_has_id {
    ($($ty:ty),*) => {
        $(impl HasId for $ty {
            fn id(&self) -> Id {
                self.id
            }
        })*
    };
}

impl_has_id!(User, Project, Building, Floor, Room);
