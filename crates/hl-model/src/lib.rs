//! hl-model: building hierarchy entities and data access.
//!
//! Contains:
//! - entities (User → Project → Building → Floor → Room, parent-id references)
//! - reader (the read-only data-access seam, in creation order)
//! - store (in-memory implementation with sequential ids)
//! - tree (materialized immutable project snapshot)

pub mod entities;
pub mod reader;
pub mod store;
pub mod tree;

pub use entities::{Building, Floor, Project, Room, RoomAreas, User};
pub use reader::HierarchyReader;
pub use store::{MemoryStore, StoreError, StoreResult};
pub use tree::{ProjectTree, TreeBuilding, TreeFloor};
