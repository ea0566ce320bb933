//! Result data types.
//!
//! Both types are transient: built fresh per computation from the
//! current snapshot, handed to the caller, never stored.

use hl_core::Real;
use serde::{Deserialize, Serialize};

/// Heat loss of one room, tagged with its place in the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomResult {
    pub building: String,
    pub floor: String,
    pub room: String,
    /// Signed, in simplified units; negative when the design outdoor
    /// temperature exceeds the 20 °C indoor reference.
    pub heat_loss: Real,
}

/// Per-room results for a whole project plus their sum.
///
/// `results` is ordered by building, then floor, then room, each in
/// creation order — consumers may rely on that grouping.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectResult {
    pub results: Vec<RoomResult>,
    pub total_heat_loss: Real,
}

impl ProjectResult {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
