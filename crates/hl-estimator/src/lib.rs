//! hl-estimator: steady-state heat-loss estimation.
//!
//! The one place in the workspace with domain math. Everything here is a
//! pure function over an immutable snapshot: no I/O, no validation, no
//! state. Callers that need input checking run it upstream
//! (`hl-project::validate_project`) before building the tree.

pub mod estimate;
pub mod results;

pub use estimate::{compute_project_results, compute_room_heat_loss, envelope_loss_coefficient};
pub use hl_core::INDOOR_REFERENCE_TEMP_C;
pub use results::{ProjectResult, RoomResult};
