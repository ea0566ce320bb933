//! hl-core: stable foundation for heatload.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - ids (stable compact IDs for hierarchy entities)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HlError, HlResult};
pub use ids::*;
pub use numeric::*;
