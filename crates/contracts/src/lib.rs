//! # Contracts
//!
//! Shared interface types for the trajectory workspace.
//! Every other crate depends on this one; it depends on none of them.
//!
//! ## Units
//! - Time in seconds (f64), relative to the start of a trajectory
//! - Lengths in metres, angles in radians (CCW positive, 0 along +X)

mod error;
mod field;
mod field_config;
mod geometry;
mod lookup;

pub use error::*;
pub use field::*;
pub use field_config::*;
pub use geometry::*;
pub use lookup::*;
