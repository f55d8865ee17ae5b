//! Planar and geodesic helpers for street geometry.
//!
//! Coordinates are `[lon, lat]` degrees throughout (`x` = longitude).

mod clip;
mod coord;
mod length;
mod unify;

pub use clip::{BoundaryClipper, ClipOutcome};
pub use coord::{coord_eq, COORD_EPSILON};
pub use length::{line_length_mi, METERS_PER_MILE};
pub use unify::unify_segments;
