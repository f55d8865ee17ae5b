//! Boundary-and-streets to place-and-roads pipeline.
//!
//! Validates the boundary, clips and groups street ways by name, joins each
//! group's fragments, then prunes boundary parts that hold no roads.

mod aggregate;
mod boundary;
mod transform;

pub use aggregate::{RoadAggregator, RoadGroup};
pub use boundary::Boundary;
pub use transform::{transform, transform_with_stats, SkipStats, TransformOptions};
