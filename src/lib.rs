//! Streetgeo - turns an administrative boundary and its street ways into a
//! street-guessing game map.
//!
//! This library provides the transform pipeline and wire formats used by the
//! `streetgeo` binary.

pub mod codec;
pub mod error;
pub mod geometry;
pub mod models;
pub mod names;
pub mod pipeline;

pub use error::{Result, TransformError};
pub use models::{Place, PlaceResponse, Road, SourceFeature};
pub use pipeline::{transform, transform_with_stats, TransformOptions};

/// Bump whenever output for the same input can change, so cached results
/// keyed by boundary id and version are recomputed.
pub const PIPELINE_VERSION: &str = "1";
