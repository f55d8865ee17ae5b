//! Error types for the geodata transform.

use thiserror::Error;

/// Fatal transform errors. Recoverable conditions never surface here; they are
/// counted in [`crate::pipeline::SkipStats`] instead.
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("input contained no features, expected a boundary first")]
    MissingBoundary,

    #[error("first feature was a {found}, not a (Multi)Polygon")]
    BoundaryNotPolygon { found: String },

    #[error("boundary tags are invalid: {0}")]
    InvalidBoundaryTags(#[from] serde_json::Error),

    #[error("no boundary polygons contained roads")]
    NoBoundaryPartsWithRoads,

    #[error("road '{name}' has {count} fragments, more than the limit of {limit}")]
    TooManyFragments {
        name: String,
        count: usize,
        limit: usize,
    },

    #[error("could not decode GeoJSON input: {0}")]
    Decode(String),
}

impl From<geojson::Error> for TransformError {
    fn from(e: geojson::Error) -> Self {
        TransformError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
