//! Input model: flat features produced by the OSM-to-geometry converter.

use geo_types::{LineString, MultiPolygon, Polygon};

/// Tag dictionary carried by a feature. Values are kept as JSON so that
/// non-string tags can be recognized and ignored.
pub type Tags = serde_json::Map<String, serde_json::Value>;

/// Geometry of a converted feature
#[derive(Debug, Clone, PartialEq)]
pub enum SourceGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
    LineString(LineString<f64>),
    /// Anything else the converter produced, by GeoJSON type name
    Other(String),
}

impl SourceGeometry {
    pub fn type_name(&self) -> &str {
        match self {
            SourceGeometry::Polygon(_) => "Polygon",
            SourceGeometry::MultiPolygon(_) => "MultiPolygon",
            SourceGeometry::LineString(_) => "LineString",
            SourceGeometry::Other(name) => name.as_str(),
        }
    }
}

/// One converted feature. The first feature of an input is the boundary,
/// the rest are street ways.
#[derive(Debug, Clone)]
pub struct SourceFeature {
    /// Synthetic identifier, e.g. "way/123"
    pub id: Option<String>,
    pub geometry: SourceGeometry,
    pub tags: Tags,
}

impl SourceFeature {
    pub fn new(id: Option<String>, geometry: SourceGeometry, tags: Tags) -> Self {
        Self { id, geometry, tags }
    }

    /// The feature id, falling back to a string `id` tag
    pub fn source_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or_else(|| self.tags.get("id").and_then(|v| v.as_str()))
    }
}
