//! Output model: a playable place and the named roads inside it.

use geo::{BoundingRect, Rect};
use geo_types::{LineString, MultiLineString, MultiPolygon, Polygon};

/// Boundary geometry of a place
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl PlaceGeometry {
    /// Build from a list of boundary parts, collapsing a single part to a Polygon.
    /// Returns `None` for an empty list.
    pub fn from_parts(mut parts: Vec<Polygon<f64>>) -> Option<Self> {
        match parts.len() {
            0 => None,
            1 => parts.pop().map(PlaceGeometry::Polygon),
            _ => Some(PlaceGeometry::MultiPolygon(MultiPolygon::new(parts))),
        }
    }

    /// All parts as a multi-polygon
    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        match self {
            PlaceGeometry::Polygon(p) => MultiPolygon::new(vec![p.clone()]),
            PlaceGeometry::MultiPolygon(mp) => mp.clone(),
        }
    }

    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        match self {
            PlaceGeometry::Polygon(p) => p.bounding_rect(),
            PlaceGeometry::MultiPolygon(mp) => mp.bounding_rect(),
        }
    }
}

/// Road geometry after joining: one chain, or several disjoint ones
#[derive(Debug, Clone, PartialEq)]
pub enum RoadGeometry {
    LineString(LineString<f64>),
    MultiLineString(MultiLineString<f64>),
}

impl RoadGeometry {
    /// Build from joined chains. Returns `None` when there are no chains.
    pub fn from_chains(mut chains: Vec<LineString<f64>>) -> Option<Self> {
        match chains.len() {
            0 => None,
            1 => chains.pop().map(RoadGeometry::LineString),
            _ => Some(RoadGeometry::MultiLineString(MultiLineString::new(chains))),
        }
    }

    /// Iterate over every chain in the geometry
    pub fn lines(&self) -> impl Iterator<Item = &LineString<f64>> {
        let lines: &[LineString<f64>] = match self {
            RoadGeometry::LineString(ls) => std::slice::from_ref(ls),
            RoadGeometry::MultiLineString(mls) => &mls.0,
        };
        lines.iter()
    }
}

/// All segments in a place that share a name, joined together.
#[derive(Debug, Clone)]
pub struct Road {
    /// Sorted contributing source ids joined with [`ROAD_ID_SEPARATOR`]
    pub id: String,

    /// Canonical display name
    pub name: String,

    /// Lower-cased strings accepted as a correct guess for this road
    pub alternate_names: Vec<String>,

    pub geometry: RoadGeometry,

    /// Geodesic length of the joined geometry, in miles
    pub length_mi: f64,
}

pub const ROAD_ID_SEPARATOR: &str = "-";

/// Top-level geodata for a city or town.
#[derive(Debug, Clone)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub geometry: PlaceGeometry,

    /// `[min_lon, min_lat, max_lon, max_lat]` over the final road set
    pub bbox: [f64; 4],

    /// Sum of every road's `length_mi`
    pub total_length_mi: f64,
}

/// A place together with all of its roads
#[derive(Debug, Clone)]
pub struct PlaceResponse {
    pub place: Place,
    pub roads: Vec<Road>,
}

/// Convert a rect into the `[min_lon, min_lat, max_lon, max_lat]` layout
pub fn rect_to_bbox(rect: Rect<f64>) -> [f64; 4] {
    [rect.min().x, rect.min().y, rect.max().x, rect.max().y]
}
