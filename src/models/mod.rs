//! Core data models for the geodata transform.

pub mod place;
pub mod source;
pub mod tags;

pub use place::{rect_to_bbox, Place, PlaceGeometry, PlaceResponse, Road, RoadGeometry, ROAD_ID_SEPARATOR};
pub use source::{SourceFeature, SourceGeometry, Tags};
pub use tags::{collect_names, BoundaryTags, NAME_TAGS};
