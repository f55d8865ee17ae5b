//! Validation and pruning of the place boundary.

use geo::Intersects;
use geo_types::Polygon;
use tracing::{debug, info, warn};

use crate::error::{Result, TransformError};
use crate::models::{BoundaryTags, PlaceGeometry, Road, RoadGeometry, SourceFeature, SourceGeometry};

/// A validated administrative boundary
#[derive(Debug, Clone)]
pub struct Boundary {
    pub id: String,
    pub tags: BoundaryTags,
    pub geometry: PlaceGeometry,
}

impl Boundary {
    /// Validate the first converted feature as the place boundary
    pub fn from_feature(feature: Option<&SourceFeature>) -> Result<Self> {
        let feature = feature.ok_or(TransformError::MissingBoundary)?;

        let geometry = match &feature.geometry {
            SourceGeometry::Polygon(p) => PlaceGeometry::Polygon(p.clone()),
            SourceGeometry::MultiPolygon(mp) => PlaceGeometry::MultiPolygon(mp.clone()),
            other => {
                return Err(TransformError::BoundaryNotPolygon {
                    found: other.type_name().to_string(),
                })
            }
        };

        let tags = BoundaryTags::parse(&feature.tags)?;

        let id = match feature.source_id() {
            Some(id) => id.to_string(),
            None => {
                warn!("Boundary '{}' has no id", tags.name);
                String::new()
            }
        };

        info!(
            "Boundary {} '{}' (population {})",
            id,
            tags.name,
            tags.population.as_deref().unwrap_or("unknown")
        );

        Ok(Self { id, tags, geometry })
    }

    /// Drop boundary parts that contain none of the final roads.
    ///
    /// A single polygon is returned untouched. A multi-polygon keeps only the
    /// parts intersecting at least one road, collapsing to a polygon if one
    /// part is left.
    pub fn prune_to_roads(&self, roads: &[Road]) -> Result<PlaceGeometry> {
        let parts = match &self.geometry {
            PlaceGeometry::Polygon(_) => return Ok(self.geometry.clone()),
            PlaceGeometry::MultiPolygon(mp) => &mp.0,
        };

        let total = parts.len();
        let kept: Vec<Polygon<f64>> = parts
            .iter()
            .filter(|part| roads.iter().any(|road| part_intersects(part, &road.geometry)))
            .cloned()
            .collect();

        debug!("Kept {} of {} boundary parts", kept.len(), total);

        PlaceGeometry::from_parts(kept).ok_or(TransformError::NoBoundaryPartsWithRoads)
    }
}

fn part_intersects(part: &Polygon<f64>, geometry: &RoadGeometry) -> bool {
    match geometry {
        RoadGeometry::LineString(ls) => part.intersects(ls),
        RoadGeometry::MultiLineString(mls) => part.intersects(mls),
    }
}
