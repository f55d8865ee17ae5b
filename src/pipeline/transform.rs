//! Turns one converted survey extract into a playable place.

use geo::BoundingRect;
use geo_types::MultiLineString;
use tracing::{debug, info, warn};

use super::aggregate::RoadAggregator;
use super::boundary::Boundary;
use crate::error::{Result, TransformError};
use crate::geometry::BoundaryClipper;
use crate::models::{
    collect_names, rect_to_bbox, Place, PlaceResponse, Road, SourceFeature, SourceGeometry,
};
use crate::names::NameMode;

/// Knobs for a transform run
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// Expansion used for road alternate names
    pub name_mode: NameMode,
    /// Abort when one name collects more clipped fragments than this
    pub max_fragments_per_road: Option<usize>,
}

/// Counts of street features and fragments that were skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipStats {
    /// Geometry was not a LineString
    pub not_a_line: usize,
    /// No usable name tag
    pub unnamed: usize,
    /// No feature id or `id` tag
    pub missing_id: usize,
    /// Nothing left after clipping
    pub outside_boundary: usize,
    /// Ways or clipped pieces with fewer than two coordinates
    pub degenerate_fragments: usize,
}

impl SkipStats {
    /// Number of street features dropped entirely
    pub fn skipped_features(&self) -> usize {
        self.not_a_line + self.unnamed + self.missing_id + self.outside_boundary
    }
}

/// Run the full pipeline over converted features. `features[0]` must be the
/// boundary; the rest are street ways.
pub fn transform(features: &[SourceFeature], options: &TransformOptions) -> Result<PlaceResponse> {
    transform_with_stats(features, options).map(|(response, _)| response)
}

/// Like [`transform`], also returning what was skipped along the way
pub fn transform_with_stats(
    features: &[SourceFeature],
    options: &TransformOptions,
) -> Result<(PlaceResponse, SkipStats)> {
    let boundary = Boundary::from_feature(features.first())?;
    let clipper = BoundaryClipper::new(boundary.geometry.to_multi_polygon());

    let mut stats = SkipStats::default();
    let mut aggregator = RoadAggregator::new();

    for feature in features.iter().skip(1) {
        let id_for_log = feature.source_id().unwrap_or("<no id>");

        let SourceGeometry::LineString(line) = &feature.geometry else {
            debug!(
                "Skipping {} ({}), not a LineString",
                id_for_log,
                feature.geometry.type_name()
            );
            stats.not_a_line += 1;
            continue;
        };

        let names = collect_names(&feature.tags);
        if names.is_empty() {
            debug!("Skipping {}, no name", id_for_log);
            stats.unnamed += 1;
            continue;
        }

        let Some(source_id) = feature.source_id() else {
            debug!("Skipping '{}', no id", names[0]);
            stats.missing_id += 1;
            continue;
        };

        if line.0.len() < 2 {
            debug!("Skipping {} '{}', fewer than two coordinates", source_id, names[0]);
            stats.degenerate_fragments += 1;
            continue;
        }

        let clipped = clipper.clip(line);
        stats.degenerate_fragments += clipped.degenerate;
        if clipped.kept.is_empty() {
            debug!("Skipping {} '{}', outside boundary", source_id, names[0]);
            stats.outside_boundary += 1;
            continue;
        }

        aggregator.add(names, source_id, clipped.kept);
    }

    let mut roads: Vec<Road> = Vec::with_capacity(aggregator.len());
    for group in aggregator.finish() {
        if let Some(limit) = options.max_fragments_per_road {
            if group.fragments.len() > limit {
                return Err(TransformError::TooManyFragments {
                    name: group.name,
                    count: group.fragments.len(),
                    limit,
                });
            }
        }
        roads.extend(group.finalize(options.name_mode));
    }

    let geometry = boundary.prune_to_roads(&roads)?;

    let road_lines: MultiLineString<f64> = roads
        .iter()
        .flat_map(|road| road.geometry.lines().cloned())
        .collect();
    let bbox = match road_lines.bounding_rect() {
        Some(rect) => rect_to_bbox(rect),
        None => {
            warn!("Place '{}' has no roads, using boundary extent", boundary.tags.name);
            geometry.bounding_rect().map(rect_to_bbox).unwrap_or_default()
        }
    };

    let total_length_mi = roads.iter().map(|road| road.length_mi).sum();

    info!(
        "Transformed '{}': {} roads, {:.2} mi, skipped {} features ({} not lines, {} unnamed, {} without id, {} outside), {} degenerate fragments",
        boundary.tags.name,
        roads.len(),
        total_length_mi,
        stats.skipped_features(),
        stats.not_a_line,
        stats.unnamed,
        stats.missing_id,
        stats.outside_boundary,
        stats.degenerate_fragments
    );

    let place = Place {
        id: boundary.id,
        name: boundary.tags.name,
        geometry,
        bbox,
        total_length_mi,
    };

    Ok((PlaceResponse { place, roads }, stats))
}
