//! Clipping street lines to a (multi-)polygon boundary.
//!
//! A line is split wherever it crosses a boundary ring. Each piece is kept if a
//! point just inside its start (the midpoint of its first two coordinates) lies
//! in the boundary.

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::Intersects;
use geo_types::{Coord, Line, LineString, MultiPolygon, Point};
use rstar::{RTree, RTreeObject, AABB};

use super::coord::coord_eq;

/// Boundary ring edge wrapped for R-tree indexing
struct IndexedEdge {
    line: Line<f64>,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedEdge {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl IndexedEdge {
    fn new(line: Line<f64>) -> Self {
        Self {
            envelope: segment_envelope(&line),
            line,
        }
    }
}

fn segment_envelope(line: &Line<f64>) -> AABB<[f64; 2]> {
    AABB::from_corners([line.start.x, line.start.y], [line.end.x, line.end.y])
}

/// Result of clipping a single line
#[derive(Debug, Default)]
pub struct ClipOutcome {
    /// In-bounds pieces, in order along the line
    pub kept: Vec<LineString<f64>>,
    /// Pieces dropped for having fewer than two coordinates
    pub degenerate: usize,
}

/// Clips lines against one boundary. Build once per boundary and reuse.
pub struct BoundaryClipper {
    boundary: MultiPolygon<f64>,
    edges: RTree<IndexedEdge>,
}

impl BoundaryClipper {
    pub fn new(boundary: MultiPolygon<f64>) -> Self {
        let edges: Vec<IndexedEdge> = boundary
            .iter()
            .flat_map(|poly| std::iter::once(poly.exterior()).chain(poly.interiors()))
            .flat_map(|ring| ring.lines())
            .map(IndexedEdge::new)
            .collect();

        Self {
            boundary,
            edges: RTree::bulk_load(edges),
        }
    }

    /// Keep only the portions of `line` inside the boundary
    pub fn clip(&self, line: &LineString<f64>) -> ClipOutcome {
        let mut outcome = ClipOutcome::default();
        let (pieces, crossed) = self.split(line);

        if !crossed {
            // Never crosses the boundary: wholly inside or wholly outside
            if line.0.len() < 2 {
                outcome.degenerate += 1;
            } else if self.starts_inside(&line.0) {
                outcome.kept.push(line.clone());
            }
            return outcome;
        }

        for piece in pieces {
            if piece.len() < 2 {
                outcome.degenerate += 1;
                continue;
            }
            if self.starts_inside(&piece) {
                outcome.kept.push(LineString::new(piece));
            }
        }

        outcome
    }

    fn starts_inside(&self, coords: &[Coord<f64>]) -> bool {
        let a = coords[0];
        let b = coords[1];
        let sample = Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
        self.boundary.intersects(&sample)
    }

    /// Split a line at every boundary crossing. Also reports whether any split happened.
    fn split(&self, line: &LineString<f64>) -> (Vec<Vec<Coord<f64>>>, bool) {
        let mut pieces = Vec::new();
        let mut current: Vec<Coord<f64>> = Vec::new();
        let mut crossed = false;

        for segment in line.lines() {
            if current.is_empty() {
                current.push(segment.start);
            }

            for point in self.crossings(segment) {
                if current.last().is_some_and(|&last| coord_eq(last, point)) {
                    continue;
                }
                crossed = true;
                current.push(point);
                pieces.push(std::mem::replace(&mut current, vec![point]));
            }

            if !current.last().is_some_and(|&last| coord_eq(last, segment.end)) {
                current.push(segment.end);
            }
        }

        if !current.is_empty() {
            pieces.push(current);
        }
        (pieces, crossed)
    }

    /// Boundary crossings along one segment, ordered from its start
    fn crossings(&self, segment: Line<f64>) -> Vec<Coord<f64>> {
        let mut points = Vec::new();
        for edge in self.edges.locate_in_envelope_intersecting(&segment_envelope(&segment)) {
            match line_intersection(segment, edge.line) {
                Some(LineIntersection::SinglePoint { intersection, .. }) => {
                    points.push(intersection)
                }
                Some(LineIntersection::Collinear { intersection }) => {
                    points.push(intersection.start);
                    points.push(intersection.end);
                }
                None => {}
            }
        }

        let delta = segment.delta();
        let len2 = delta.x * delta.x + delta.y * delta.y;
        let along = |c: &Coord<f64>| {
            if len2 == 0.0 {
                0.0
            } else {
                ((c.x - segment.start.x) * delta.x + (c.y - segment.start.y) * delta.y) / len2
            }
        };
        points.sort_by(|a, b| along(a).total_cmp(&along(b)));
        points.dedup_by(|a, b| coord_eq(*a, *b));
        points
    }
}
