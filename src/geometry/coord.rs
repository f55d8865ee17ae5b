use geo_types::Coord;

/// Per-axis tolerance for treating two coordinates as the same point, in
/// degrees. About 0.1 m of longitude at mid-latitudes.
pub const COORD_EPSILON: f64 = 0.000001;

/// Approximate point equality. Not transitive across chains of close points.
pub fn coord_eq(a: Coord<f64>, b: Coord<f64>) -> bool {
    (a.x - b.x).abs() < COORD_EPSILON && (a.y - b.y).abs() < COORD_EPSILON
}
