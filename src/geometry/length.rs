use geo::{Distance, Haversine, Point};
use geo_types::LineString;

pub const METERS_PER_MILE: f64 = 1609.344;

/// Haversine length of a line, in miles
pub fn line_length_mi(line: &LineString<f64>) -> f64 {
    let meters: f64 = line
        .lines()
        .map(|segment| Haversine.distance(Point::from(segment.start), Point::from(segment.end)))
        .sum();
    meters / METERS_PER_MILE
}
