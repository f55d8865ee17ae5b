//! GeoJSON wire format for converter input and transform output.

use geo_types::{Coord, LineString, MultiPolygon, Polygon};
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::models::{Place, PlaceGeometry, PlaceResponse, Road, RoadGeometry, SourceFeature, SourceGeometry};

/// Decode the converter's FeatureCollection into source features, in order.
///
/// The first feature is the boundary and must decode cleanly. A street feature
/// whose geometry cannot be decoded is kept as [`SourceGeometry::Other`] so the
/// pipeline can skip it.
pub fn decode_features(text: &str) -> Result<Vec<SourceFeature>> {
    let geojson: GeoJson = text.parse()?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(TransformError::Decode(
            "expected a FeatureCollection".to_string(),
        ));
    };

    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(i, feature)| decode_feature(feature, i == 0))
        .collect()
}

fn decode_feature(feature: Feature, strict: bool) -> Result<SourceFeature> {
    let id = match feature.id {
        Some(Id::String(s)) => Some(s),
        Some(Id::Number(n)) => Some(n.to_string()),
        None => None,
    };

    let geometry = match feature.geometry {
        Some(geometry) => {
            let type_name = value_type_name(&geometry.value);
            match decode_geometry(geometry.value) {
                Ok(decoded) => decoded,
                Err(e) if strict => return Err(e),
                Err(e) => {
                    debug!("Undecodable {} geometry on {:?}: {}", type_name, id, e);
                    SourceGeometry::Other(type_name.to_string())
                }
            }
        }
        None => SourceGeometry::Other("null".to_string()),
    };

    Ok(SourceFeature::new(
        id,
        geometry,
        feature.properties.unwrap_or_default(),
    ))
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn decode_geometry(value: Value) -> Result<SourceGeometry> {
    Ok(match value {
        Value::LineString(positions) => SourceGeometry::LineString(decode_line(&positions)?),
        Value::Polygon(rings) => SourceGeometry::Polygon(decode_polygon(&rings)?),
        Value::MultiPolygon(polygons) => SourceGeometry::MultiPolygon(MultiPolygon::new(
            polygons
                .iter()
                .map(|rings| decode_polygon(rings))
                .collect::<Result<_>>()?,
        )),
        other => SourceGeometry::Other(value_type_name(&other).to_string()),
    })
}

fn decode_coord(position: &[f64]) -> Result<Coord<f64>> {
    match position {
        [x, y, ..] => Ok(Coord { x: *x, y: *y }),
        _ => Err(TransformError::Decode(format!(
            "position {:?} has fewer than two values",
            position
        ))),
    }
}

fn decode_line(positions: &[Vec<f64>]) -> Result<LineString<f64>> {
    positions
        .iter()
        .map(|p| decode_coord(p))
        .collect::<Result<Vec<_>>>()
        .map(LineString::new)
}

fn decode_polygon(rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| decode_line(ring));
    let exterior = match rings.next() {
        Some(ring) => ring?,
        None => return Err(TransformError::Decode("polygon has no rings".to_string())),
    };
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// The place as a GeoJSON feature with `name` and `totalLengthMi` properties
pub fn place_to_feature(place: &Place) -> Feature {
    let value = match &place.geometry {
        PlaceGeometry::Polygon(p) => Value::from(p),
        PlaceGeometry::MultiPolygon(mp) => Value::from(mp),
    };

    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), place.name.clone().into());
    properties.insert("totalLengthMi".to_string(), place.total_length_mi.into());

    Feature {
        bbox: Some(place.bbox.to_vec()),
        geometry: Some(Geometry::new(value)),
        id: Some(Id::String(place.id.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// A road as a GeoJSON feature with `id`, `name`, `alternateNames` and `lengthMi` properties
pub fn road_to_feature(road: &Road) -> Feature {
    let value = match &road.geometry {
        RoadGeometry::LineString(ls) => Value::from(ls),
        RoadGeometry::MultiLineString(mls) => Value::from(mls),
    };

    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), road.id.clone().into());
    properties.insert("name".to_string(), road.name.clone().into());
    properties.insert(
        "alternateNames".to_string(),
        road.alternate_names.clone().into(),
    );
    properties.insert("lengthMi".to_string(), road.length_mi.into());

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// `{"place": Feature, "roads": FeatureCollection}`
pub fn encode_response(response: &PlaceResponse) -> serde_json::Value {
    let roads = FeatureCollection {
        bbox: None,
        features: response.roads.iter().map(road_to_feature).collect(),
        foreign_members: None,
    };

    serde_json::json!({
        "place": place_to_feature(&response.place),
        "roads": roads,
    })
}
