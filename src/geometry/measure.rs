use contracts::debug_ensures;
use geo::{Area, GeodesicArea, HaversineDistance, LineString, Point, Polygon};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{open_ring, projection::LocalProjection, Coordinate};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    pub area_m2: f64,
    pub perimeter_m: f64,
}

pub fn measure(polygon: &[Coordinate]) -> Measurement {
    Measurement {
        area_m2: area(polygon),
        perimeter_m: perimeter(polygon),
    }
}

/// Planar area in square metres, shoelace over the [`LocalProjection`] of the
/// ring. Winding order does not matter. Rings with fewer than 3 points have
/// no area. A NaN coordinate makes the area NaN.
#[debug_ensures(ret >= 0.0 || ret.is_nan())]
pub fn area(polygon: &[Coordinate]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }

    // `geo` would see a NaN ring as unclosed and report zero.
    if polygon.iter().any(|c| c.lat.is_nan() || c.lng.is_nan()) {
        return f64::NAN;
    }

    let projection = LocalProjection::around(polygon);
    let exterior = LineString::from(projection.project_all(polygon));

    Polygon::new(exterior, vec![]).unsigned_area()
}

/// Sum of haversine distances along the ring, including the closing edge, in
/// metres.
#[debug_ensures(ret >= 0.0 || ret.is_nan())]
pub fn perimeter(polygon: &[Coordinate]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }

    let ring = open_ring(polygon);
    let mut length = 0.0;

    for (a, b) in ring.iter().chain(ring.first()).tuple_windows() {
        length += Point::from(*a).haversine_distance(&Point::from(*b));
    }

    length
}

/// Area on the WGS84 ellipsoid, for callers needing more than the planar
/// approximation.
pub fn geodesic_area(polygon: &[Coordinate]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }

    let exterior: LineString = polygon.iter().map(|c| geo::Coord::from(*c)).collect();
    Polygon::new(exterior, vec![]).geodesic_area_unsigned()
}

/// Mean of the distinct vertices.
pub fn centroid(polygon: &[Coordinate]) -> Option<Coordinate> {
    let ring = open_ring(polygon);

    if ring.is_empty() {
        return None;
    }

    let n = ring.len() as f64;
    let (lat, lng) = ring
        .iter()
        .fold((0.0, 0.0), |(lat, lng), c| (lat + c.lat, lng + c.lng));

    Some(Coordinate::new(lat / n, lng / n))
}
