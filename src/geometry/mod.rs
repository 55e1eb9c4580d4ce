//! Plain-coordinate polygon geometry: measuring plots, validating the rings
//! an admin draws, and testing them against a project boundary and sibling
//! plots.

pub mod containment;
pub mod measure;
pub mod projection;
pub mod validate;

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

pub use containment::{check_overlap, contains, is_inside_boundary, BoundaryCheck, OverlapCheck};
pub use measure::{area, centroid, geodesic_area, measure, perimeter, Measurement};
pub use validate::{
    has_minimum_vertices, has_no_degenerate_edges, is_strictly_valid, is_valid, validate,
    PolygonError,
};

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// `geo` puts longitude on the x axis.
impl From<Coordinate> for Coord {
    fn from(coordinate: Coordinate) -> Self {
        Coord {
            x: coordinate.lng,
            y: coordinate.lat,
        }
    }
}

impl From<Coord> for Coordinate {
    fn from(coord: Coord) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }
}

impl From<Coordinate> for Point {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.lng, coordinate.lat)
    }
}

/// Returns the ring without its closing point, if the last vertex repeats the
/// first one.
pub fn open_ring(polygon: &[Coordinate]) -> &[Coordinate] {
    match polygon {
        [first, .., last] if first == last => &polygon[..polygon.len() - 1],
        _ => polygon,
    }
}
