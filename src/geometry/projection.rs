//! Local planar approximation of geographic coordinates.
//!
//! Every planar computation in the crate goes through [`LocalProjection`], an
//! equirectangular projection scaled by the cosine of a reference latitude.
//! For plots up to a few kilometres across, the area it yields stays within
//! about half a percent of the ellipsoidal geodesic area; use
//! [`super::geodesic_area`] when that is not good enough.

use geo::Coord;

use super::{open_ring, Coordinate};

/// Mean Earth radius in metres, the same radius `geo` uses for haversine
/// distances.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalProjection {
    cos_lat0: f64,
}

impl LocalProjection {
    pub fn new(reference_lat: f64) -> Self {
        Self {
            cos_lat0: reference_lat.to_radians().cos(),
        }
    }

    /// Projection centred on the mean latitude of the polygon's distinct
    /// vertices.
    pub fn around(polygon: &[Coordinate]) -> Self {
        let ring = open_ring(polygon);

        if ring.is_empty() {
            return Self::new(0.0);
        }

        let mean_lat = ring.iter().map(|c| c.lat).sum::<f64>() / ring.len() as f64;
        Self::new(mean_lat)
    }

    /// Metres east (`x`) and north (`y`) of the origin.
    pub fn project(&self, coordinate: Coordinate) -> Coord {
        Coord {
            x: EARTH_RADIUS_M * coordinate.lng.to_radians() * self.cos_lat0,
            y: EARTH_RADIUS_M * coordinate.lat.to_radians(),
        }
    }

    pub fn unproject(&self, coord: Coord) -> Coordinate {
        Coordinate {
            lat: (coord.y / EARTH_RADIUS_M).to_degrees(),
            lng: (coord.x / (EARTH_RADIUS_M * self.cos_lat0)).to_degrees(),
        }
    }

    pub fn project_all(&self, polygon: &[Coordinate]) -> Vec<Coord> {
        polygon.iter().map(|c| self.project(*c)).collect()
    }
}
