//! Geometry for land-subdivision plot maps.
//!
//! Coordinates come in as plain `{ lat, lng }` slices straight from the map
//! widget or an imported KML/KMZ file; nothing here keeps state between calls.

pub mod extract;
pub mod geometry;
pub mod plot;

pub use geometry::Coordinate;
