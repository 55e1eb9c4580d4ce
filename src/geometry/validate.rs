use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

use super::Coordinate;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolygonError {
    #[error("polygon needs at least 3 vertices, found {found}")]
    TooFewVertices { found: usize },
    #[error("vertices {index} and {} are identical", .index + 1)]
    DegenerateEdge { index: usize },
}

pub fn has_minimum_vertices(polygon: &[Coordinate]) -> bool {
    polygon.len() >= 3
}

/// False if two consecutive vertices coincide. A closing vertex repeating the
/// first one is not an edge of its own and is accepted.
pub fn has_no_degenerate_edges(polygon: &[Coordinate]) -> bool {
    first_degenerate_edge(polygon).is_none()
}

pub fn is_valid(polygon: &[Coordinate]) -> bool {
    has_minimum_vertices(polygon)
}

pub fn is_strictly_valid(polygon: &[Coordinate]) -> bool {
    has_minimum_vertices(polygon) && has_no_degenerate_edges(polygon)
}

/// Like [`is_strictly_valid`], but says what is wrong.
pub fn validate(polygon: &[Coordinate]) -> Result<(), PolygonError> {
    if !has_minimum_vertices(polygon) {
        return Err(PolygonError::TooFewVertices {
            found: polygon.len(),
        });
    }

    if let Some(index) = first_degenerate_edge(polygon) {
        return Err(PolygonError::DegenerateEdge { index });
    }

    Ok(())
}

fn first_degenerate_edge(polygon: &[Coordinate]) -> Option<usize> {
    polygon
        .iter()
        .tuple_windows()
        .position(|(a, b)| a == b)
}
