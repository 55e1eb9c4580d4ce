//! Vertex-based containment and overlap tests.
//!
//! Both [`is_inside_boundary`] and [`check_overlap`] only look at vertices:
//! a plot whose edge leaves the boundary while all its corners stay inside is
//! reported as inside, and two plots crossing like a plus sign without any
//! corner inside the other are reported as not overlapping.

use rstar::{Envelope, AABB};
use serde::{Deserialize, Serialize};

use super::{open_ring, Coordinate};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundaryCheck {
    pub inside: bool,
    pub outside_points: Vec<Coordinate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlapCheck {
    pub overlaps: bool,
    pub overlapping_index: Option<usize>,
}

/// Ray casting toward increasing longitude.
///
/// Edges are half-open in latitude, so a point lying exactly on a vertex gets
/// a deterministic answer: on an axis-aligned square the lower-left corner
/// counts as inside, the other three corners as outside. Rings with fewer than
/// 3 points contain nothing.
pub fn contains(polygon: &[Coordinate], point: Coordinate) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let (x, y) = (point.lng, point.lat);
    let mut inside = false;
    let mut prev = polygon[polygon.len() - 1];

    for &curr in polygon {
        let (xi, yi) = (curr.lng, curr.lat);
        let (xj, yj) = (prev.lng, prev.lat);

        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }

        prev = curr;
    }

    inside
}

/// Tests every vertex of `candidate` against `boundary`.
///
/// An empty candidate or a boundary that cannot contain anything is never
/// inside.
pub fn is_inside_boundary(candidate: &[Coordinate], boundary: &[Coordinate]) -> BoundaryCheck {
    let outside_points: Vec<Coordinate> = candidate
        .iter()
        .copied()
        .filter(|vertex| !contains(boundary, *vertex))
        .collect();

    if !outside_points.is_empty() {
        log::debug!(
            "{} of {} vertices fall outside the boundary",
            outside_points.len(),
            candidate.len()
        );
    }

    BoundaryCheck {
        inside: !candidate.is_empty() && outside_points.is_empty(),
        outside_points,
    }
}

/// Reports the first polygon of `existing` that has a vertex inside
/// `candidate` or contains a vertex of `candidate`.
///
/// A polygon drawn over the exact vertices of an existing one always
/// overlaps it, whatever the ray casting says about its corners.
pub fn check_overlap<P: AsRef<[Coordinate]>>(
    candidate: &[Coordinate],
    existing: &[P],
) -> OverlapCheck {
    if candidate.is_empty() {
        return OverlapCheck::default();
    }

    let candidate_envelope = envelope(candidate);

    for (index, other) in existing.iter().enumerate() {
        let other = other.as_ref();

        // No vertex of either ring can lie inside the other one.
        if !candidate_envelope.intersects(&envelope(other)) {
            continue;
        }

        if same_vertices(candidate, other)
            || any_vertex_inside(candidate, other)
            || any_vertex_inside(other, candidate)
        {
            log::trace!("candidate overlaps existing polygon {}", index);
            return OverlapCheck {
                overlaps: true,
                overlapping_index: Some(index),
            };
        }
    }

    OverlapCheck::default()
}

fn any_vertex_inside(vertices: &[Coordinate], polygon: &[Coordinate]) -> bool {
    vertices.iter().any(|vertex| contains(polygon, *vertex))
}

fn same_vertices(a: &[Coordinate], b: &[Coordinate]) -> bool {
    let (a, b) = (open_ring(a), open_ring(b));
    a.len() == b.len() && a.iter().all(|vertex| b.contains(vertex))
}

fn envelope(polygon: &[Coordinate]) -> AABB<[f64; 2]> {
    let corners: Vec<[f64; 2]> = polygon.iter().map(|c| [c.lng, c.lat]).collect();
    AABB::from_points(corners.iter())
}
