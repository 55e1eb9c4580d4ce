use plotgeo::{
    geometry::{
        has_minimum_vertices, has_no_degenerate_edges, is_strictly_valid, is_valid, validate,
        PolygonError,
    },
    Coordinate,
};

fn abc() -> (Coordinate, Coordinate, Coordinate) {
    (
        Coordinate::new(0.0, 0.0),
        Coordinate::new(0.0, 1.0),
        Coordinate::new(1.0, 1.0),
    )
}

#[test]
fn test_minimum_vertices() {
    let (a, b, c) = abc();

    assert!(!is_valid(&[]));
    assert!(!is_valid(&[a, b]));
    assert!(has_minimum_vertices(&[a, b, c]));
    assert!(is_valid(&[a, b, c]));
}

#[test]
fn test_repeated_consecutive_vertex_is_degenerate() {
    let (a, b, c) = abc();

    assert!(!has_no_degenerate_edges(&[a, a, b, c]));
    assert!(is_valid(&[a, a, b, c]));
    assert!(!is_strictly_valid(&[a, a, b, c]));
    assert_eq!(
        validate(&[a, b, b, c]),
        Err(PolygonError::DegenerateEdge { index: 1 })
    );
}

#[test]
fn test_closing_vertex_is_not_degenerate() {
    let (a, b, c) = abc();

    assert!(has_no_degenerate_edges(&[a, b, c, a]));
    assert!(is_strictly_valid(&[a, b, c, a]));
    assert_eq!(validate(&[a, b, c, a]), Ok(()));
}

#[test]
fn test_too_few_vertices_is_reported_first() {
    let (a, ..) = abc();

    assert_eq!(
        validate(&[a, a]),
        Err(PolygonError::TooFewVertices { found: 2 })
    );
}
