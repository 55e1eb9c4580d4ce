use plotgeo::{
    geometry::{area, centroid, geodesic_area, measure, perimeter},
    Coordinate,
};

mod common;

#[test]
fn test_degenerate_polygons_have_no_area_or_perimeter() {
    let a = Coordinate::new(30.0, 31.0);
    let b = Coordinate::new(30.001, 31.0);

    for polygon in [vec![], vec![a], vec![a, b]] {
        assert_eq!(area(&polygon), 0.0);
        assert_eq!(perimeter(&polygon), 0.0);
    }
}

#[test]
fn test_equator_square_area() {
    let polygon = common::square(Coordinate::new(0.0, 0.0), 100.0);

    common::assert_close(area(&polygon), 10_000.0, 0.01);
    common::assert_close(perimeter(&polygon), 400.0, 0.01);
}

#[test]
fn test_square_area_away_from_equator() {
    let polygon = common::square(Coordinate::new(30.05, 31.23), 250.0);

    common::assert_close(area(&polygon), 62_500.0, 0.01);
    common::assert_close(perimeter(&polygon), 1_000.0, 0.01);
}

#[test]
fn test_area_ignores_winding_order() {
    let polygon = common::square(Coordinate::new(24.7, 46.7), 80.0);
    let mut reversed = polygon.clone();
    reversed.reverse();

    let forward = area(&polygon);

    assert!(forward > 0.0);
    common::assert_close(area(&reversed), forward, 1e-12);
}

#[test]
fn test_closing_point_does_not_change_measurement() {
    let open = common::square(Coordinate::new(-33.9, 18.4), 40.0);
    let mut closed = open.clone();
    closed.push(open[0]);

    let a = measure(&open);
    let b = measure(&closed);

    common::assert_close(b.area_m2, a.area_m2, 1e-9);
    common::assert_close(b.perimeter_m, a.perimeter_m, 1e-9);
}

#[test]
fn test_nan_propagates() {
    let mut polygon = common::square(Coordinate::new(0.0, 0.0), 10.0);
    polygon[1].lat = f64::NAN;

    assert!(area(&polygon).is_nan());
    assert!(perimeter(&polygon).is_nan());
}

#[test]
fn test_nan_in_first_vertex_propagates() {
    let mut polygon = common::square(Coordinate::new(30.0, 31.0), 10.0);
    polygon[0].lat = f64::NAN;

    assert!(area(&polygon).is_nan());

    let mut polygon = common::square(Coordinate::new(30.0, 31.0), 10.0);
    polygon[0].lng = f64::NAN;

    assert!(area(&polygon).is_nan());
}

#[test]
fn test_planar_area_stays_close_to_geodesic_area() {
    let polygon = common::square(Coordinate::new(45.0, 7.0), 1_000.0);

    common::assert_close(area(&polygon), geodesic_area(&polygon), 0.005);
}

#[test]
fn test_centroid() {
    let polygon = common::degree_square(10.0, 20.0, 2.0);

    assert_eq!(centroid(&polygon), Some(Coordinate::new(11.0, 21.0)));
    assert_eq!(centroid(&[]), None);
}
