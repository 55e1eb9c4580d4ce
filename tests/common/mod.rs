#![allow(dead_code)]

use plotgeo::{geometry::projection::LocalProjection, Coordinate};

pub fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

pub fn assert_close(actual: f64, expected: f64, relative_tolerance: f64) {
    let error = ((actual - expected) / expected).abs();
    assert!(
        error <= relative_tolerance,
        "{} differs from {} by {:.4}%",
        actual,
        expected,
        error * 100.0
    );
}

/// Counterclockwise square of `side_m` metres centred on `center`.
pub fn square(center: Coordinate, side_m: f64) -> Vec<Coordinate> {
    let projection = LocalProjection::new(center.lat);
    let origin = projection.project(center);
    let half = side_m / 2.0;

    [(-half, -half), (half, -half), (half, half), (-half, half)]
        .iter()
        .map(|(dx, dy)| {
            projection.unproject(geo::Coord {
                x: origin.x + dx,
                y: origin.y + dy,
            })
        })
        .collect()
}

/// Square in raw degrees, lower-left corner first.
pub fn degree_square(lat: f64, lng: f64, side: f64) -> Vec<Coordinate> {
    vec![
        Coordinate::new(lat, lng),
        Coordinate::new(lat, lng + side),
        Coordinate::new(lat + side, lng + side),
        Coordinate::new(lat + side, lng),
    ]
}

pub fn zip_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    use std::io::Write;

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));

    for (name, content) in entries {
        writer
            .start_file(*name, zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }

    writer.finish().unwrap().into_inner()
}

pub fn kml_document(placemarks: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Subdivision</name>
{}
  </Document>
</kml>"#,
        placemarks
    )
}

pub fn polygon_placemark(name: &str, coordinates: &str) -> String {
    format!(
        r#"    <Placemark>
      <name>{}</name>
      <Polygon>
        <outerBoundaryIs>
          <LinearRing>
            <coordinates>{}</coordinates>
          </LinearRing>
        </outerBoundaryIs>
      </Polygon>
    </Placemark>"#,
        name, coordinates
    )
}
