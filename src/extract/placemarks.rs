use ::kml::{
    types::{Geometry, Placemark, Polygon},
    Kml,
};

use super::{ExtractError, ParsedPolygon};
use crate::geometry::{self, open_ring, Coordinate, PolygonError};

#[derive(Debug, Default)]
pub struct Collector {
    polygons: Vec<ParsedPolygon>,
    errors: Vec<ExtractError>,
}

impl Collector {
    pub fn visit(&mut self, node: &Kml) {
        match node {
            Kml::KmlDocument(document) => self.visit_all(&document.elements),
            Kml::Document { elements, .. } => self.visit_all(elements),
            Kml::Folder { elements, .. } => self.visit_all(elements),
            Kml::Placemark(placemark) => self.visit_placemark(placemark),
            _ => (),
        }
    }

    pub fn finish(self) -> (Vec<ParsedPolygon>, Vec<ExtractError>) {
        (self.polygons, self.errors)
    }

    fn visit_all(&mut self, nodes: &[Kml]) {
        for node in nodes {
            self.visit(node);
        }
    }

    fn visit_placemark(&mut self, placemark: &Placemark) {
        let mut rings = vec![];

        if let Some(geometry) = &placemark.geometry {
            collect_polygons(geometry, &mut rings);
        }

        if rings.is_empty() {
            log::trace!(
                "placemark {:?} carries no polygon",
                placemark.name.as_deref().unwrap_or_default()
            );
            return;
        }

        let numbered = rings.len() > 1;

        for (i, polygon) in rings.into_iter().enumerate() {
            let name = match (&placemark.name, numbered) {
                (Some(name), true) => format!("{} ({})", name, i + 1),
                (Some(name), false) => name.clone(),
                (None, _) => format!("Polygon {}", self.polygons.len() + 1),
            };

            let coordinates = outer_ring(polygon);

            if !geometry::has_minimum_vertices(&coordinates) {
                let reason = PolygonError::TooFewVertices {
                    found: coordinates.len(),
                };
                log::warn!("skipping {}: {}", name, reason);
                self.errors.push(ExtractError::Skipped { name, reason });
                continue;
            }

            self.polygons.push(ParsedPolygon {
                name: Some(name),
                description: placemark.description.clone(),
                area_m2: geometry::area(&coordinates),
                coordinates,
            });
        }
    }
}

fn collect_polygons<'a>(geometry: &'a Geometry, rings: &mut Vec<&'a Polygon>) {
    match geometry {
        Geometry::Polygon(polygon) => rings.push(polygon),
        Geometry::MultiGeometry(multi) => {
            for geometry in &multi.geometries {
                collect_polygons(geometry, rings);
            }
        }
        _ => (),
    }
}

/// KML writes `lng,lat[,alt]`. Repeated consecutive points and the closing
/// repeat of the first point are dropped.
fn outer_ring(polygon: &Polygon) -> Vec<Coordinate> {
    let mut coordinates: Vec<Coordinate> = polygon
        .outer
        .coords
        .iter()
        .map(|coord| Coordinate::new(coord.y, coord.x))
        .collect();
    coordinates.dedup();

    open_ring(&coordinates).to_vec()
}
