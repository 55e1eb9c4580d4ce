//! Polygon extraction from KML documents and KMZ archives exported by GIS
//! tools.
//!
//! Nothing here fails hard: problems are collected as messages next to
//! whatever polygons could be read, so a caller can show them inline.

mod archive;
mod placemarks;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Coordinate, PolygonError};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unreadable KMZ archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("KMZ archive contains no KML document")]
    NoKmlEntry,
    #[error("KML document is not valid UTF-8")]
    NotUtf8(#[from] std::str::Utf8Error),
    #[error("malformed KML: {0}")]
    Kml(#[from] ::kml::Error),
    #[error("{name}: skipped, {reason}")]
    Skipped { name: String, reason: PolygonError },
    #[error("no usable polygons found in the document")]
    NoPolygons,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedPolygon {
    pub name: Option<String>,
    pub description: Option<String>,
    pub coordinates: Vec<Coordinate>,
    pub area_m2: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub polygons: Vec<ParsedPolygon>,
    pub errors: Vec<String>,
}

impl ParseOutcome {
    fn failed(error: ExtractError) -> Self {
        log::warn!("{}", error);
        Self {
            polygons: vec![],
            errors: vec![error.to_string()],
        }
    }
}

/// Extracts every placemark polygon from a KML document, or from the KML
/// document inside a KMZ archive when `is_zipped` is set.
pub fn parse(content: &[u8], is_zipped: bool) -> ParseOutcome {
    let text = if is_zipped {
        match archive::read_kml_entry(content) {
            Ok(text) => text,
            Err(err) => return ParseOutcome::failed(err),
        }
    } else {
        match std::str::from_utf8(content) {
            Ok(text) => text.to_string(),
            Err(err) => return ParseOutcome::failed(err.into()),
        }
    };

    parse_kml(&text)
}

/// Reads a `.kml` or `.kmz` file, telling them apart by extension.
pub fn parse_file(path: impl AsRef<Path>) -> ParseOutcome {
    let path = path.as_ref();
    let is_zipped = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("kmz"));

    match std::fs::read(path) {
        Ok(content) => parse(&content, is_zipped),
        Err(source) => ParseOutcome::failed(ExtractError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn parse_kml(text: &str) -> ParseOutcome {
    let document: ::kml::Kml = match text.parse() {
        Ok(document) => document,
        Err(err) => return ParseOutcome::failed(ExtractError::Kml(err)),
    };

    let mut collector = placemarks::Collector::default();
    collector.visit(&document);
    let (polygons, mut errors) = collector.finish();

    if polygons.is_empty() {
        errors.push(ExtractError::NoPolygons);
    }

    log::debug!(
        "extracted {} polygons, {} problems",
        polygons.len(),
        errors.len()
    );

    ParseOutcome {
        polygons,
        errors: errors.iter().map(ToString::to_string).collect(),
    }
}
