use std::io::{Cursor, Read};

use zip::ZipArchive;

use super::ExtractError;

const DOCUMENT_NAME: &str = "doc.kml";

/// Decompresses the KML document of a KMZ archive: `doc.kml` wherever it sits,
/// else the first `.kml` entry.
pub fn read_kml_entry(content: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(content))?;
    let names = (0..archive.len())
        .map(|index| Ok(archive.by_index(index)?.name().to_string()))
        .collect::<Result<Vec<String>, ExtractError>>()?;

    let entry = names
        .iter()
        .find(|name| file_name(name).eq_ignore_ascii_case(DOCUMENT_NAME))
        .or_else(|| names.iter().find(|name| is_kml(name)))
        .ok_or(ExtractError::NoKmlEntry)?;

    log::debug!("reading {} out of {} archive entries", entry, names.len());

    let mut file = archive.by_name(entry)?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;

    Ok(text)
}

fn file_name(entry: &str) -> &str {
    entry.rsplit('/').next().unwrap_or(entry)
}

fn is_kml(entry: &str) -> bool {
    !entry.ends_with('/') && file_name(entry).to_ascii_lowercase().ends_with(".kml")
}
