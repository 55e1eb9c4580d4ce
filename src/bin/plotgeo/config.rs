use std::path::Path;

use anyhow::Context;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Indent the JSON written to stdout.
    pub pretty: bool,
    /// Also reject polygons with repeated consecutive vertices.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty: true,
            strict: true,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let file = std::fs::File::open(path)
            .with_context(|| format!("cannot open config {}", path.display()))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("cannot parse config {}", path.display()))
    }
}
