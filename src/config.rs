use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for the edge-list text format.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MstConfig {
    /// Field separator inside an edge line, e.g. `10,0,1`.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Lines starting with this prefix are ignored.
    #[serde(default = "default_comment")]
    pub comment: String,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            comment: default_comment(),
        }
    }
}

impl MstConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: MstConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_comment() -> String {
    "#".to_string()
}
