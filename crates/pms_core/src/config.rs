//! Runtime configuration for loaders and visitors.
//!
//! # Invariants
//! - Every field has a default, so a partial or empty YAML document is a
//!   valid configuration.

use crate::loader::{LoadError, LoadResult};
use crate::visit::{DEFAULT_INDENTATION, DEFAULT_PREFIX_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Knobs shared by the CLI, loaders and visitors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PmsConfig {
    /// Placed between prefixes and before bare attribute names.
    pub prefix_separator: String,
    /// One indentation level of the printed rendering.
    pub indentation: String,
    /// File extension (without dot) picked up by the directory scan.
    pub atomic_extension: String,
}

impl Default for PmsConfig {
    fn default() -> Self {
        Self {
            prefix_separator: DEFAULT_PREFIX_SEPARATOR.to_string(),
            indentation: DEFAULT_INDENTATION.to_string(),
            atomic_extension: "csv".to_string(),
        }
    }
}

impl PmsConfig {
    /// Parses a YAML document; an empty document yields the defaults.
    pub fn from_yaml_str(text: &str, origin: &Path) -> LoadResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|source| LoadError::Yaml {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Reads and parses a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text, path)
    }
}
