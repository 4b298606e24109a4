//! Composite definitions from YAML.
//!
//! Document shape: a list whose items map a composite name to its body.
//!
//! ```yaml
//! - downscaled:
//!     description: Downscaled GCM output
//!     specification:
//!       - include: pcic_common_subset
//!       - prefix: driving
//!         include: gcm
//!         role: Driving model
//! ```
//!
//! An item may hold several names; they are applied in document order.

use super::{LoadError, LoadResult};
use crate::build::{CompositeDefinition, SpecEntry};
use indexmap::IndexMap;
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DefinitionBody {
    description: String,
    #[serde(default)]
    specification: Vec<SpecEntry>,
}

/// Parses composite definitions; `origin` is only used in errors.
pub fn parse_composite_definitions(
    text: &str,
    origin: &Path,
) -> LoadResult<Vec<CompositeDefinition>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Vec<IndexMap<String, DefinitionBody>> =
        serde_yaml::from_str(text).map_err(|source| LoadError::Yaml {
            path: origin.to_path_buf(),
            source,
        })?;

    Ok(items
        .into_iter()
        .flatten()
        .map(|(name, body)| CompositeDefinition::new(name, body.description, body.specification))
        .collect())
}

/// Reads and parses a composite definition file.
pub fn load_composite_definitions(path: impl AsRef<Path>) -> LoadResult<Vec<CompositeDefinition>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let definitions = parse_composite_definitions(&text, path)?;
    info!(
        "event=load_composites module=loader status=ok path={} definitions={}",
        path.display(),
        definitions.len()
    );
    Ok(definitions)
}
