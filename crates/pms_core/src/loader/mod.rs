//! File loaders that produce the in-memory metadata set tree.
//!
//! # Responsibility
//! - Read atomic sets from headerless CSV files (first line is the
//!   description) and directories of them.
//! - Read composite definitions from YAML.
//! - Chain both into a fully built `Registry`.
//!
//! # Invariants
//! - Directory scans are sorted by file name, so load order is
//!   deterministic across platforms.
//! - Errors carry the path of the offending source; nothing is skipped
//!   silently.

pub mod atomic_csv;
pub mod composite_yaml;

pub use atomic_csv::{load_atomic_from_csv, load_atomic_from_reader, load_atomics_from_dir};
pub use composite_yaml::{load_composite_definitions, parse_composite_definitions};

use crate::build::{create_metadata_sets, BuildError, Registry};
use crate::config::PmsConfig;
use crate::model::ModelError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while reading metadata set sources.
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// A CSV source has no description line.
    EmptySource { path: PathBuf },
    /// A CSV row lacks a field or has a blank attribute name.
    MalformedRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    Model(ModelError),
    Build(BuildError),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read `{}`: {source}", path.display()),
            Self::EmptySource { path } => {
                write!(f, "`{}` has no description line", path.display())
            }
            Self::MalformedRecord { path, line, reason } => {
                write!(f, "malformed record at `{}` line {line}: {reason}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "invalid CSV in `{}`: {source}", path.display())
            }
            Self::Yaml { path, source } => {
                write!(f, "invalid YAML in `{}`: {source}", path.display())
            }
            Self::Model(err) => write!(f, "{err}"),
            Self::Build(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Yaml { source, .. } => Some(source),
            Self::Model(err) => Some(err),
            Self::Build(err) => Some(err),
            Self::EmptySource { .. } | Self::MalformedRecord { .. } => None,
        }
    }
}

impl From<ModelError> for LoadError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

impl From<BuildError> for LoadError {
    fn from(value: BuildError) -> Self {
        Self::Build(value)
    }
}

/// Loads every atomic set in `atomic_dir`, then applies the composite
/// definitions in `composite_path` when given.
pub fn load_all_metadata_sets(
    atomic_dir: impl AsRef<Path>,
    composite_path: Option<&Path>,
    config: &PmsConfig,
) -> LoadResult<Registry> {
    let atomics = load_atomics_from_dir(atomic_dir, &config.atomic_extension)?;
    let definitions = match composite_path {
        Some(path) => load_composite_definitions(path)?,
        None => Vec::new(),
    };
    Ok(create_metadata_sets(atomics, &definitions)?)
}
