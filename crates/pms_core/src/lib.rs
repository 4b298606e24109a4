//! Core library for metadata standard attribute sets.
//!
//! Models hierarchical metadata attribute specifications (atomic sets,
//! composites of prefixed sets) and enumerates them through visitors:
//! qualified attribute lists, indented printouts and CSV exports.

pub mod build;
pub mod config;
pub mod loader;
pub mod logging;
pub mod model;
pub mod visit;

pub use build::{
    apply_definitions, build_composite, create_metadata_sets, BuildError, BuildResult,
    CompositeDefinition, Registry, SpecEntry,
};
pub use config::PmsConfig;
pub use loader::{
    load_all_metadata_sets, load_atomic_from_csv, load_atomic_from_reader,
    load_atomics_from_dir, load_composite_definitions, parse_composite_definitions, LoadError,
    LoadResult,
};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status};
pub use model::atomic::Atomic;
pub use model::attribute::AttributeRecord;
pub use model::composite::Composite;
pub use model::prefixed::Prefixed;
pub use model::set::MetadataSet;
pub use model::{ModelError, ModelResult};
pub use visit::{
    flatten, render_to_string, AttributeListVisitor, CsvVisitor, Node, PmsVisitor, PrefixScope,
    PrintVisitor, Visitable, Visitor, DEFAULT_INDENTATION, DEFAULT_PREFIX_SEPARATOR,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
