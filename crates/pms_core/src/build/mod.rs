//! Registry-based assembly of composite metadata sets.
//!
//! # Responsibility
//! - Resolve `include` references against sets built so far.
//! - Build composites in definition order, registering each one as soon as
//!   it exists so later definitions can include it.
//!
//! # Invariants
//! - A definition can only include names registered before it, so the
//!   resulting graph is acyclic.
//! - Redefining a registered name replaces the old entry in place (same
//!   position). Composites built earlier keep pointing at the old set.
//!   This is logged at `warn` because it is usually an authoring mistake.

pub mod definition;
pub mod registry;

pub use definition::{CompositeDefinition, SpecEntry};
pub use registry::Registry;

use crate::model::atomic::Atomic;
use crate::model::composite::Composite;
use crate::model::prefixed::Prefixed;
use crate::model::set::MetadataSet;
use crate::model::ModelError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Instant;

pub type BuildResult<T> = Result<T, BuildError>;

/// Errors from composite assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// `include` names a set that is not registered (yet).
    UnknownReference { include: String, composite: String },
    /// The composite itself failed model validation.
    Model(ModelError),
}

impl Display for BuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownReference { include, composite } => write!(
                f,
                "composite `{composite}` includes unknown metadata set `{include}`"
            ),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Model(err) => Some(err),
            Self::UnknownReference { .. } => None,
        }
    }
}

impl From<ModelError> for BuildError {
    fn from(value: ModelError) -> Self {
        Self::Model(value)
    }
}

/// Builds one composite, resolving its includes against `registry`.
pub fn build_composite(
    definition: &CompositeDefinition,
    registry: &Registry,
) -> BuildResult<Composite> {
    let children = definition
        .specification
        .iter()
        .map(|entry| -> BuildResult<Prefixed> {
            let wrapped = registry.resolve(&entry.include, &definition.name)?;
            Ok(Prefixed::new(
                entry.prefix.clone(),
                wrapped,
                entry.role.clone(),
            ))
        })
        .collect::<BuildResult<Vec<_>>>()?;

    Ok(Composite::new(
        definition.name.as_str(),
        definition.description.as_str(),
        children,
    )?)
}

/// Applies `definitions` in order, registering each composite once built.
///
/// Stops at the first failing definition; composites built before it stay
/// registered.
pub fn apply_definitions(
    registry: &mut Registry,
    definitions: &[CompositeDefinition],
) -> BuildResult<()> {
    for definition in definitions {
        let composite = build_composite(definition, registry)?;
        let replaced = registry.insert(definition.name.clone(), Arc::new(composite));
        if let Some(previous) = replaced {
            warn!(
                "event=build_sets module=build status=overwrite name={} previous_kind={}",
                definition.name,
                previous.kind()
            );
        }
    }
    Ok(())
}

/// Creates the full registry: all atomics first, then every composite
/// definition in order.
pub fn create_metadata_sets<I>(
    atomics: I,
    definitions: &[CompositeDefinition],
) -> BuildResult<Registry>
where
    I: IntoIterator<Item = (String, Arc<Atomic>)>,
{
    let started_at = Instant::now();
    let mut registry = Registry::new();
    for (name, atomic) in atomics {
        registry.insert(name, MetadataSet::Atomic(atomic));
    }
    let atomic_count = registry.len();

    if let Err(err) = apply_definitions(&mut registry, definitions) {
        warn!(
            "event=build_sets module=build status=error duration_ms={} error={}",
            started_at.elapsed().as_millis(),
            err
        );
        return Err(err);
    }

    info!(
        "event=build_sets module=build status=ok atomics={} composites={} duration_ms={}",
        atomic_count,
        definitions.len(),
        started_at.elapsed().as_millis()
    );
    Ok(registry)
}
