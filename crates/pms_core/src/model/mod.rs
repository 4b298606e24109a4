//! Metadata attribute set model.
//!
//! # Responsibility
//! - Define the composition tree: `Atomic` leaves, `Composite` internal
//!   nodes and `Prefixed` edges that attach an optional prefix and role.
//! - Validate construction arguments once, so traversal never re-checks.
//!
//! # Invariants
//! - Nodes are immutable after construction.
//! - `Prefixed` shares (never owns) the set it wraps; the same set may be
//!   wrapped by many `Prefixed` nodes.
//! - Trees are acyclic: a composite can only wrap sets that were fully
//!   built before it.

pub mod atomic;
pub mod attribute;
pub mod composite;
pub mod prefixed;
pub mod set;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Invalid construction input for a metadata set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Set name is blank after trim.
    EmptySetName { kind: &'static str },
    /// An attribute record has a blank name.
    EmptyAttributeName { set: String, position: usize },
    /// Two records of the same atomic set share a name.
    DuplicateAttributeName { set: String, name: String },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySetName { kind } => write!(f, "{kind} set name must not be empty"),
            Self::EmptyAttributeName { set, position } => write!(
                f,
                "attribute #{position} of set `{set}` has an empty name"
            ),
            Self::DuplicateAttributeName { set, name } => {
                write!(f, "attribute `{name}` is defined more than once in set `{set}`")
            }
        }
    }
}

impl Error for ModelError {}

pub(crate) fn require_set_name(name: String, kind: &'static str) -> ModelResult<String> {
    if name.trim().is_empty() {
        return Err(ModelError::EmptySetName { kind });
    }
    Ok(name)
}
