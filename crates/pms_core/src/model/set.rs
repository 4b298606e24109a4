//! Shared handle over the two kinds of metadata set.

use super::atomic::Atomic;
use super::composite::Composite;
use crate::visit::{Visitable, Visitor};
use std::sync::Arc;

/// An atomic or composite set, shared by reference count.
///
/// This is what the registry stores and what `Prefixed` wraps, so one set
/// can appear under several composites without being copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataSet {
    Atomic(Arc<Atomic>),
    Composite(Arc<Composite>),
}

impl MetadataSet {
    pub fn name(&self) -> &str {
        match self {
            Self::Atomic(atomic) => atomic.name(),
            Self::Composite(composite) => composite.name(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Atomic(atomic) => atomic.description(),
            Self::Composite(composite) => composite.description(),
        }
    }

    /// `"atomic"` or `"composite"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Atomic(_) => "atomic",
            Self::Composite(_) => "composite",
        }
    }

    pub fn as_atomic(&self) -> Option<&Arc<Atomic>> {
        match self {
            Self::Atomic(atomic) => Some(atomic),
            Self::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&Arc<Composite>> {
        match self {
            Self::Atomic(_) => None,
            Self::Composite(composite) => Some(composite),
        }
    }

    /// Returns whether both handles point at the same set instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Atomic(left), Self::Atomic(right)) => Arc::ptr_eq(left, right),
            (Self::Composite(left), Self::Composite(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl Visitable for MetadataSet {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Self::Atomic(atomic) => atomic.accept(visitor),
            Self::Composite(composite) => composite.accept(visitor),
        }
    }
}

impl From<Arc<Atomic>> for MetadataSet {
    fn from(value: Arc<Atomic>) -> Self {
        Self::Atomic(value)
    }
}

impl From<Atomic> for MetadataSet {
    fn from(value: Atomic) -> Self {
        Self::Atomic(Arc::new(value))
    }
}

impl From<Arc<Composite>> for MetadataSet {
    fn from(value: Arc<Composite>) -> Self {
        Self::Composite(value)
    }
}

impl From<Composite> for MetadataSet {
    fn from(value: Composite) -> Self {
        Self::Composite(Arc::new(value))
    }
}
