//! Prefixed edge between a composite and the set it includes.
//!
//! # Invariants
//! - `wrapped` is exactly one of `Atomic` or `Composite` (see `MetadataSet`).
//! - The prefix is stored as given; `Some("")` and `None` both mean "no
//!   prefix" and are only folded together when names are qualified.

use super::attribute::AttributeRecord;
use super::set::MetadataSet;
use crate::visit::{flatten, Node, Visitable, Visitor};

/// A metadata set included under an optional prefix and role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefixed {
    prefix: Option<String>,
    wrapped: MetadataSet,
    role: Option<String>,
}

impl Prefixed {
    pub fn new(
        prefix: Option<String>,
        wrapped: impl Into<MetadataSet>,
        role: Option<String>,
    ) -> Self {
        Self {
            prefix,
            wrapped: wrapped.into(),
            role,
        }
    }

    /// Wraps a set with neither prefix nor role.
    pub fn bare(wrapped: impl Into<MetadataSet>) -> Self {
        Self::new(None, wrapped, None)
    }

    /// Wraps a set under `prefix`.
    pub fn with_prefix(prefix: impl Into<String>, wrapped: impl Into<MetadataSet>) -> Self {
        Self::new(Some(prefix.into()), wrapped, None)
    }

    /// Returns a copy carrying `role`.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Prefix exactly as declared.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Prefix with the empty string folded into `None`.
    pub fn effective_prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|prefix| !prefix.is_empty())
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn wrapped(&self) -> &MetadataSet {
        &self.wrapped
    }

    /// Qualified records reachable through this node, using `separator` at
    /// every level.
    pub fn attributes(&self, separator: &str) -> Vec<AttributeRecord> {
        flatten(self, separator)
    }
}

impl Visitable for Prefixed {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.pre(Node::Prefixed(self));
        self.wrapped.accept(visitor);
        visitor.post(Node::Prefixed(self));
    }
}

#[cfg(test)]
mod tests {
    use super::Prefixed;
    use crate::model::atomic::Atomic;
    use crate::model::attribute::AttributeRecord;
    use std::sync::Arc;

    fn dummy() -> Arc<Atomic> {
        Arc::new(
            Atomic::new(
                "dummy",
                "Dummy",
                vec![AttributeRecord::named("a"), AttributeRecord::named("b")],
            )
            .expect("dummy atomic"),
        )
    }

    #[test]
    fn empty_prefix_is_kept_but_not_effective() {
        let prefixed = Prefixed::with_prefix("", dummy());
        assert_eq!(prefixed.prefix(), Some(""));
        assert_eq!(prefixed.effective_prefix(), None);
    }

    #[test]
    fn attributes_apply_custom_separator() {
        let names: Vec<String> = Prefixed::with_prefix("abc", dummy())
            .attributes("@")
            .into_iter()
            .map(|record| record.name)
            .collect();
        assert_eq!(names, vec!["abc@a", "abc@b"]);
    }

    #[test]
    fn wrapping_shares_the_atomic() {
        let atomic = dummy();
        let first = Prefixed::bare(Arc::clone(&atomic));
        let second = Prefixed::with_prefix("pfx", Arc::clone(&atomic)).with_role("driver");

        assert!(first.wrapped().ptr_eq(second.wrapped()));
        assert_eq!(second.role(), Some("driver"));
        assert_eq!(Arc::strong_count(&atomic), 3);
    }
}
