//! Composite metadata attribute set.

use super::prefixed::Prefixed;
use super::{require_set_name, ModelResult};
use crate::visit::{Node, Visitable, Visitor};

/// Internal node: an ordered list of prefixed sub-sets.
///
/// Child order decides traversal order, and therefore the order of the
/// flattened attribute list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    name: String,
    description: String,
    children: Vec<Prefixed>,
}

impl Composite {
    /// Creates a composite set.
    ///
    /// An empty `children` list is valid; the set then contributes no
    /// attributes but is still visited.
    ///
    /// # Errors
    /// - `EmptySetName` when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        children: Vec<Prefixed>,
    ) -> ModelResult<Self> {
        Ok(Self {
            name: require_set_name(name.into(), "composite")?,
            description: description.into(),
            children,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn children(&self) -> &[Prefixed] {
        &self.children
    }

    /// Same as [`Composite::children`].
    pub fn components(&self) -> &[Prefixed] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Visitable for Composite {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.pre(Node::Composite(self));
        for child in &self.children {
            child.accept(visitor);
        }
        visitor.post(Node::Composite(self));
    }
}
