//! Flattening visitor: the ordered list of qualified attribute records.

use super::scope::{PmsVisitor, PrefixScope};
use super::{Node, Visitable};
use crate::config::PmsConfig;
use crate::model::attribute::AttributeRecord;

/// Collects every record reachable from the visited root, qualified by its
/// ancestor prefixes, in depth-first left-to-right order.
///
/// State is not reset between traversals; walking a second tree with the
/// same instance appends to the first result. Use `into_records` or call
/// `reset` before reuse.
#[derive(Debug, Clone, Default)]
pub struct AttributeListVisitor {
    scope: PrefixScope,
    records: Vec<AttributeRecord>,
}

impl AttributeListVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            scope: PrefixScope::new(separator),
            records: Vec::new(),
        }
    }

    pub fn with_config(config: &PmsConfig) -> Self {
        Self::with_separator(config.prefix_separator.as_str())
    }

    pub fn records(&self) -> &[AttributeRecord] {
        &self.records
    }

    /// Qualified names in traversal order.
    pub fn attribute_names(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.name.as_str()).collect()
    }

    pub fn into_records(self) -> Vec<AttributeRecord> {
        self.records
    }

    pub fn reset(&mut self) {
        self.scope.reset();
        self.records.clear();
    }
}

impl PmsVisitor for AttributeListVisitor {
    fn scope(&self) -> &PrefixScope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut PrefixScope {
        &mut self.scope
    }

    fn enter(&mut self, node: Node<'_>) {
        if let Node::Atomic(atomic) = node {
            let prefix = self.scope.current_prefix();
            self.records.extend(
                atomic
                    .records()
                    .iter()
                    .map(|record| record.qualified(&prefix)),
            );
        }
    }
}

/// Flattens the tree rooted at `root` with a fresh visitor.
pub fn flatten<T: Visitable + ?Sized>(root: &T, separator: &str) -> Vec<AttributeRecord> {
    let mut visitor = AttributeListVisitor::with_separator(separator);
    root.accept(&mut visitor);
    visitor.into_records()
}
