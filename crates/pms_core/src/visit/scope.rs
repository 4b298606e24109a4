//! Prefix and role bookkeeping shared by every concrete visitor.
//!
//! # Invariants
//! - The prefix stack depth equals the number of `Prefixed` ancestors of
//!   the node being visited.
//! - Entries are pushed as declared (absent or empty included) and only
//!   filtered when the qualifying prefix is joined.
//! - Leaving a `Prefixed` node clears the current role; it does not restore
//!   an outer role.

use super::{Node, Visitor};

/// Separator placed between prefixes and before the bare attribute name.
pub const DEFAULT_PREFIX_SEPARATOR: &str = "__";

/// Stack of ancestor prefixes plus the role of the innermost `Prefixed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixScope {
    separator: String,
    prefixes: Vec<Option<String>>,
    role: Option<String>,
}

impl Default for PrefixScope {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX_SEPARATOR)
    }
}

impl PrefixScope {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            prefixes: Vec::new(),
            role: None,
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Updates the stack for a node being entered.
    pub fn pre(&mut self, node: Node<'_>) {
        if let Node::Prefixed(prefixed) = node {
            self.prefixes.push(prefixed.prefix().map(str::to_owned));
            self.role = prefixed.role().map(str::to_owned);
        }
    }

    /// Updates the stack for a node being left.
    pub fn post(&mut self, node: Node<'_>) {
        if let Node::Prefixed(_) = node {
            self.prefixes.pop();
            self.role = None;
        }
    }

    /// Non-empty ancestor prefixes joined by the separator, with a trailing
    /// separator; empty when no ancestor has a prefix.
    pub fn current_prefix(&self) -> String {
        let joined = self
            .prefixes
            .iter()
            .filter_map(|prefix| prefix.as_deref())
            .filter(|prefix| !prefix.is_empty())
            .collect::<Vec<_>>()
            .join(&self.separator);
        if joined.is_empty() {
            joined
        } else {
            joined + &self.separator
        }
    }

    /// Qualifies a bare attribute name with the current prefix.
    pub fn qualify(&self, name: &str) -> String {
        format!("{}{name}", self.current_prefix())
    }

    /// Role of the innermost `Prefixed` entered and not yet left.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Number of `Prefixed` ancestors currently on the stack.
    pub fn depth(&self) -> usize {
        self.prefixes.len()
    }

    /// Drops all traversal state, keeping the separator.
    pub fn reset(&mut self) {
        self.prefixes.clear();
        self.role = None;
    }
}

/// Base for visitors that need qualified names.
///
/// Implementors expose their `PrefixScope` and override `enter`/`leave`.
/// The blanket `Visitor` impl updates the scope before `enter` and before
/// `leave`, so hooks always observe consistent prefix/role state.
pub trait PmsVisitor {
    fn scope(&self) -> &PrefixScope;

    fn scope_mut(&mut self) -> &mut PrefixScope;

    fn enter(&mut self, _node: Node<'_>) {}

    fn leave(&mut self, _node: Node<'_>) {}
}

impl<T: PmsVisitor + ?Sized> Visitor for T {
    fn pre(&mut self, node: Node<'_>) {
        self.scope_mut().pre(node);
        self.enter(node);
    }

    fn post(&mut self, node: Node<'_>) {
        self.scope_mut().post(node);
        self.leave(node);
    }
}
