//! Visitor protocol over the metadata set tree.
//!
//! # Responsibility
//! - Define the `pre`/`post` callback pair every consumer implements.
//! - Let each node drive its own depth-first walk through `accept`.
//! - Keep prefix/role bookkeeping in one place (`PmsVisitor`) so concrete
//!   visitors only react to the nodes they care about.
//!
//! # Invariants
//! - `pre(node)` fires before any descendant is visited and `post(node)`
//!   after all of them, children in declaration order.
//! - Traversal is synchronous and single-threaded. One visitor instance
//!   serves one traversal; independent instances may walk the same tree
//!   concurrently because trees are read-only.

pub mod attribute_list;
pub mod csv_export;
pub mod print;
pub mod scope;

pub use attribute_list::{flatten, AttributeListVisitor};
pub use csv_export::CsvVisitor;
pub use print::{render_to_string, PrintVisitor, DEFAULT_INDENTATION};
pub use scope::{PmsVisitor, PrefixScope, DEFAULT_PREFIX_SEPARATOR};

use crate::model::atomic::Atomic;
use crate::model::composite::Composite;
use crate::model::prefixed::Prefixed;

/// Borrowed view of the node currently being visited.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Atomic(&'a Atomic),
    Composite(&'a Composite),
    Prefixed(&'a Prefixed),
}

/// Consumer of a depth-first walk.
pub trait Visitor {
    /// Called when the walk reaches `node`, before its children.
    fn pre(&mut self, node: Node<'_>);
    /// Called after every child of `node` has been visited.
    fn post(&mut self, node: Node<'_>);
}

/// A node that can walk itself and its children.
pub trait Visitable {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V);
}

impl Visitable for Node<'_> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Self::Atomic(atomic) => atomic.accept(visitor),
            Self::Composite(composite) => composite.accept(visitor),
            Self::Prefixed(prefixed) => prefixed.accept(visitor),
        }
    }
}
