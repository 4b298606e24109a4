//! Atomic metadata attribute set.
//!
//! # Responsibility
//! - Hold one named, described, ordered list of attribute records.
//!
//! # Invariants
//! - Record names are non-empty and unique within one atomic set.
//! - Record order is declaration order and is preserved by traversal.

use super::attribute::AttributeRecord;
use super::{require_set_name, ModelError, ModelResult};
use crate::visit::{Node, Visitable, Visitor};
use std::collections::HashSet;

/// Leaf of the composition tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atomic {
    name: String,
    description: String,
    records: Vec<AttributeRecord>,
}

impl Atomic {
    /// Creates an atomic set from its records.
    ///
    /// # Errors
    /// - `EmptySetName` when `name` is blank.
    /// - `EmptyAttributeName` when a record has a blank name.
    /// - `DuplicateAttributeName` when two records share a name.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        records: Vec<AttributeRecord>,
    ) -> ModelResult<Self> {
        let name = require_set_name(name.into(), "atomic")?;

        let mut seen = HashSet::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(ModelError::EmptyAttributeName {
                    set: name,
                    position,
                });
            }
            if !seen.insert(record.name.as_str()) {
                return Err(ModelError::DuplicateAttributeName {
                    set: name.clone(),
                    name: record.name.clone(),
                });
            }
        }

        Ok(Self {
            name,
            description: description.into(),
            records,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Records in declaration order.
    pub fn records(&self) -> &[AttributeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Visitable for Atomic {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.pre(Node::Atomic(self));
        visitor.post(Node::Atomic(self));
    }
}

#[cfg(test)]
mod tests {
    use super::Atomic;
    use crate::model::attribute::AttributeRecord;
    use crate::model::ModelError;

    #[test]
    fn keeps_records_in_declaration_order() {
        let atomic = Atomic::new(
            "dummy",
            "Dummy set",
            vec![AttributeRecord::named("b"), AttributeRecord::named("a")],
        )
        .expect("atomic should build");

        let names: Vec<&str> = atomic.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(atomic.len(), 2);
    }

    #[test]
    fn rejects_duplicate_record_names() {
        let err = Atomic::new(
            "dummy",
            "Dummy set",
            vec![AttributeRecord::named("a"), AttributeRecord::named("a")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateAttributeName {
                set: "dummy".to_string(),
                name: "a".to_string(),
            }
        );
    }

    #[test]
    fn rejects_blank_record_name() {
        let err = Atomic::new(
            "dummy",
            "Dummy set",
            vec![AttributeRecord::named("a"), AttributeRecord::named("  ")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::EmptyAttributeName {
                set: "dummy".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn rejects_blank_set_name() {
        let err = Atomic::new(" ", "Nameless", vec![]).unwrap_err();
        assert_eq!(err, ModelError::EmptySetName { kind: "atomic" });
    }

    #[test]
    fn empty_atomic_is_allowed() {
        let atomic = Atomic::new("empty", "No attributes", vec![]).expect("empty atomic");
        assert!(atomic.is_empty());
    }
}
