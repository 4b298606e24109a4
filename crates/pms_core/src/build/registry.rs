//! Name to metadata set registry used while building.

use super::{BuildError, BuildResult};
use crate::model::set::MetadataSet;
use indexmap::IndexMap;

/// Ordered mapping from set name to set, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    sets: IndexMap<String, MetadataSet>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `set` under `name`, returning the entry it replaced.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        set: impl Into<MetadataSet>,
    ) -> Option<MetadataSet> {
        self.sets.insert(name.into(), set.into())
    }

    pub fn get(&self, name: &str) -> Option<&MetadataSet> {
        self.sets.get(name)
    }

    /// Looks up `include` on behalf of the composite named `composite`.
    pub fn resolve(&self, include: &str, composite: &str) -> BuildResult<MetadataSet> {
        self.sets
            .get(include)
            .cloned()
            .ok_or_else(|| BuildError::UnknownReference {
                include: include.to_string(),
                composite: composite.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataSet)> {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }
}

#[cfg(test)]
mod tests {
    use super::Registry;
    use crate::model::atomic::Atomic;
    use crate::model::attribute::AttributeRecord;

    #[test]
    fn overwrite_keeps_position_and_returns_previous() {
        let mut registry = Registry::new();
        registry.insert("first", Atomic::new("first", "First", vec![]).expect("atomic"));
        registry.insert("second", Atomic::new("second", "Second", vec![]).expect("atomic"));

        let replacement = Atomic::new(
            "first",
            "First again",
            vec![AttributeRecord::named("a")],
        )
        .expect("atomic");
        let previous = registry
            .insert("first", replacement)
            .expect("first should be replaced");

        assert_eq!(previous.description(), "First");
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["first", "second"]);
        assert_eq!(
            registry.get("first").map(|set| set.description()),
            Some("First again")
        );
    }
}
