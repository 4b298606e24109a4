//! Attribute record: one documented metadata field.

use serde::{Deserialize, Serialize};

/// One metadata attribute as declared in a tabular source.
///
/// All four columns are free text. `required` is kept verbatim (sources use
/// values such as `yes`, `no` or `if applicable`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeRecord {
    /// Bare attribute name, or the qualified name once flattened.
    pub name: String,
    /// Where the value comes from.
    pub source: String,
    pub required: String,
    pub comments: String,
}

impl AttributeRecord {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        required: impl Into<String>,
        comments: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            required: required.into(),
            comments: comments.into(),
        }
    }

    /// Creates a record that only carries a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "", "", "")
    }

    /// Returns a copy whose name is `prefix` followed by the bare name.
    ///
    /// `prefix` is expected to already end with the separator (or be empty).
    pub fn qualified(&self, prefix: &str) -> Self {
        Self {
            name: format!("{prefix}{}", self.name),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AttributeRecord;

    #[test]
    fn qualified_only_rewrites_name() {
        let record = AttributeRecord::new("title", "global", "yes", "free text");
        let qualified = record.qualified("driving_model__");

        assert_eq!(qualified.name, "driving_model__title");
        assert_eq!(qualified.source, "global");
        assert_eq!(qualified.required, "yes");
        assert_eq!(qualified.comments, "free text");
        assert_eq!(record.name, "title");
    }

    #[test]
    fn qualified_with_empty_prefix_is_identity() {
        let record = AttributeRecord::named("domain");
        assert_eq!(record.qualified(""), record);
    }
}
