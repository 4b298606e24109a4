//! Declarative composite definitions, as authored in YAML.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

/// One child of a composite: which set to include, under which prefix and
/// role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    /// Only a string or null is accepted; `123` or `true` are rejected rather
    /// than coerced to text.
    #[serde(default, deserialize_with = "string_or_null")]
    pub prefix: Option<String>,
    /// Registry name of an atomic or earlier composite set.
    pub include: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl SpecEntry {
    pub fn include(name: impl Into<String>) -> Self {
        Self {
            prefix: None,
            include: name.into(),
            role: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(prefix)) => Ok(Some(prefix)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "prefix must be a string or null, found {}",
            value_kind(&other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// A named composite definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeDefinition {
    pub name: String,
    pub description: String,
    pub specification: Vec<SpecEntry>,
}

impl CompositeDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        specification: Vec<SpecEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            specification,
        }
    }
}
