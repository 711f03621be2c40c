//! Schema document model for the SDK

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::field::FieldSchema;

/// JSON Schema dialect written by the schema builder
pub const DRAFT_2020_12: &str = "http://json-schema.org/draft/2020-12/schema";

/// Ordered mapping from property name to field schema
///
/// Insertion order is preserved through serialization so that exported
/// columns and fields appear in the order they were defined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<(String, FieldSchema)>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, replacing the schema in place when the name exists
    pub fn insert(&mut self, name: impl Into<String>, schema: FieldSchema) {
        let name = name.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = schema,
            None => self.0.push((name, schema)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldSchema> {
        let idx = self.0.iter().position(|(n, _)| n == name)?;
        Some(self.0.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.0.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, FieldSchema)> for Properties {
    fn from_iter<I: IntoIterator<Item = (N, FieldSchema)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        for (name, schema) in iter {
            properties.insert(name, schema);
        }
        properties
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, schema) in &self.0 {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}

struct PropertiesVisitor;

impl<'de> Visitor<'de> for PropertiesVisitor {
    type Value = Properties;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of property names to field schemas")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut properties = Properties::new();
        while let Some((name, schema)) = access.next_entry::<String, FieldSchema>()? {
            properties.insert(name, schema);
        }
        Ok(properties)
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PropertiesVisitor)
    }
}

/// Root JSON Schema object describing one record shape
///
/// # Example
///
/// ```rust
/// use schema_builder_sdk::models::{FieldSchema, SchemaDocument};
///
/// let doc = SchemaDocument::new("User")
///     .with_property("id", FieldSchema::integer(None, None), true)
///     .with_property("nickname", FieldSchema::string(), false);
///
/// assert!(doc.is_required("id"));
/// assert!(!doc.is_required("nickname"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    #[serde(rename = "$id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub required: Vec<String>,
}

impl SchemaDocument {
    /// Create an empty object schema with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            schema_type: Some("object".to_string()),
            ..Default::default()
        }
    }

    /// Builder-style property insertion
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        schema: FieldSchema,
        required: bool,
    ) -> Self {
        let name = name.into();
        if required && !self.is_required(&name) {
            self.required.push(name.clone());
        }
        self.properties.insert(name, schema);
        self
    }

    /// Title if present and non-empty, otherwise `default`
    pub fn title_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => default,
        }
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Required names that do not correspond to any property
    pub fn dangling_required(&self) -> Vec<&str> {
        self.required
            .iter()
            .filter(|r| !self.properties.contains(r))
            .map(String::as_str)
            .collect()
    }
}
