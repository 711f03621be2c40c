//! Schema builder
//!
//! Assembles a [`SchemaDocument`] from an ordered list of field definitions,
//! the way the interactive form does: fields are added one at a time, enum
//! fields are expressed as string fields with an `enum` list, and the
//! document carries `$id` and `$schema` headers derived from the schema name.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::models::{
    ArrayField, DRAFT_2020_12, FieldSchema, NumericField, ObjectField, SchemaDocument,
    StringField, StringFormat,
};

/// Title used when the schema has no name
pub const DEFAULT_TITLE: &str = "Example Schema";
/// Name used for `$id` and file names when the schema has no name
pub const DEFAULT_SLUG: &str = "example";
/// `required` list written when the schema has no fields at all
pub const PLACEHOLDER_REQUIRED: [&str; 3] = ["id", "schema", "required"];

/// Field kinds offered by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Enum,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
            FieldType::Enum => "enum",
        };
        f.write_str(name)
    }
}

/// Item type of an array field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<StringFormat>,
}

/// One field as entered in the builder form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub field_type: FieldType,
    #[serde(default = "default_true")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<StringFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
}

fn default_true() -> bool {
    true
}

impl FieldDefinition {
    /// Create a required field with no extra attributes
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: true,
            format: None,
            items: None,
            enum_values: Vec::new(),
            min_length: None,
            max_length: None,
            minimum: None,
            maximum: None,
            min_items: None,
            max_items: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_format(mut self, format: StringFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_items(mut self, field_type: FieldType, format: Option<StringFormat>) -> Self {
        self.items = Some(ItemDefinition { field_type, format });
        self
    }

    pub fn with_bounds(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Append an enum value; empty and duplicate values are ignored.
    /// Returns whether the value was added.
    pub fn add_enum_value(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() || self.enum_values.contains(&value) {
            return false;
        }
        self.enum_values.push(value);
        true
    }

    pub fn remove_enum_value(&mut self, value: &str) {
        self.enum_values.retain(|v| v != value);
    }

    /// The JSON Schema this definition contributes to `properties`
    pub fn to_field_schema(&self) -> FieldSchema {
        match self.field_type {
            FieldType::Enum => FieldSchema::enumeration(self.enum_values.clone()),
            FieldType::String => FieldSchema::String(StringField {
                format: self.format.clone(),
                min_length: self.min_length,
                max_length: self.max_length,
                enum_values: None,
            }),
            FieldType::Number => FieldSchema::Number(self.numeric()),
            FieldType::Integer => FieldSchema::Integer(self.numeric()),
            FieldType::Boolean => FieldSchema::Boolean,
            FieldType::Array => FieldSchema::Array(ArrayField {
                items: self.items.as_ref().map(|item| Box::new(item_schema(item))),
                min_items: self.min_items,
                max_items: self.max_items,
            }),
            FieldType::Object => FieldSchema::Object(ObjectField::default()),
        }
    }

    fn numeric(&self) -> NumericField {
        NumericField {
            minimum: self.minimum,
            maximum: self.maximum,
            enum_values: None,
        }
    }
}

fn item_schema(item: &ItemDefinition) -> FieldSchema {
    match item.field_type {
        FieldType::String => FieldSchema::String(StringField {
            format: item.format.clone(),
            ..Default::default()
        }),
        FieldType::Enum => FieldSchema::string(),
        FieldType::Number => FieldSchema::number(None, None),
        FieldType::Integer => FieldSchema::integer(None, None),
        FieldType::Boolean => FieldSchema::Boolean,
        FieldType::Array => FieldSchema::Array(ArrayField::default()),
        FieldType::Object => FieldSchema::Object(ObjectField::default()),
    }
}

/// Error while editing a schema in the builder
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BuilderError {
    #[error("Field name is required")]
    MissingName,
    #[error("A field named '{name}' of type {field_type} already exists")]
    DuplicateField { name: String, field_type: FieldType },
    #[error("No field named '{0}'")]
    UnknownField(String),
}

/// Incrementally assembled schema
///
/// # Example
///
/// ```rust
/// use schema_builder_sdk::builder::{FieldDefinition, FieldType, SchemaBuilder};
///
/// let mut builder = SchemaBuilder::new("User");
/// builder.add_field(FieldDefinition::new("id", FieldType::Integer)).unwrap();
/// let doc = builder.build();
///
/// assert_eq!(doc.id.as_deref(), Some("https://example.com/user.json"));
/// assert_eq!(doc.required, vec!["id".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaBuilder {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl SchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field. Names must be non-empty, and a field may not repeat both
    /// the name and the type of an existing field.
    pub fn add_field(&mut self, field: FieldDefinition) -> Result<(), BuilderError> {
        if field.name.is_empty() {
            return Err(BuilderError::MissingName);
        }
        if self
            .fields
            .iter()
            .any(|f| f.name == field.name && f.field_type == field.field_type)
        {
            return Err(BuilderError::DuplicateField {
                name: field.name,
                field_type: field.field_type,
            });
        }
        debug!("Added field '{}' ({})", field.name, field.field_type);
        self.fields.push(field);
        Ok(())
    }

    /// Remove every field with the given name
    pub fn remove_field(&mut self, name: &str) -> Result<(), BuilderError> {
        let before = self.fields.len();
        self.fields.retain(|f| f.name != name);
        if self.fields.len() == before {
            return Err(BuilderError::UnknownField(name.to_string()));
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.fields.clear();
    }

    /// Lower-cased name with each whitespace run replaced by one `-`.
    /// Leading and trailing runs are kept as dashes, not trimmed.
    pub fn slug(&self) -> String {
        let name = if self.name.is_empty() {
            DEFAULT_SLUG
        } else {
            self.name.as_str()
        };
        let mut slug = String::with_capacity(name.len());
        let mut in_whitespace = false;
        for c in name.to_lowercase().chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    slug.push('-');
                }
                in_whitespace = true;
            } else {
                slug.push(c);
                in_whitespace = false;
            }
        }
        slug
    }

    /// Assemble the JSON Schema document
    pub fn build(&self) -> SchemaDocument {
        let title = if self.name.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            self.name.clone()
        };

        let properties = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.to_field_schema()))
            .collect();

        let required = if self.fields.is_empty() {
            PLACEHOLDER_REQUIRED.iter().map(|s| s.to_string()).collect()
        } else {
            let mut required: Vec<String> = Vec::new();
            for field in self.fields.iter().filter(|f| f.required) {
                if !required.contains(&field.name) {
                    required.push(field.name.clone());
                }
            }
            required
        };

        SchemaDocument {
            id: Some(format!("https://example.com/{}.json", self.slug())),
            schema: Some(DRAFT_2020_12.to_string()),
            title: Some(title),
            schema_type: Some("object".to_string()),
            properties,
            required,
        }
    }
}

/// File name offered for a download: the lower-cased schema name (or
/// `example`), an optional suffix such as `-sample`, and the extension.
pub fn download_file_name(name: &str, suffix: &str, extension: &str) -> String {
    let base = if name.is_empty() { DEFAULT_SLUG } else { name };
    format!("{}{}.{}", base.to_lowercase(), suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(SchemaBuilder::new("My  Cool\tSchema").slug(), "my-cool-schema");
        assert_eq!(SchemaBuilder::new("").slug(), "example");
        assert_eq!(SchemaBuilder::new(" My Schema ").slug(), "-my-schema-");
        assert_eq!(SchemaBuilder::new("\t\nUser").slug(), "-user");
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name("User", "", "json"), "user.json");
        assert_eq!(download_file_name("User", "-sample", "json"), "user-sample.json");
        assert_eq!(download_file_name("", "", "proto"), "example.proto");
    }

    #[test]
    fn test_enum_value_editing() {
        let mut field = FieldDefinition::new("status", FieldType::Enum);
        assert!(field.add_enum_value("active"));
        assert!(!field.add_enum_value("active"));
        assert!(!field.add_enum_value(""));
        assert!(field.add_enum_value("inactive"));
        field.remove_enum_value("active");
        assert_eq!(field.enum_values, vec!["inactive".to_string()]);
    }

    #[test]
    fn test_same_name_different_type_allowed() {
        let mut builder = SchemaBuilder::new("T");
        builder.add_field(FieldDefinition::new("value", FieldType::String)).unwrap();
        builder.add_field(FieldDefinition::new("value", FieldType::Integer)).unwrap();
        assert_eq!(builder.fields.len(), 2);
        // Properties are keyed by name, so the later definition wins
        let doc = builder.build();
        assert_eq!(doc.properties.len(), 1);
        assert_eq!(doc.properties.get("value"), Some(&FieldSchema::integer(None, None)));
    }
}
