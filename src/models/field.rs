//! Field schema model for the SDK
//!
//! A `FieldSchema` describes one property of a schema document. It is a tagged
//! variant over the JSON Schema primitive types. Documents are often edited
//! while incomplete, so deserialization never fails on an unknown `type` or
//! `format` token: those are kept as `FieldSchema::Unknown` and
//! `StringFormat::Other` respectively. Non-string `enum` values are
//! stringified, and boolean or otherwise malformed sub-schemas become
//! `FieldSchema::Unknown`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

use super::document::Properties;

/// JSON Schema primitive type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

impl PrimitiveType {
    /// All primitive types, in JSON Schema keyword order
    pub const ALL: [PrimitiveType; 6] = [
        PrimitiveType::String,
        PrimitiveType::Number,
        PrimitiveType::Integer,
        PrimitiveType::Boolean,
        PrimitiveType::Array,
        PrimitiveType::Object,
    ];

    /// The JSON Schema `type` keyword value
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Number => "number",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Array => "array",
            PrimitiveType::Object => "object",
        }
    }

    /// Parse a `type` keyword value. Returns `None` for unrecognized tokens.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == token)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of the `format` keyword on string fields
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StringFormat {
    DateTime,
    Time,
    Date,
    Duration,
    Email,
    IdnEmail,
    Hostname,
    IdnHostname,
    Ipv4,
    Ipv6,
    Uri,
    UriReference,
    Iri,
    IriReference,
    Uuid,
    JsonPointer,
    RelativeJsonPointer,
    Regex,
    /// Any format outside the builder's fixed set
    Other(String),
}

impl StringFormat {
    /// The formats offered by the schema builder, in display order
    pub const KNOWN: [StringFormat; 18] = [
        StringFormat::DateTime,
        StringFormat::Time,
        StringFormat::Date,
        StringFormat::Duration,
        StringFormat::Email,
        StringFormat::IdnEmail,
        StringFormat::Hostname,
        StringFormat::IdnHostname,
        StringFormat::Ipv4,
        StringFormat::Ipv6,
        StringFormat::Uri,
        StringFormat::UriReference,
        StringFormat::Iri,
        StringFormat::IriReference,
        StringFormat::Uuid,
        StringFormat::JsonPointer,
        StringFormat::RelativeJsonPointer,
        StringFormat::Regex,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            StringFormat::DateTime => "date-time",
            StringFormat::Time => "time",
            StringFormat::Date => "date",
            StringFormat::Duration => "duration",
            StringFormat::Email => "email",
            StringFormat::IdnEmail => "idn-email",
            StringFormat::Hostname => "hostname",
            StringFormat::IdnHostname => "idn-hostname",
            StringFormat::Ipv4 => "ipv4",
            StringFormat::Ipv6 => "ipv6",
            StringFormat::Uri => "uri",
            StringFormat::UriReference => "uri-reference",
            StringFormat::Iri => "iri",
            StringFormat::IriReference => "iri-reference",
            StringFormat::Uuid => "uuid",
            StringFormat::JsonPointer => "json-pointer",
            StringFormat::RelativeJsonPointer => "relative-json-pointer",
            StringFormat::Regex => "regex",
            StringFormat::Other(other) => other,
        }
    }
}

impl From<&str> for StringFormat {
    fn from(token: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|f| f.as_str() == token)
            .unwrap_or_else(|| StringFormat::Other(token.to_string()))
    }
}

impl fmt::Display for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StringFormat {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StringFormat {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(StringFormat::from(token.as_str()))
    }
}

/// Attributes of a `string` field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringField {
    pub format: Option<StringFormat>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    /// Allowed values; a string field with values is the builder's "enum" field
    pub enum_values: Option<Vec<String>>,
}

/// Attributes of a `number` or `integer` field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericField {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    /// Allowed values, stringified
    pub enum_values: Option<Vec<String>>,
}

/// Attributes of an `array` field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayField {
    pub items: Option<Box<FieldSchema>>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
}

/// Attributes of a nested `object` field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectField {
    pub properties: Properties,
    pub required: Vec<String>,
}

impl ObjectField {
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// A field whose `type` is missing or unrecognized
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnknownField {
    /// The `type` token as written, if any
    pub type_token: Option<String>,
    pub enum_values: Option<Vec<String>>,
}

/// Schema for a single property
///
/// # Example
///
/// ```rust
/// use schema_builder_sdk::models::{FieldSchema, PrimitiveType};
///
/// let field = FieldSchema::enumeration(vec!["active".to_string(), "inactive".to_string()]);
/// assert_eq!(field.primitive_type(), Some(PrimitiveType::String));
/// assert!(field.enum_values().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FieldSchemaRepr", into = "RawFieldSchema")]
pub enum FieldSchema {
    String(StringField),
    Number(NumericField),
    Integer(NumericField),
    Boolean,
    Array(ArrayField),
    Object(ObjectField),
    /// Missing or unrecognized `type` token
    Unknown(UnknownField),
}

impl FieldSchema {
    pub fn string() -> Self {
        FieldSchema::String(StringField::default())
    }

    pub fn string_with_format(format: StringFormat) -> Self {
        FieldSchema::String(StringField {
            format: Some(format),
            ..Default::default()
        })
    }

    /// A string field restricted to the given values
    pub fn enumeration(values: Vec<String>) -> Self {
        FieldSchema::String(StringField {
            enum_values: Some(values),
            ..Default::default()
        })
    }

    pub fn number(minimum: Option<f64>, maximum: Option<f64>) -> Self {
        FieldSchema::Number(NumericField {
            minimum,
            maximum,
            enum_values: None,
        })
    }

    pub fn integer(minimum: Option<f64>, maximum: Option<f64>) -> Self {
        FieldSchema::Integer(NumericField {
            minimum,
            maximum,
            enum_values: None,
        })
    }

    pub fn array_of(items: FieldSchema) -> Self {
        FieldSchema::Array(ArrayField {
            items: Some(Box::new(items)),
            ..Default::default()
        })
    }

    /// A field with the given unrecognized `type` token, or none at all
    pub fn unknown(type_token: Option<&str>) -> Self {
        FieldSchema::Unknown(UnknownField {
            type_token: type_token.map(str::to_string),
            enum_values: None,
        })
    }

    /// The primitive type tag, or `None` for `Unknown`
    pub fn primitive_type(&self) -> Option<PrimitiveType> {
        match self {
            FieldSchema::String(_) => Some(PrimitiveType::String),
            FieldSchema::Number(_) => Some(PrimitiveType::Number),
            FieldSchema::Integer(_) => Some(PrimitiveType::Integer),
            FieldSchema::Boolean => Some(PrimitiveType::Boolean),
            FieldSchema::Array(_) => Some(PrimitiveType::Array),
            FieldSchema::Object(_) => Some(PrimitiveType::Object),
            FieldSchema::Unknown(_) => None,
        }
    }

    /// Enum values carried by the field, whatever its type
    pub fn enum_values(&self) -> Option<&[String]> {
        match self {
            FieldSchema::String(s) => s.enum_values.as_deref(),
            FieldSchema::Number(n) | FieldSchema::Integer(n) => n.enum_values.as_deref(),
            FieldSchema::Unknown(u) => u.enum_values.as_deref(),
            FieldSchema::Boolean | FieldSchema::Array(_) | FieldSchema::Object(_) => None,
        }
    }

    /// Item schema for array fields
    pub fn items(&self) -> Option<&FieldSchema> {
        match self {
            FieldSchema::Array(a) => a.items.as_deref(),
            _ => None,
        }
    }
}

/// Accepted input shapes for a field. Anything that is not a keyword object
/// (boolean sub-schemas, mistyped keywords) degrades to `Unknown`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldSchemaRepr {
    Schema(RawFieldSchema),
    Other(Value),
}

impl From<FieldSchemaRepr> for FieldSchema {
    fn from(repr: FieldSchemaRepr) -> Self {
        match repr {
            FieldSchemaRepr::Schema(raw) => raw.into(),
            FieldSchemaRepr::Other(value) => {
                debug!("Treating non-schema value {} as an untyped field", value);
                FieldSchema::Unknown(UnknownField::default())
            }
        }
    }
}

/// Enum values of any JSON type, stringified; strings are kept verbatim
fn lenient_enum<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.map(|values| {
        values
            .into_iter()
            .map(|value| match value {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect()
    }))
}

/// Flat JSON Schema keyword representation used for (de)serialization
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFieldSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    field_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<StringFormat>,
    #[serde(
        rename = "enum",
        default,
        deserialize_with = "lenient_enum",
        skip_serializing_if = "Option::is_none"
    )]
    enum_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Box<FieldSchema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<Properties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    required: Option<Vec<String>>,
}

impl From<RawFieldSchema> for FieldSchema {
    fn from(raw: RawFieldSchema) -> Self {
        let Some(primitive) = raw.field_type.as_deref().and_then(PrimitiveType::parse) else {
            return FieldSchema::Unknown(UnknownField {
                type_token: raw.field_type,
                enum_values: raw.enum_values,
            });
        };
        match primitive {
            PrimitiveType::String => FieldSchema::String(StringField {
                format: raw.format,
                min_length: raw.min_length,
                max_length: raw.max_length,
                enum_values: raw.enum_values,
            }),
            PrimitiveType::Number => FieldSchema::Number(NumericField {
                minimum: raw.minimum,
                maximum: raw.maximum,
                enum_values: raw.enum_values,
            }),
            PrimitiveType::Integer => FieldSchema::Integer(NumericField {
                minimum: raw.minimum,
                maximum: raw.maximum,
                enum_values: raw.enum_values,
            }),
            PrimitiveType::Boolean => FieldSchema::Boolean,
            PrimitiveType::Array => FieldSchema::Array(ArrayField {
                items: raw.items,
                min_items: raw.min_items,
                max_items: raw.max_items,
            }),
            PrimitiveType::Object => FieldSchema::Object(ObjectField {
                properties: raw.properties.unwrap_or_default(),
                required: raw.required.unwrap_or_default(),
            }),
        }
    }
}

impl From<FieldSchema> for RawFieldSchema {
    fn from(field: FieldSchema) -> Self {
        let field_type = field.primitive_type().map(|t| t.as_str().to_string());
        let mut raw = RawFieldSchema {
            field_type,
            ..Default::default()
        };
        match field {
            FieldSchema::String(s) => {
                raw.format = s.format;
                raw.min_length = s.min_length;
                raw.max_length = s.max_length;
                raw.enum_values = s.enum_values;
            }
            FieldSchema::Number(n) | FieldSchema::Integer(n) => {
                raw.minimum = n.minimum;
                raw.maximum = n.maximum;
                raw.enum_values = n.enum_values;
            }
            FieldSchema::Boolean => {}
            FieldSchema::Array(a) => {
                raw.items = a.items;
                raw.min_items = a.min_items;
                raw.max_items = a.max_items;
            }
            FieldSchema::Object(o) => {
                raw.properties = Some(o.properties);
                if !o.required.is_empty() {
                    raw.required = Some(o.required);
                }
            }
            FieldSchema::Unknown(u) => {
                raw.field_type = u.type_token;
                raw.enum_values = u.enum_values;
            }
        }
        raw
    }
}
