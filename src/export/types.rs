//! Type mapping tables shared by the exporters
//!
//! Each target has a static table from JSON Schema primitive type to the
//! target's type token, plus a fallback token used for types missing from the
//! table and for fields with no recognized `type`.

use crate::models::PrimitiveType;

/// Static lookup table from primitive type to a target type token
#[derive(Debug, Clone, Copy)]
pub struct TypeMap {
    entries: &'static [(PrimitiveType, &'static str)],
    fallback: &'static str,
}

impl TypeMap {
    pub const fn new(
        entries: &'static [(PrimitiveType, &'static str)],
        fallback: &'static str,
    ) -> Self {
        Self { entries, fallback }
    }

    /// Map a primitive type, falling back for unmapped or missing types
    pub fn lookup(&self, primitive: Option<PrimitiveType>) -> &'static str {
        primitive
            .and_then(|p| {
                self.entries
                    .iter()
                    .find(|(candidate, _)| *candidate == p)
                    .map(|(_, token)| *token)
            })
            .unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}

/// JSON Schema type to SQL column type
pub const SQL_TYPES: TypeMap = TypeMap::new(
    &[
        (PrimitiveType::String, "TEXT"),
        (PrimitiveType::Integer, "INTEGER"),
        (PrimitiveType::Number, "NUMERIC"),
        (PrimitiveType::Boolean, "BOOLEAN"),
    ],
    "TEXT",
);

/// JSON Schema type to GraphQL scalar
///
/// `object` maps to the bare `type` token and `array` (only reachable as an
/// item type) to `List`; neither emits a nested definition.
pub const GRAPHQL_TYPES: TypeMap = TypeMap::new(
    &[
        (PrimitiveType::String, "String"),
        (PrimitiveType::Number, "Float"),
        (PrimitiveType::Integer, "Int"),
        (PrimitiveType::Boolean, "Boolean"),
        (PrimitiveType::Object, "type"),
        (PrimitiveType::Array, "List"),
    ],
    "String",
);

/// JSON Schema type to Protobuf field type
///
/// `array` and `object` map to the bare `repeated` and `message` tokens
/// without an element or nested message type.
pub const PROTOBUF_TYPES: TypeMap = TypeMap::new(
    &[
        (PrimitiveType::String, "string"),
        (PrimitiveType::Number, "double"),
        (PrimitiveType::Integer, "int32"),
        (PrimitiveType::Boolean, "bool"),
        (PrimitiveType::Array, "repeated"),
        (PrimitiveType::Object, "message"),
    ],
    "string",
);
