//! GraphQL exporter
//!
//! Emits a single `type` definition with one field per property. Array fields
//! become a list of their item scalar; nested objects are not expanded.

use tracing::debug;

use crate::export::types::GRAPHQL_TYPES;
use crate::export::{ExportError, ExportFormat, ExportResult};
use crate::models::{FieldSchema, SchemaDocument};

/// Type name used when the document has no title
pub const DEFAULT_TYPE_NAME: &str = "Resource";

/// Exporter for GraphQL SDL format.
#[derive(Debug, Default)]
pub struct GraphQLExporter;

impl GraphQLExporter {
    pub fn new() -> Self {
        Self
    }

    /// Export a document to a GraphQL type definition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_builder_sdk::export::graphql::GraphQLExporter;
    /// use schema_builder_sdk::models::{FieldSchema, SchemaDocument};
    ///
    /// let doc = SchemaDocument::new("User")
    ///     .with_property("tags", FieldSchema::array_of(FieldSchema::string()), false);
    ///
    /// assert_eq!(
    ///     GraphQLExporter::export_document(&doc),
    ///     "type User {\n  tags: [String]\n}\n"
    /// );
    /// ```
    pub fn export_document(document: &SchemaDocument) -> String {
        let type_name = document.title_or(DEFAULT_TYPE_NAME);

        let mut gql = format!("type {} {{\n", type_name);
        for (name, field) in document.properties.iter() {
            gql.push_str(&format!("  {}: {}\n", name, Self::field_type(field)));
        }
        gql.push_str("}\n");

        debug!(
            "Exported GraphQL type '{}' with {} field(s)",
            type_name,
            document.properties.len()
        );
        gql
    }

    /// Export a document to GraphQL (SDK interface).
    pub fn export(&self, document: &SchemaDocument) -> Result<ExportResult, ExportError> {
        Ok(ExportResult {
            content: Self::export_document(document),
            format: ExportFormat::GraphQL,
        })
    }

    fn field_type(field: &FieldSchema) -> String {
        match field {
            FieldSchema::Array(array) => {
                let item_type = array.items.as_deref().and_then(FieldSchema::primitive_type);
                format!("[{}]", GRAPHQL_TYPES.lookup(item_type))
            }
            other => GRAPHQL_TYPES.lookup(other.primitive_type()).to_string(),
        }
    }
}
