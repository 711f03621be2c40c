//! Export functionality
//!
//! Provides exporters for various formats:
//! - SQL (`CREATE TYPE` / `CREATE TABLE`)
//! - GraphQL type definitions
//! - Protobuf (proto3) messages
//! - JSON Schema (the document file itself)
//!
//! [`export`] is the single routing point from a format selector to the
//! matching exporter.

pub mod graphql;
pub mod json_schema;
pub mod protobuf;
pub mod sql;
pub mod types;

use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::models::SchemaDocument;

/// Textual artifact formats a document can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Sql,
    GraphQL,
    Protobuf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Sql,
        ExportFormat::GraphQL,
        ExportFormat::Protobuf,
    ];

    /// Short selector, also used as the download file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Sql => "sql",
            ExportFormat::GraphQL => "gql",
            ExportFormat::Protobuf => "proto",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Accepts the short selectors (`sql`, `gql`, `proto`) and the long
    /// names `graphql` and `protobuf`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sql" => Ok(ExportFormat::Sql),
            "gql" | "graphql" => Ok(ExportFormat::GraphQL),
            "proto" | "protobuf" => Ok(ExportFormat::Protobuf),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Result of an export operation
#[derive(Debug, Clone, PartialEq)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format the content was produced in
    pub format: ExportFormat,
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Export a document to the format named by `format`.
///
/// # Errors
///
/// Returns [`ExportError::UnsupportedFormat`] when `format` is not one of the
/// selectors accepted by [`ExportFormat::from_str`].
///
/// # Example
///
/// ```rust
/// use schema_builder_sdk::export::{export, ExportError};
/// use schema_builder_sdk::models::{FieldSchema, SchemaDocument};
///
/// let doc = SchemaDocument::new("User").with_property("id", FieldSchema::integer(None, None), true);
///
/// assert_eq!(export(&doc, "gql").unwrap(), "type User {\n  id: Int\n}\n");
/// assert!(matches!(export(&doc, "xml"), Err(ExportError::UnsupportedFormat(_))));
/// ```
pub fn export(document: &SchemaDocument, format: &str) -> Result<String, ExportError> {
    let format = format.parse::<ExportFormat>()?;
    Ok(export_as(document, format))
}

/// Export a document to an already-validated format.
pub fn export_as(document: &SchemaDocument, format: ExportFormat) -> String {
    let dangling = document.dangling_required();
    if !dangling.is_empty() {
        warn!(
            "Required field(s) {:?} have no matching property; ignoring",
            dangling
        );
    }
    match format {
        ExportFormat::Sql => sql::SQLExporter::export_document(document),
        ExportFormat::GraphQL => graphql::GraphQLExporter::export_document(document),
        ExportFormat::Protobuf => protobuf::ProtobufExporter::export_document(document),
    }
}

// Re-export for convenience
pub use graphql::GraphQLExporter;
pub use json_schema::JSONSchemaExporter;
pub use protobuf::ProtobufExporter;
pub use sql::SQLExporter;
