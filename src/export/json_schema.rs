//! JSON Schema exporter
//!
//! Writes the document itself as the downloadable schema file.

use crate::export::ExportError;
use crate::models::SchemaDocument;

/// Exporter for the JSON Schema document file.
#[derive(Debug, Default)]
pub struct JSONSchemaExporter;

impl JSONSchemaExporter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize a document as pretty-printed JSON (two-space indent).
    pub fn export_document(document: &SchemaDocument) -> Result<String, ExportError> {
        serde_json::to_string_pretty(document).map_err(|e| {
            ExportError::SerializationError(format!("Failed to serialize schema: {}", e))
        })
    }

    /// Serialize a document as single-line JSON.
    pub fn export_compact(document: &SchemaDocument) -> Result<String, ExportError> {
        serde_json::to_string(document).map_err(|e| {
            ExportError::SerializationError(format!("Failed to serialize schema: {}", e))
        })
    }
}
