//! JSON Schema import functionality
//!
//! Parses a JSON Schema object into a [`SchemaDocument`]. Parsing is lenient:
//! missing `properties` or `required`, unknown `type` tokens and unknown
//! formats are accepted so that partially built schemas still load. Only
//! malformed JSON and a non-object root are rejected.

use serde_json::Value;
use tracing::{debug, warn};

use super::ImportError;
use crate::models::SchemaDocument;

/// JSON Schema Importer - parses a schema document from JSON text
#[derive(Debug, Default)]
pub struct JSONSchemaImporter;

impl JSONSchemaImporter {
    pub fn new() -> Self {
        Self
    }

    /// Parse a schema document from JSON text
    ///
    /// # Example
    ///
    /// ```rust
    /// use schema_builder_sdk::import::JSONSchemaImporter;
    ///
    /// let doc = JSONSchemaImporter::new()
    ///     .parse(r#"{"title": "User", "properties": {"id": {"type": "integer"}}, "required": ["id"]}"#)
    ///     .unwrap();
    /// assert_eq!(doc.title.as_deref(), Some("User"));
    /// assert!(doc.is_required("id"));
    /// ```
    pub fn parse(&self, json: &str) -> Result<SchemaDocument, ImportError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ImportError::ParseError(format!("Failed to parse JSON: {}", e)))?;
        Self::validate_root(&value)?;

        // Deserialize from the text so property order follows the source
        let document: SchemaDocument = serde_json::from_str(json)
            .map_err(|e| ImportError::ParseError(format!("Invalid schema document: {}", e)))?;
        Ok(Self::loaded(document))
    }

    /// Convert an already-parsed JSON value into a schema document
    pub fn parse_value(&self, value: Value) -> Result<SchemaDocument, ImportError> {
        Self::validate_root(&value)?;

        let document: SchemaDocument = serde_json::from_value(value)
            .map_err(|e| ImportError::ParseError(format!("Invalid schema document: {}", e)))?;
        Ok(Self::loaded(document))
    }

    fn validate_root(value: &Value) -> Result<(), ImportError> {
        if value.is_object() {
            Ok(())
        } else {
            Err(ImportError::ValidationError(
                "JSON Schema root must be an object".to_string(),
            ))
        }
    }

    fn loaded(document: SchemaDocument) -> SchemaDocument {
        let dangling = document.dangling_required();
        if !dangling.is_empty() {
            warn!("Required field(s) {:?} are not defined in properties", dangling);
        }
        debug!(
            "Imported schema '{}' with {} propert(ies)",
            document.title_or(""),
            document.properties.len()
        );
        document
    }
}
