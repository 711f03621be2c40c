//! Import functionality
//!
//! Provides parsing of JSON Schema documents from text, as held by the schema
//! builder or read from a downloaded schema file.

pub mod json_schema;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Re-export for convenience
pub use json_schema::JSONSchemaImporter;
