//! Schema Builder SDK - compose JSON Schema documents and derive artifacts from them
//!
//! Provides:
//! - The JSON Schema document model (`models`)
//! - Field-by-field schema assembly (`builder`)
//! - JSON Schema parsing (`import`)
//! - Export to SQL DDL, GraphQL, Protobuf and the schema file itself (`export`)
//! - Synthetic sample data generation (`sample`)
//!
//! All transforms are pure functions of their input document; nothing is
//! cached or shared between calls.

pub mod builder;
pub mod cli;
#[cfg(feature = "cli")]
pub mod config;
pub mod export;
pub mod import;
pub mod models;
pub mod sample;

// Re-export commonly used types
pub use builder::{BuilderError, FieldDefinition, FieldType, SchemaBuilder, download_file_name};
pub use export::{
    ExportError, ExportFormat, ExportResult, GraphQLExporter, JSONSchemaExporter,
    ProtobufExporter, SQLExporter, export, export_as,
};
pub use import::{ImportError, JSONSchemaImporter};
pub use models::{FieldSchema, PrimitiveType, Properties, SchemaDocument, StringFormat};
pub use sample::{SampleGenerator, SampleOptions, generate_samples};
