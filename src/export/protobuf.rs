//! Protobuf exporter
//!
//! Emits a proto3 `message` with sequential field numbers and a companion
//! `service` exposing a single `Get<Name>` RPC.

use tracing::debug;

use crate::export::types::PROTOBUF_TYPES;
use crate::export::{ExportError, ExportFormat, ExportResult};
use crate::models::SchemaDocument;

/// Message name used when the document has no title
pub const DEFAULT_MESSAGE_NAME: &str = "MyMessage";

/// Exporter for Protobuf (proto3) format.
#[derive(Debug, Default)]
pub struct ProtobufExporter;

impl ProtobufExporter {
    pub fn new() -> Self {
        Self
    }

    /// Export a document to a proto3 message and service definition.
    ///
    /// Array and object fields map to the bare `repeated` and `message`
    /// tokens; element and nested message types are not emitted.
    pub fn export_document(document: &SchemaDocument) -> String {
        let message_name = document.title_or(DEFAULT_MESSAGE_NAME);

        let mut proto = String::from("syntax = \"proto3\";\n\n");
        proto.push_str(&format!("message {} {{\n", message_name));
        for (field_number, (name, field)) in document.properties.iter().enumerate() {
            proto.push_str(&format!(
                "  {} {} = {};\n",
                PROTOBUF_TYPES.lookup(field.primitive_type()),
                name,
                field_number + 1
            ));
        }
        proto.push_str("}\n\n");

        proto.push_str(&format!("service {}Service {{\n", message_name));
        proto.push_str(&format!(
            "  rpc Get{name}({name}) returns ({name});\n",
            name = message_name
        ));
        proto.push_str("}\n");

        debug!(
            "Exported Protobuf message '{}' with {} field(s)",
            message_name,
            document.properties.len()
        );
        proto
    }

    /// Export a document to Protobuf (SDK interface).
    pub fn export(&self, document: &SchemaDocument) -> Result<ExportResult, ExportError> {
        Ok(ExportResult {
            content: Self::export_document(document),
            format: ExportFormat::Protobuf,
        })
    }
}
