//! Format command implementation

use std::path::Path;

use crate::cli::commands::{load_document, write_output};
use crate::cli::error::CliError;
use crate::export::JSONSchemaExporter;

/// Handle the format command: re-emit the document as the pretty schema file
pub fn handle_format(input: &str, output: Option<&Path>) -> Result<(), CliError> {
    let document = load_document(input)?;
    let content = JSONSchemaExporter::export_document(&document)?;
    write_output(&content, output)
}
