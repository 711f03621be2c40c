//! Export command implementation

use std::path::Path;

use crate::cli::commands::{load_document, write_output};
use crate::cli::error::CliError;
use crate::config::CliConfig;
use crate::export::{self, ExportFormat};

/// Resolve the export format from the flag, falling back to the config default
pub fn resolve_format(flag: Option<&str>, config: &CliConfig) -> Result<ExportFormat, CliError> {
    let selector = flag.unwrap_or(&config.export.default_format);
    Ok(selector.parse::<ExportFormat>()?)
}

/// Handle the export command
pub fn handle_export(
    input: &str,
    format: Option<&str>,
    output: Option<&Path>,
    config: &CliConfig,
) -> Result<(), CliError> {
    let format = resolve_format(format, config)?;
    let document = load_document(input)?;
    let content = export::export_as(&document, format);
    write_output(&content, output)
}
