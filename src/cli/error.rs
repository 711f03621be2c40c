//! CLI error types

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::import::ImportError;

/// Error surfaced by a CLI command
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {0:?}: {1}")]
    FileReadError(PathBuf, String),
    #[error("Failed to write {0:?}: {1}")]
    FileWriteError(PathBuf, String),
    #[error("Failed to read input: {0}")]
    InputError(String),
    #[error("Failed to write output: {0}")]
    OutputError(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
