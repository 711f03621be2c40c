//! CLI command implementations

pub mod export;
pub mod format;
pub mod generate;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::error::CliError;
use crate::import::JSONSchemaImporter;
use crate::models::SchemaDocument;

/// Load input content from file or stdin (`-`)
pub fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InputError(format!("stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Load and parse a schema document from file or stdin
pub fn load_document(input: &str) -> Result<SchemaDocument, CliError> {
    let content = load_input(input)?;
    Ok(JSONSchemaImporter::new().parse(&content)?)
}

/// Write content to the given file, or to stdout when no path is given
pub fn write_output(content: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string()))?;
            info!("Wrote {} bytes to {:?}", content.len(), path);
        }
        None => write_stream(content, &mut std::io::stdout().lock())?,
    }
    Ok(())
}

/// Write content to a stream, adding a trailing newline if it lacks one
fn write_stream<W: Write>(content: &str, stream: &mut W) -> Result<(), CliError> {
    let written = if content.ends_with('\n') {
        stream.write_all(content.as_bytes())
    } else {
        writeln!(stream, "{}", content)
    };
    written
        .and_then(|_| stream.flush())
        .map_err(|e| CliError::OutputError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_stream_appends_newline() {
        let mut out = Vec::new();
        write_stream("CREATE TABLE t ();", &mut out).unwrap();
        assert_eq!(out, b"CREATE TABLE t ();\n");

        let mut out = Vec::new();
        write_stream("type T {\n}\n", &mut out).unwrap();
        assert_eq!(out, b"type T {\n}\n");
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let err = write_stream("data", &mut ClosedPipe).unwrap_err();
        assert!(matches!(err, CliError::OutputError(_)));
        assert_eq!(err.to_string(), "Failed to write output: pipe closed");
    }
}
