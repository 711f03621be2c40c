//! Generate command implementation

use std::path::Path;

use crate::cli::commands::{load_document, write_output};
use crate::cli::error::CliError;
use crate::config::CliConfig;
use crate::export::ExportError;
use crate::sample::{SampleOptions, generate_samples};

/// Handle the generate command
pub fn handle_generate(
    input: &str,
    count: Option<i64>,
    compact: bool,
    output: Option<&Path>,
    config: &CliConfig,
) -> Result<(), CliError> {
    let document = load_document(input)?;
    let options = SampleOptions::with_count(count.unwrap_or(config.samples.count));
    let samples = generate_samples(&document, options);

    let rendered = if compact || !config.samples.pretty {
        serde_json::to_string(&samples)
    } else {
        serde_json::to_string_pretty(&samples)
    }
    .map_err(|e| ExportError::SerializationError(e.to_string()))?;

    write_output(&rendered, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_clamps_count() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("user.json");
        let output = dir.path().join("user-sample.json");
        std::fs::write(
            &input,
            r#"{"title": "User", "properties": {"ok": {"type": "boolean"}}, "required": ["ok"]}"#,
        )
        .unwrap();

        handle_generate(
            input.to_str().unwrap(),
            Some(100),
            true,
            Some(&output),
            &CliConfig::default(),
        )
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        let samples: Vec<serde_json::Value> = serde_json::from_str(&written).unwrap();
        assert_eq!(samples.len(), 25);
        assert!(samples.iter().all(|s| s["ok"].is_boolean()));
    }

    #[test]
    fn test_missing_input_file() {
        let err = handle_generate(
            "/nonexistent/schema.json",
            None,
            false,
            None,
            &CliConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::FileReadError(_, _)));
    }
}
