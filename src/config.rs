//! CLI configuration
//!
//! Settings are read from a TOML file. Every key is optional:
//!
//! ```toml
//! [export]
//! default_format = "gql"
//!
//! [samples]
//! count = 5
//! pretty = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "schema-builder.toml";

/// Error loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0:?}: {1}")]
    ReadError(PathBuf, String),
    #[error("Invalid config: {0}")]
    ParseError(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportSettings {
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

fn default_format() -> String {
    "sql".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SampleSettings {
    #[serde(default = "default_count")]
    pub count: i64,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            count: default_count(),
            pretty: default_pretty(),
        }
    }
}

fn default_count() -> i64 {
    crate::sample::SampleOptions::default().count
}

fn default_pretty() -> bool {
    true
}

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub samples: SampleSettings,
}

impl CliConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load from `path`, or from `schema-builder.toml` in the working
    /// directory if it exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !candidate.exists() {
                    debug!("No config file found; using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.clone(), e.to_string()))?;
        debug!("Loaded config from {:?}", path);
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config.export.default_format, "sql");
        assert_eq!(config.samples.count, 10);
        assert!(config.samples.pretty);
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml_str("[samples]\ncount = 3\n").unwrap();
        assert_eq!(config.samples.count, 3);
        assert!(config.samples.pretty);
        assert_eq!(config.export, ExportSettings::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = CliConfig::from_toml_str("[samples\ncount = 3").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[export]\ndefault_format = \"proto\"").unwrap();
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.export.default_format, "proto");
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/schema-builder.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_, _)));
    }
}
