//! TOML configuration for the `dump` command.
//!
//! ```toml
//! # lxbread.toml
//! [output]
//! header = true
//! header_prefix = "# "
//! separator = ","
//! ```
//!
//! Command-line flags override values from the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use lxbread::output::OutputOptions;

/// Root of an lxbread.toml file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output formatting.
    #[serde(default)]
    pub output: OutputOptions,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r##"
            [output]
            header = false
            header_prefix = "# "
            separator = ","
        "##;

        let config = Config::from_str(toml).unwrap();
        assert!(!config.output.header);
        assert_eq!(config.output.header_prefix, "# ");
        assert_eq!(config.output.separator, ",");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [output]
            separator = ";"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert!(config.output.header);
        assert_eq!(config.output.header_prefix, "");
        assert_eq!(config.output.separator, ";");
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.output, OutputOptions::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_str("[output]\nheader = \"yes\"").is_err());
    }
}
