//! Configuration module
//!
//! Handles loading and parsing of oneof configuration files (oneof.toml, oneof.json).

pub mod model;

use anyhow::Context;
use std::path::Path;
use tracing::debug;

pub use self::model::*;

/// File name looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "oneof.toml";

impl OneofConfig {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        // Detect format based on extension
        if path.extension().is_some_and(|ext| ext == "json") {
            let config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config {}", path.display()))?;
            return Ok(config);
        }

        // Default to TOML
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OneofConfig::default();
        assert!(config.output.pretty);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_load_toml() -> anyhow::Result<()> {
        let toml_content = r#"
[output]
pretty = false

[logging]
filter = "oneof_core=debug"
"#;
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("oneof.toml");
        std::fs::write(&file_path, toml_content)?;

        let config = OneofConfig::load(&file_path)?;
        assert!(!config.output.pretty);
        assert_eq!(config.logging.filter, "oneof_core=debug");

        Ok(())
    }

    #[test]
    fn test_partial_toml_keeps_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("oneof.toml");
        std::fs::write(&file_path, "[logging]\nfilter = \"warn\"\n")?;

        let config = OneofConfig::load(&file_path)?;
        assert!(config.output.pretty);
        assert_eq!(config.logging.filter, "warn");

        Ok(())
    }

    #[test]
    fn test_load_json() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("oneof.json");
        std::fs::write(&file_path, r#"{"output": {"pretty": false}}"#)?;

        let config = OneofConfig::load(&file_path)?;
        assert!(!config.output.pretty);
        assert_eq!(config.logging.filter, "info");

        Ok(())
    }

    #[test]
    fn test_missing_file_uses_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = OneofConfig::load_or_default(&dir.path().join(DEFAULT_CONFIG_FILE))?;
        assert_eq!(config, OneofConfig::default());
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_an_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file_path = dir.path().join("oneof.toml");
        std::fs::write(&file_path, "[output\npretty = ")?;

        assert!(OneofConfig::load(&file_path).is_err());
        Ok(())
    }
}
