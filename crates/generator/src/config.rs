//! Output configuration

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the generated RST tree
    pub base_path: PathBuf,

    /// Formats to generate
    #[serde(default = "default_formats")]
    pub formats: Vec<DocumentFormat>,
}

fn default_formats() -> Vec<DocumentFormat> {
    vec![DocumentFormat::Rst, DocumentFormat::Markdown]
}

impl OutputConfig {
    pub fn validate(&self) -> Result<()> {
        if self.base_path.to_string_lossy().is_empty() {
            return Err(anyhow!("Base path cannot be empty"));
        }
        if self.formats.is_empty() {
            return Err(anyhow!("At least one output format must be configured"));
        }
        Ok(())
    }

    pub fn wants(&self, format: DocumentFormat) -> bool {
        self.formats.contains(&format)
    }

    /// Location of the README, next to the RST tree
    pub fn readme_path(&self) -> PathBuf {
        match self.base_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join("README.md"),
            _ => PathBuf::from("README.md"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("./target/docs"),
            formats: default_formats(),
        }
    }
}

/// Generated document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// reStructuredText pages, one per class, example and schema
    Rst,

    /// Single Markdown README
    Markdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_config() {
        let config = OutputConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.wants(DocumentFormat::Rst));
        assert!(config.wants(DocumentFormat::Markdown));
        assert_eq!(config.readme_path(), PathBuf::from("./target/README.md"));
    }

    #[test]
    fn test_invalid_output_config() {
        let config = OutputConfig {
            base_path: PathBuf::new(),
            formats: vec![DocumentFormat::Rst],
        };
        assert!(config.validate().is_err());

        let config = OutputConfig {
            base_path: PathBuf::from("docs"),
            formats: Vec::new(),
        };
        assert!(config.validate().is_err());
        assert_eq!(config.readme_path(), PathBuf::from("README.md"));
    }
}
