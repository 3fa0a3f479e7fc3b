//! Main configuration structure and implementation

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::GenerationConfig;
use crate::plugin::ScanRoot;
use crate::{builtin, utils, DocsError};
use connect_docs_generator::OutputConfig;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Namespaces to scan for plugin classes
    pub scan_roots: Vec<String>,

    /// Directory holding the example files
    #[serde(default = "default_examples_dir")]
    pub examples_dir: PathBuf,

    /// Plugin level documentation
    #[serde(default)]
    pub plugin: PluginMetadata,

    /// Record schema files documented alongside the examples
    #[serde(default)]
    pub schemas: Vec<PathBuf>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Generation settings
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Text shown on the index page and README
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
}

fn default_examples_dir() -> PathBuf {
    PathBuf::from("./test-data/examples")
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        if self.scan_roots.is_empty() {
            return Err(anyhow!("At least one scan root must be configured"));
        }

        if let Some(root) = self.scan_roots.iter().find(|r| r.trim().is_empty()) {
            return Err(anyhow!("Invalid scan root: '{}'", root));
        }

        self.output.validate()?;

        Ok(())
    }

    /// Create a default configuration documenting the built-in plugins
    pub fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            scan_roots: vec![builtin::NAMESPACE.to_string()],
            examples_dir: default_examples_dir(),
            plugin: PluginMetadata::default(),
            schemas: Vec::new(),
            output: OutputConfig::default(),
            generation: GenerationConfig::default(),
        }
    }

    pub fn scan_roots(&self) -> Vec<ScanRoot> {
        self.scan_roots.iter().map(|r| ScanRoot::from(r.as_str())).collect()
    }

    /// Examples directory with `~` and variables expanded
    pub fn examples_dir(&self) -> Result<PathBuf, DocsError> {
        expand(&self.examples_dir)
    }

    /// Schema files with `~` and variables expanded
    pub fn schema_paths(&self) -> Result<Vec<PathBuf>, DocsError> {
        self.schemas.iter().map(|p| expand(p)).collect()
    }

    /// Output configuration with the base path expanded
    pub fn output(&self) -> Result<OutputConfig, DocsError> {
        Ok(OutputConfig {
            base_path: expand(&self.output.base_path)?,
            formats: self.output.formats.clone(),
        })
    }
}

fn expand(path: &Path) -> Result<PathBuf, DocsError> {
    utils::expand_path(path).map_err(|e| DocsError::Config(e.to_string()))
}
