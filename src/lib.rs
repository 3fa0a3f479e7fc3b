//! Connect Docs Library
//!
//! Discovers Kafka Connect style plugins (connectors, transformations,
//! converters and config providers) from an explicit class registry,
//! validates their example configurations against the declared config
//! schemas and renders reference documentation.

pub mod builtin;
pub mod cli;
pub mod config;
pub mod diff;
pub mod docs;
pub mod example;
pub mod plugin;
pub mod utils;
pub mod validation;

pub use config::{Config, GenerationConfig, PluginMetadata};
pub use diff::{highlight, spans, DiffSpan};
pub use docs::DocsPipeline;
pub use example::{Example, ExampleFile, ExampleResolver, Properties};
pub use plugin::{
    ClassClassifier, ClassEntry, Plugin, PluginCache, PluginClassDescriptor, PluginLoader,
    Registry, ScanRoot, Visibility,
};
pub use validation::{ConfigSchemaValidator, ValidationResult};

use anyhow::Result;
use connect_docs_generator::{GenerationResult, MemorySink, OutputSink, TemplateRegistry};
use connect_docs_plugin::PluginKind;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use walkdir::WalkDir;

/// Main application context that coordinates all components
pub struct DocsHarness {
    config: Config,
    registry: Arc<Registry>,
    cache: Arc<PluginCache>,
    templates: TemplateRegistry,
}

impl DocsHarness {
    /// Create a harness over the process-wide registry and plugin cache
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: Registry::global(),
            cache: PluginCache::global(),
            templates: TemplateRegistry::builtin(),
        }
    }

    /// Create a harness over a caller supplied registry, with its own cache
    pub fn with_registry(config: Config, registry: Arc<Registry>) -> Self {
        Self {
            config,
            registry,
            cache: Arc::new(PluginCache::new()),
            templates: TemplateRegistry::builtin(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Load (or fetch from the cache) the plugin for one scan root
    pub fn load_plugin(&self, root: &ScanRoot) -> Result<Arc<Plugin>, DocsError> {
        let loader = PluginLoader::new(&self.registry);
        self.cache.get_or_load(root, &loader)
    }

    /// Load every configured scan root
    pub fn load_plugins(&self) -> Result<Vec<Arc<Plugin>>, DocsError> {
        self.config
            .scan_roots()
            .iter()
            .map(|root| self.load_plugin(root))
            .collect()
    }

    /// Validate every example and write the documentation to `sink`
    pub async fn generate(&self, sink: &dyn OutputSink) -> Result<GenerationResult> {
        let start_time = Instant::now();
        info!("Starting documentation generation");

        let plugins = self.load_plugins()?;
        let pipeline = DocsPipeline::new(&self.config, &self.registry, &self.templates);
        let mut result = pipeline.run(&plugins, sink).await?;

        result.statistics.total_processing_time_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Documentation generation completed in {}",
            utils::format_duration(start_time.elapsed())
        );
        Ok(result)
    }

    /// Validate every example without writing anything
    pub async fn validate(&self) -> Result<GenerationResult> {
        let sink = MemorySink::new();
        self.generate(&sink).await
    }

    /// Example files under the examples directory that no plugin declares
    pub fn unreferenced_examples(&self) -> Result<Vec<PathBuf>, DocsError> {
        let examples_dir = self.config.examples_dir()?;
        if !examples_dir.is_dir() {
            warn!("Examples directory does not exist: {:?}", examples_dir);
            return Ok(Vec::new());
        }

        let mut referenced = BTreeSet::new();
        for plugin in self.load_plugins()? {
            for descriptor in plugin.all() {
                for example in &descriptor.examples {
                    referenced.insert(examples_dir.join(example));
                }
            }
        }

        let mut unreferenced: Vec<PathBuf> = WalkDir::new(&examples_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|path| example::is_example_file(path) && !referenced.contains(path))
            .collect();
        unreferenced.sort();
        Ok(unreferenced)
    }
}

/// Error types for the documentation harness
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    #[error("Discovery failed for scan root '{root}': {reason}")]
    Discovery { root: String, reason: String },

    #[error("Could not instantiate {class}: {reason}")]
    PluginInstantiation { class: String, reason: String },

    #[error("Example {file} is invalid: {reason}")]
    ExampleFormat { file: String, reason: String },

    #[error("Could not find child class '{child}' in {parent}")]
    ChildClassNotFound { child: String, parent: String },

    #[error("Example validation was not successful for {example}.\n{}", .errors.join("\n"))]
    ConfigValidation { example: String, errors: Vec<String> },

    #[error("{kind} {class} does not define configuration")]
    MissingConfiguration { class: String, kind: PluginKind },

    #[error("Transformation {class} failed: {reason}")]
    Transformation { class: String, reason: String },

    #[error("Rendering failed: {0}")]
    Render(#[from] connect_docs_generator::RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for the documentation harness
pub type DocsResult<T> = Result<T, DocsError>;
