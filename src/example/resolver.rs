//! Maps declared example files to loaded, typed examples

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use connect_docs_plugin::PluginKind;

use super::types::Example;
use crate::plugin::{ClassEntry, PluginClassDescriptor, Registry};
use crate::DocsError;

/// One declared example file of a plugin class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleFile {
    /// Path as declared, relative to the examples directory
    pub path: String,
    pub kind: PluginKind,
    pub class_name: String,
}

impl ExampleFile {
    /// File name without directories or extension
    pub fn base_name(&self) -> String {
        Path::new(&self.path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.clone())
    }
}

/// Whether a path has an extension examples are read from
pub fn is_example_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("json" | "yaml" | "yml")
    )
}

/// Loads examples relative to an examples directory
#[derive(Debug, Clone)]
pub struct ExampleResolver {
    examples_dir: PathBuf,
}

impl ExampleResolver {
    pub fn new(examples_dir: impl Into<PathBuf>) -> Self {
        Self {
            examples_dir: examples_dir.into(),
        }
    }

    pub fn examples_dir(&self) -> &Path {
        &self.examples_dir
    }

    /// Example files of a descriptor, in declaration order
    pub fn resolve(&self, descriptor: &PluginClassDescriptor) -> Vec<ExampleFile> {
        descriptor
            .examples
            .iter()
            .map(|path| ExampleFile {
                path: path.clone(),
                kind: descriptor.kind,
                class_name: descriptor.qualified_name.clone(),
            })
            .collect()
    }

    /// Read and parse one example as its kind's shape
    pub fn load(&self, file: &ExampleFile) -> Result<Example, DocsError> {
        let path = self.examples_dir.join(&file.path);
        debug!("loadExample() - file = {}", path.display());

        let content = std::fs::read_to_string(&path).map_err(|e| DocsError::ExampleFormat {
            file: file.path.clone(),
            reason: format!("could not read {}: {}", path.display(), e),
        })?;

        Ok(match file.kind {
            PluginKind::SourceConnector => Example::SourceConnector(parse(file, &content)?),
            PluginKind::SinkConnector => Example::SinkConnector(parse(file, &content)?),
            PluginKind::Transformation => Example::Transformation(parse(file, &content)?),
            PluginKind::Converter => Example::Converter(parse(file, &content)?),
            PluginKind::ConfigProvider => Example::ConfigProvider(parse(file, &content)?),
        })
    }

    /// Nested class of `parent` selected by an example's `childClass`
    pub fn child_class(
        &self,
        registry: &Registry,
        parent: &str,
        child: &str,
    ) -> Result<Arc<ClassEntry>, DocsError> {
        registry
            .nested_class(parent, child)
            .ok_or_else(|| DocsError::ChildClassNotFound {
                child: child.to_string(),
                parent: parent.to_string(),
            })
    }
}

fn parse<T: DeserializeOwned>(file: &ExampleFile, content: &str) -> Result<T, DocsError> {
    let format_error = |reason: String| DocsError::ExampleFormat {
        file: file.path.clone(),
        reason,
    };

    match Path::new(&file.path).extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(content).map_err(|e| format_error(e.to_string())),
        Some("yaml" | "yml") => {
            serde_yaml::from_str(content).map_err(|e| format_error(e.to_string()))
        }
        other => Err(format_error(format!(
            "unsupported example format: {}",
            other.unwrap_or("<none>")
        ))),
    }
}
