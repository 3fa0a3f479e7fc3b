//! Plugin loading: classify, instantiate and describe

use tracing::{debug, info};

use connect_docs_plugin::PluginKind;

use super::classify::{ClassClassifier, ScanRoot};
use super::descriptor::{Plugin, PluginClassDescriptor};
use super::registry::{ClassEntry, Registry};
use crate::DocsError;

/// Builds a [`Plugin`] from the classes registered under a scan root
pub struct PluginLoader<'a> {
    registry: &'a Registry,
}

impl<'a> PluginLoader<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Classify once per kind and describe every class found.
    ///
    /// Any construction failure aborts the whole load.
    pub fn load(&self, root: &ScanRoot) -> Result<Plugin, DocsError> {
        info!("Loading plugins under {}", root);
        let classifier = ClassClassifier::new(self.registry);
        let mut plugin = Plugin::new(root.clone());

        for kind in PluginKind::ALL {
            let descriptors = classifier
                .classify_kind(root, kind)?
                .iter()
                .map(|entry| self.describe(entry, kind))
                .collect::<Result<Vec<_>, _>>()?;
            *plugin.classes_mut(kind) = descriptors;
        }

        info!("Loaded {} plugin classes under {}", plugin.len(), root);
        Ok(plugin)
    }

    fn describe(&self, entry: &ClassEntry, kind: PluginKind) -> Result<PluginClassDescriptor, DocsError> {
        debug!("Instantiating {} as {}", entry.name(), kind);
        let instance = entry
            .instantiate()
            .ok_or_else(|| DocsError::PluginInstantiation {
                class: entry.name().to_string(),
                reason: "class has no zero-argument constructor".to_string(),
            })?
            .map_err(|e| DocsError::PluginInstantiation {
                class: entry.name().to_string(),
                reason: e.to_string(),
            })?;

        if instance.kind() != kind {
            return Err(DocsError::PluginInstantiation {
                class: entry.name().to_string(),
                reason: format!("expected a {} but constructed a {}", kind, instance.kind()),
            });
        }

        Ok(PluginClassDescriptor {
            qualified_name: entry.name().to_string(),
            simple_name: entry.simple_name().to_string(),
            kind,
            version: instance.version(),
            documentation: instance.documentation(),
            configuration: instance.configuration(),
            examples: instance.examples(),
        })
    }

    fn find(&self, root: &ScanRoot, kind: PluginKind) -> Result<Vec<String>, DocsError> {
        Ok(ClassClassifier::new(self.registry)
            .classify_kind(root, kind)?
            .iter()
            .map(|entry| entry.name().to_string())
            .collect())
    }

    pub fn find_source_connectors(&self, root: &ScanRoot) -> Result<Vec<String>, DocsError> {
        self.find(root, PluginKind::SourceConnector)
    }

    pub fn find_sink_connectors(&self, root: &ScanRoot) -> Result<Vec<String>, DocsError> {
        self.find(root, PluginKind::SinkConnector)
    }

    pub fn find_transformations(&self, root: &ScanRoot) -> Result<Vec<String>, DocsError> {
        self.find(root, PluginKind::Transformation)
    }

    pub fn find_converters(&self, root: &ScanRoot) -> Result<Vec<String>, DocsError> {
        self.find(root, PluginKind::Converter)
    }

    pub fn find_config_providers(&self, root: &ScanRoot) -> Result<Vec<String>, DocsError> {
        self.find(root, PluginKind::ConfigProvider)
    }
}
