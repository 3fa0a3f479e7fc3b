//! Discovered plugin classes

use connect_docs_plugin::{ConfigDef, Documentation, PluginKind};

use super::classify::ScanRoot;

/// One discovered concrete class, immutable after discovery
#[derive(Debug, Clone)]
pub struct PluginClassDescriptor {
    pub qualified_name: String,
    pub simple_name: String,
    pub kind: PluginKind,
    pub version: String,
    pub documentation: Documentation,
    pub configuration: Option<ConfigDef>,

    /// Example files relative to the examples directory, in declaration order
    pub examples: Vec<String>,
}

/// Everything discovered under one scan root
#[derive(Debug, Clone)]
pub struct Plugin {
    pub scan_root: ScanRoot,
    pub source_connectors: Vec<PluginClassDescriptor>,
    pub sink_connectors: Vec<PluginClassDescriptor>,
    pub transformations: Vec<PluginClassDescriptor>,
    pub converters: Vec<PluginClassDescriptor>,
    pub config_providers: Vec<PluginClassDescriptor>,
}

impl Plugin {
    pub fn new(scan_root: ScanRoot) -> Self {
        Self {
            scan_root,
            source_connectors: Vec::new(),
            sink_connectors: Vec::new(),
            transformations: Vec::new(),
            converters: Vec::new(),
            config_providers: Vec::new(),
        }
    }

    pub fn classes(&self, kind: PluginKind) -> &[PluginClassDescriptor] {
        match kind {
            PluginKind::SourceConnector => &self.source_connectors,
            PluginKind::SinkConnector => &self.sink_connectors,
            PluginKind::Transformation => &self.transformations,
            PluginKind::Converter => &self.converters,
            PluginKind::ConfigProvider => &self.config_providers,
        }
    }

    pub(crate) fn classes_mut(&mut self, kind: PluginKind) -> &mut Vec<PluginClassDescriptor> {
        match kind {
            PluginKind::SourceConnector => &mut self.source_connectors,
            PluginKind::SinkConnector => &mut self.sink_connectors,
            PluginKind::Transformation => &mut self.transformations,
            PluginKind::Converter => &mut self.converters,
            PluginKind::ConfigProvider => &mut self.config_providers,
        }
    }

    /// Every descriptor, kind by kind
    pub fn all(&self) -> impl Iterator<Item = &PluginClassDescriptor> {
        PluginKind::ALL
            .into_iter()
            .flat_map(move |kind| self.classes(kind).iter())
    }

    pub fn find(&self, qualified_name: &str) -> Option<&PluginClassDescriptor> {
        self.all().find(|d| d.qualified_name == qualified_name)
    }

    pub fn len(&self) -> usize {
        self.all().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
