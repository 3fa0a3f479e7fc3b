//! Plugin traits and interfaces

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::{ConfigDef, ConfigException};
use crate::kind::PluginKind;
use crate::record::ConnectRecord;

/// Errors raised by plugin code
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigException),

    #[error("Data error: {0}")]
    Data(String),

    #[error("Construction failed: {0}")]
    Construction(String),
}

/// Documentation attached to a plugin class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    /// Short title
    pub title: Option<String>,

    /// Main description
    pub description: Option<String>,

    /// Free-form note
    pub note: Option<String>,

    /// Warning block
    pub warning: Option<String>,

    /// Tip block
    pub tip: Option<String>,

    /// Important block
    pub important: Option<String>,

    /// Danger block
    pub danger: Option<String>,

    /// Icon location
    pub icon: Option<String>,
}

impl Documentation {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = Some(tip.into());
        self
    }

    pub fn important(mut self, important: impl Into<String>) -> Self {
        self.important = Some(important.into());
        self
    }

    pub fn danger(mut self, danger: impl Into<String>) -> Self {
        self.danger = Some(danger.into());
        self
    }
}

/// Accessors every documented plugin exposes
pub trait ConnectPlugin: Send + Sync {
    /// Plugin version
    fn version(&self) -> String {
        "0.0.0".to_string()
    }

    /// Configuration schema, if the plugin is configurable
    fn configuration(&self) -> Option<ConfigDef>;

    /// Documentation text
    fn documentation(&self) -> Documentation {
        Documentation::default()
    }

    /// Example files, relative to the examples directory
    fn examples(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Reads records from an external system
pub trait SourceConnector: ConnectPlugin {}

/// Writes records to an external system
pub trait SinkConnector: ConnectPlugin {}

/// Single message transformation
pub trait Transformation: ConnectPlugin {
    /// Apply configuration before any record is transformed
    fn configure(&mut self, props: &[(String, String)]) -> Result<(), PluginError>;

    /// Transform a record. `Ok(None)` drops the record.
    fn apply(&self, record: ConnectRecord) -> Result<Option<ConnectRecord>, PluginError>;
}

/// Converts between records and bytes
pub trait Converter: ConnectPlugin {}

/// Supplies configuration values at runtime
pub trait ConfigProvider: ConnectPlugin {}

/// A constructed plugin, tagged with the kind it was built as
pub enum PluginInstance {
    SourceConnector(Box<dyn SourceConnector>),
    SinkConnector(Box<dyn SinkConnector>),
    Transformation(Box<dyn Transformation>),
    Converter(Box<dyn Converter>),
    ConfigProvider(Box<dyn ConfigProvider>),
}

macro_rules! dispatch {
    ($self:ident, $plugin:ident => $call:expr) => {
        match $self {
            PluginInstance::SourceConnector($plugin) => $call,
            PluginInstance::SinkConnector($plugin) => $call,
            PluginInstance::Transformation($plugin) => $call,
            PluginInstance::Converter($plugin) => $call,
            PluginInstance::ConfigProvider($plugin) => $call,
        }
    };
}

impl PluginInstance {
    pub fn kind(&self) -> PluginKind {
        match self {
            PluginInstance::SourceConnector(_) => PluginKind::SourceConnector,
            PluginInstance::SinkConnector(_) => PluginKind::SinkConnector,
            PluginInstance::Transformation(_) => PluginKind::Transformation,
            PluginInstance::Converter(_) => PluginKind::Converter,
            PluginInstance::ConfigProvider(_) => PluginKind::ConfigProvider,
        }
    }

    pub fn version(&self) -> String {
        dispatch!(self, p => p.version())
    }

    pub fn configuration(&self) -> Option<ConfigDef> {
        dispatch!(self, p => p.configuration())
    }

    pub fn documentation(&self) -> Documentation {
        dispatch!(self, p => p.documentation())
    }

    pub fn examples(&self) -> Vec<String> {
        dispatch!(self, p => p.examples())
    }

    pub fn into_transformation(self) -> Option<Box<dyn Transformation>> {
        match self {
            PluginInstance::Transformation(t) => Some(t),
            _ => None,
        }
    }
}

impl std::fmt::Debug for PluginInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PluginInstance").field(&self.kind()).finish()
    }
}

/// Public zero-argument construction path of a plugin class
pub type PluginFactory = Arc<dyn Fn() -> Result<PluginInstance, PluginError> + Send + Sync>;
