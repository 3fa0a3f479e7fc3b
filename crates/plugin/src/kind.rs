//! Plugin kinds and their capability markers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Plugin kinds a class can be documented as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PluginKind {
    /// Reads from an external system
    SourceConnector,

    /// Writes to an external system
    SinkConnector,

    /// Single message transformation
    Transformation,

    /// Key/value converter
    Converter,

    /// Worker-level config provider
    ConfigProvider,
}

impl PluginKind {
    /// All kinds, in documentation order
    pub const ALL: [PluginKind; 5] = [
        PluginKind::SourceConnector,
        PluginKind::SinkConnector,
        PluginKind::Transformation,
        PluginKind::Converter,
        PluginKind::ConfigProvider,
    ];

    /// Capability marker: the base type a class must descend from to be
    /// classified as this kind.
    pub fn marker(&self) -> &'static str {
        match self {
            PluginKind::SourceConnector => "connect.source.SourceConnector",
            PluginKind::SinkConnector => "connect.sink.SinkConnector",
            PluginKind::Transformation => "connect.transforms.Transformation",
            PluginKind::Converter => "connect.storage.Converter",
            PluginKind::ConfigProvider => "connect.config.provider.ConfigProvider",
        }
    }

    /// Resolve a capability marker back to its kind
    pub fn from_marker(marker: &str) -> Option<PluginKind> {
        Self::ALL.into_iter().find(|kind| kind.marker() == marker)
    }

    /// Output directory name for documents of this kind
    pub fn directory(&self) -> &'static str {
        match self {
            PluginKind::SourceConnector => "sources",
            PluginKind::SinkConnector => "sinks",
            PluginKind::Transformation => "transformations",
            PluginKind::Converter => "converters",
            PluginKind::ConfigProvider => "configProviders",
        }
    }

    /// Human readable section title
    pub fn title(&self) -> &'static str {
        match self {
            PluginKind::SourceConnector => "Source Connectors",
            PluginKind::SinkConnector => "Sink Connectors",
            PluginKind::Transformation => "Transformations",
            PluginKind::Converter => "Converters",
            PluginKind::ConfigProvider => "Config Providers",
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PluginKind::SourceConnector => "source connector",
            PluginKind::SinkConnector => "sink connector",
            PluginKind::Transformation => "transformation",
            PluginKind::Converter => "converter",
            PluginKind::ConfigProvider => "config provider",
        };
        f.write_str(name)
    }
}
