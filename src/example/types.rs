//! Example payloads, one shape per plugin kind

use serde::Deserialize;

use connect_docs_generator::ExampleDocs;
use connect_docs_plugin::{ConnectRecord, PluginKind};

use super::properties::{Properties, Transformations};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConnectorExample {
    #[serde(flatten)]
    pub docs: ExampleDocs,
    pub config: Properties,
    #[serde(default)]
    pub output: Option<ConnectRecord>,
    #[serde(default)]
    pub transformations: Option<Transformations>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SinkConnectorExample {
    #[serde(flatten)]
    pub docs: ExampleDocs,
    pub config: Properties,
    #[serde(default)]
    pub input: Option<ConnectRecord>,
    #[serde(default)]
    pub output: Option<ConnectRecord>,
    #[serde(default)]
    pub transformations: Option<Transformations>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationExample {
    #[serde(flatten)]
    pub docs: ExampleDocs,
    pub config: Properties,
    /// Simple name of a nested class to run instead of the documented one
    #[serde(default)]
    pub child_class: Option<String>,
    #[serde(default)]
    pub input: Option<ConnectRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterExample {
    #[serde(flatten)]
    pub docs: ExampleDocs,
    pub config: Properties,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigProviderExample {
    #[serde(flatten)]
    pub docs: ExampleDocs,
    pub prefix: String,
    pub config: Properties,
    #[serde(default)]
    pub connector_config: Option<Properties>,
}

/// A loaded example, tagged with the kind it was loaded as
#[derive(Debug, Clone, PartialEq)]
pub enum Example {
    SourceConnector(SourceConnectorExample),
    SinkConnector(SinkConnectorExample),
    Transformation(TransformationExample),
    Converter(ConverterExample),
    ConfigProvider(ConfigProviderExample),
}

impl Example {
    pub fn kind(&self) -> PluginKind {
        match self {
            Example::SourceConnector(_) => PluginKind::SourceConnector,
            Example::SinkConnector(_) => PluginKind::SinkConnector,
            Example::Transformation(_) => PluginKind::Transformation,
            Example::Converter(_) => PluginKind::Converter,
            Example::ConfigProvider(_) => PluginKind::ConfigProvider,
        }
    }

    pub fn docs(&self) -> &ExampleDocs {
        match self {
            Example::SourceConnector(e) => &e.docs,
            Example::SinkConnector(e) => &e.docs,
            Example::Transformation(e) => &e.docs,
            Example::Converter(e) => &e.docs,
            Example::ConfigProvider(e) => &e.docs,
        }
    }

    /// Plugin configuration the example supplies
    pub fn config(&self) -> &Properties {
        match self {
            Example::SourceConnector(e) => &e.config,
            Example::SinkConnector(e) => &e.config,
            Example::Transformation(e) => &e.config,
            Example::Converter(e) => &e.config,
            Example::ConfigProvider(e) => &e.config,
        }
    }

    /// Records the example carries
    pub fn records(&self) -> Vec<&ConnectRecord> {
        match self {
            Example::SourceConnector(e) => e.output.iter().collect(),
            Example::SinkConnector(e) => e.input.iter().chain(e.output.iter()).collect(),
            Example::Transformation(e) => e.input.iter().collect(),
            Example::Converter(_) | Example::ConfigProvider(_) => Vec::new(),
        }
    }
}
