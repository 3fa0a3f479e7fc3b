//! Configurations built from examples, as shown in the documentation

use serde::Serialize;

use connect_docs_plugin::PluginKind;

use super::properties::{Properties, Transformations};
use super::resolver::ExampleFile;
use crate::utils::{indent, lower_camel};
use crate::DocsError;

/// Connector configuration: class, sink topics, the example config and any
/// transformations the example chains
pub fn connector_config(
    file: &ExampleFile,
    config: &Properties,
    transformations: Option<&Transformations>,
) -> Result<Properties, DocsError> {
    let mut result = Properties::new();
    result.insert("connector.class", file.class_name.as_str());
    if file.kind == PluginKind::SinkConnector {
        // `topics` is the key sink connectors read, not the singular `topic`
        result.insert("topics", "<required setting>");
    }
    for (key, value) in config.iter() {
        result.insert(key, value);
    }

    if let Some(transformations) = transformations.filter(|t| !t.is_empty()) {
        result.insert(
            "transforms",
            transformations.names().collect::<Vec<_>>().join(","),
        );
        for (name, transform) in transformations.iter() {
            if !transform.contains_key("type") {
                return Err(DocsError::ExampleFormat {
                    file: file.path.clone(),
                    reason: format!("Transform '{name}' does not have a type property."),
                });
            }
            for (key, value) in transform.iter() {
                result.insert(format!("transforms.{name}.{key}"), value);
            }
        }
    }

    Ok(result)
}

/// Connector configuration enabling a single transformation.
///
/// `None` when the example has no configuration. The key is always derived
/// from the documented class, the type is the class actually run.
pub fn transformation_config(
    parent_simple_name: &str,
    transformation_class: &str,
    config: &Properties,
) -> Option<Properties> {
    if config.is_empty() {
        return None;
    }

    let key = lower_camel(parent_simple_name);
    let mut result = Properties::new();
    result.insert("transforms", key.as_str());
    result.insert(format!("transforms.{key}.type"), transformation_class);
    for (k, v) in config.iter() {
        result.insert(format!("transforms.{key}.{k}"), v);
    }
    Some(result)
}

/// Key and value converter settings for one converter example
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfigs {
    pub key: Properties,
    pub value: Properties,
}

pub fn converter_configs(class_name: &str, config: &Properties) -> ConverterConfigs {
    let build = |prefix: &str| {
        let mut result = Properties::new();
        result.insert(prefix, class_name);
        for (k, v) in config.iter() {
            result.insert(format!("{prefix}.{k}"), v);
        }
        result
    };

    ConverterConfigs {
        key: build("key.converter"),
        value: build("value.converter"),
    }
}

/// Worker configuration registering a config provider under `prefix`
pub fn config_provider_worker_config(
    class_name: &str,
    prefix: &str,
    config: &Properties,
) -> Properties {
    let provider = format!("config.providers.{prefix}");
    let mut result = Properties::new();
    result.insert("config.providers", prefix);
    result.insert(format!("{provider}.class"), class_name);
    for (k, v) in config.iter() {
        result.insert(format!("{provider}.param.{k}"), v);
    }
    result
}

/// Pretty JSON, indented for a code block
pub fn indented_json<T: Serialize + ?Sized>(value: &T) -> Result<String, DocsError> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    Ok(indent(&json))
}

/// Properties text, indented for a code block
pub fn indented_properties(properties: &Properties) -> String {
    indent(&properties.to_properties_text())
}
