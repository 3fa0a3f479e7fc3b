//! Built-in sample plugins
//!
//! Registered under [`NAMESPACE`] in the global registry. Besides the
//! documented plugins this module registers classes the classifier must
//! skip: an abstract base, a private connector and a connector without a
//! zero-argument constructor.

mod console_sink;
mod environment_provider;
mod json_string_converter;
mod sequence_source;
mod to_upper_case;

pub use console_sink::ConsoleSinkConnector;
pub use environment_provider::EnvironmentConfigProvider;
pub use json_string_converter::JsonStringConverter;
pub use sequence_source::SequenceSourceConnector;
pub use to_upper_case::{ToUpperCase, UpperCaseTarget};

use connect_docs_plugin::{PluginInstance, PluginKind};

use crate::plugin::{ClassEntry, Registry};

/// Namespace of the built-in plugins
pub const NAMESPACE: &str = "connect_docs.builtin";

/// Qualified name of a built-in class
pub fn class_name(simple: &str) -> String {
    format!("{NAMESPACE}.{simple}")
}

/// Register every built-in class
pub fn register(registry: &Registry) {
    registry.register(
        ClassEntry::new(class_name("AbstractSinkConnector"))
            .extends(PluginKind::SinkConnector.marker())
            .abstract_class(),
    );
    registry.register(
        ClassEntry::new(class_name("ConsoleSinkConnector"))
            .extends(class_name("AbstractSinkConnector"))
            .factory(|| Ok(PluginInstance::SinkConnector(Box::new(ConsoleSinkConnector)))),
    );
    registry.register(
        ClassEntry::new(class_name("InternalSinkConnector"))
            .extends(PluginKind::SinkConnector.marker())
            .private()
            .factory(|| Ok(PluginInstance::SinkConnector(Box::new(ConsoleSinkConnector)))),
    );

    registry.register(
        ClassEntry::new(class_name("SequenceSourceConnector"))
            .extends(PluginKind::SourceConnector.marker())
            .factory(|| Ok(PluginInstance::SourceConnector(Box::new(SequenceSourceConnector)))),
    );
    registry.register(
        ClassEntry::new(class_name("ConfiguredSourceConnector"))
            .extends(PluginKind::SourceConnector.marker()),
    );

    let to_upper_case = class_name("ToUpperCase");
    registry.register(
        ClassEntry::new(to_upper_case.as_str())
            .extends(PluginKind::Transformation.marker())
            .nested(format!("{to_upper_case}$Key"))
            .factory(|| {
                Ok(PluginInstance::Transformation(Box::new(ToUpperCase::new(
                    UpperCaseTarget::Value,
                ))))
            }),
    );
    registry.register(
        ClassEntry::new(format!("{to_upper_case}$Key"))
            .extends(to_upper_case.as_str())
            .factory(|| {
                Ok(PluginInstance::Transformation(Box::new(ToUpperCase::new(
                    UpperCaseTarget::Key,
                ))))
            }),
    );

    registry.register(
        ClassEntry::new(class_name("JsonStringConverter"))
            .extends(PluginKind::Converter.marker())
            .factory(|| Ok(PluginInstance::Converter(Box::new(JsonStringConverter)))),
    );
    registry.register(
        ClassEntry::new(class_name("EnvironmentConfigProvider"))
            .extends(PluginKind::ConfigProvider.marker())
            .factory(|| Ok(PluginInstance::ConfigProvider(Box::new(EnvironmentConfigProvider)))),
    );
}
