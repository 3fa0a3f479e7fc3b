use connect_docs_plugin::config::{NonEmptyString, Range, ValidUrl};
use connect_docs_plugin::{
    ConfigDef, ConfigKey, ConfigType, ConnectPlugin, Documentation, Importance, SourceConnector,
};

/// Emits an increasing sequence of numbers
pub struct SequenceSourceConnector;

impl ConnectPlugin for SequenceSourceConnector {
    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn configuration(&self) -> Option<ConfigDef> {
        Some(
            ConfigDef::new()
                .define(
                    ConfigKey::new(
                        "topic",
                        ConfigType::String,
                        Importance::High,
                        "Topic the sequence is written to.",
                    )
                    .validator(NonEmptyString),
                )
                .define(
                    ConfigKey::new(
                        "start",
                        ConfigType::Long,
                        Importance::Medium,
                        "First number of the sequence.",
                    )
                    .default_value("0")
                    .validator(Range::at_least(0)),
                )
                .define(
                    ConfigKey::new(
                        "batch.size",
                        ConfigType::Int,
                        Importance::Low,
                        "Number of records returned by each poll.",
                    )
                    .default_value("100")
                    .validator(Range::between(1, 10000)),
                )
                .define(
                    ConfigKey::new(
                        "schema.registry.url",
                        ConfigType::List,
                        Importance::Low,
                        "Schema registry endpoints used to register the value schema.",
                    )
                    .default_null()
                    .validator(ValidUrl),
                ),
        )
    }

    fn documentation(&self) -> Documentation {
        Documentation::titled("Sequence Source Connector")
            .description("Generates records carrying an increasing sequence number.")
            .tip("Useful for smoke testing a pipeline end to end.")
    }

    fn examples(&self) -> Vec<String> {
        vec!["SequenceSourceConnector/simple.yaml".to_string()]
    }
}

impl SourceConnector for SequenceSourceConnector {}
