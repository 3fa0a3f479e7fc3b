use connect_docs_plugin::config::ValidString;
use connect_docs_plugin::{
    ConfigDef, ConfigKey, ConfigType, ConnectPlugin, Documentation, Importance, SinkConnector,
};

/// Writes every record to standard output
pub struct ConsoleSinkConnector;

impl ConnectPlugin for ConsoleSinkConnector {
    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn configuration(&self) -> Option<ConfigDef> {
        Some(
            ConfigDef::new()
                .define(
                    ConfigKey::new(
                        "format",
                        ConfigType::String,
                        Importance::High,
                        "Format used to print each record.",
                    )
                    .default_value("json")
                    .validator(ValidString::one_of(["json", "text"]).case_insensitive())
                    .group("Output"),
                )
                .define(
                    ConfigKey::new(
                        "prefix",
                        ConfigType::String,
                        Importance::Low,
                        "Text printed before each record.",
                    )
                    .default_value("")
                    .group("Output"),
                ),
        )
    }

    fn documentation(&self) -> Documentation {
        Documentation::titled("Console Sink Connector")
            .description("Prints every record it receives to standard output.")
            .warning("Output is not buffered. Do not use this connector for high volume topics.")
    }

    fn examples(&self) -> Vec<String> {
        vec!["ConsoleSinkConnector/simple.json".to_string()]
    }
}

impl SinkConnector for ConsoleSinkConnector {}
