use connect_docs_plugin::{
    ConfigDef, ConfigKey, ConfigType, ConnectPlugin, Converter, Documentation, Importance,
};

/// Converts records to and from JSON strings
pub struct JsonStringConverter;

impl ConnectPlugin for JsonStringConverter {
    fn configuration(&self) -> Option<ConfigDef> {
        Some(
            ConfigDef::new()
                .define(
                    ConfigKey::new(
                        "schemas.enable",
                        ConfigType::Boolean,
                        Importance::Medium,
                        "Whether the schema is embedded in each message.",
                    )
                    .default_value("false"),
                )
                .define(
                    ConfigKey::new(
                        "encoding",
                        ConfigType::String,
                        Importance::Low,
                        "Character encoding of the serialized string.",
                    )
                    .default_value("UTF-8"),
                ),
        )
    }

    fn documentation(&self) -> Documentation {
        Documentation::titled("JSON String Converter")
            .description("Stores record values as JSON text.")
    }

    fn examples(&self) -> Vec<String> {
        vec!["JsonStringConverter/schemas.json".to_string()]
    }
}

impl Converter for JsonStringConverter {}
