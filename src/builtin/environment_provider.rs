use connect_docs_plugin::config::Pattern;
use connect_docs_plugin::{
    ConfigDef, ConfigKey, ConfigProvider, ConfigType, ConnectPlugin, Documentation, Importance,
};
use tracing::warn;

/// Resolves `${env:NAME}` placeholders from the worker's environment
pub struct EnvironmentConfigProvider;

impl ConnectPlugin for EnvironmentConfigProvider {
    fn configuration(&self) -> Option<ConfigDef> {
        let mut allowed = ConfigKey::new(
            "allowed.pattern",
            ConfigType::String,
            Importance::High,
            "Only variables whose names match this pattern are resolved.",
        )
        .default_value("[A-Z_][A-Z0-9_]*");
        match Pattern::new("[^\\s]+") {
            Ok(pattern) => allowed = allowed.validator(pattern),
            Err(e) => warn!("Invalid pattern for allowed.pattern: {}", e),
        }

        Some(ConfigDef::new().define(allowed))
    }

    fn documentation(&self) -> Documentation {
        Documentation::titled("Environment Config Provider")
            .description("Reads configuration values from environment variables of the worker.")
            .important("Every worker in the cluster must define the same variables.")
    }

    fn examples(&self) -> Vec<String> {
        vec!["EnvironmentConfigProvider/simple.json".to_string()]
    }
}

impl ConfigProvider for EnvironmentConfigProvider {}
