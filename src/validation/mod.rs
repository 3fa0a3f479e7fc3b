//! Example configuration validation against a plugin's config schema

use tracing::{debug, warn};

use connect_docs_plugin::ConfigDef;

use crate::example::Properties;
use crate::DocsError;

/// Per-option error messages, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<(String, Vec<String>)>,
}

impl ValidationResult {
    /// True when no option carries an error message
    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(|(_, messages)| messages.is_empty())
    }

    /// Messages for one option
    pub fn errors_for(&self, key: &str) -> &[String] {
        self.errors
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    /// Every option checked, in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|(name, _)| name.as_str())
    }

    pub fn error_count(&self) -> usize {
        self.errors.iter().map(|(_, messages)| messages.len()).sum()
    }

    /// `key: message` lines for every failure
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flat_map(|(name, messages)| messages.iter().map(move |m| format!("{name}: {m}")))
            .collect()
    }
}

/// Runs a [`ConfigDef`] against an example configuration
pub struct ConfigSchemaValidator;

impl ConfigSchemaValidator {
    /// Validate every option, collecting all error messages
    pub fn validate(schema: &ConfigDef, config: &Properties) -> ValidationResult {
        let errors = schema
            .validate(config.iter())
            .into_iter()
            .map(|report| (report.name, report.error_messages))
            .collect();

        let result = ValidationResult { errors };
        debug!("Validated configuration: {} errors", result.error_count());
        result
    }

    /// Fail with every `key: message` pair when the configuration is invalid
    pub fn ensure_valid(
        schema: &ConfigDef,
        config: &Properties,
        example: &str,
    ) -> Result<(), DocsError> {
        let result = Self::validate(schema, config);
        if result.is_valid() {
            return Ok(());
        }

        let errors = result.messages();
        for error in &errors {
            warn!("{}: {}", example, error);
        }
        Err(DocsError::ConfigValidation {
            example: example.to_string(),
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_docs_plugin::config::{Range, ValidUrl};
    use connect_docs_plugin::{ConfigKey, ConfigType, Importance, UnknownKeyPolicy};
    use rstest::rstest;

    fn schema() -> ConfigDef {
        ConfigDef::new()
            .define(ConfigKey::new("topic", ConfigType::String, Importance::High, "Topic."))
            .define(
                ConfigKey::new("batch.size", ConfigType::Int, Importance::Medium, "Batch size.")
                    .default_value("100")
                    .validator(Range::between(1, 1000)),
            )
            .define(
                ConfigKey::new("endpoint", ConfigType::List, Importance::Low, "Endpoints.")
                    .default_null()
                    .validator(ValidUrl),
            )
    }

    fn props(pairs: &[(&str, &str)]) -> Properties {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_valid_configuration() {
        let result = ConfigSchemaValidator::validate(
            &schema(),
            &props(&[("topic", "orders"), ("endpoint", "http://a.example.com,https://b.example.com")]),
        );
        assert!(result.is_valid());
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["topic", "batch.size", "endpoint"]);
    }

    #[rstest]
    #[case("batch.size", "0")]
    #[case("batch.size", "many")]
    #[case("endpoint", "not a url")]
    fn test_invalid_key_is_attributed(#[case] key: &str, #[case] value: &str) {
        let result =
            ConfigSchemaValidator::validate(&schema(), &props(&[("topic", "orders"), (key, value)]));

        assert!(!result.is_valid());
        assert!(!result.errors_for(key).is_empty());
        assert!(result.errors_for("topic").is_empty());
    }

    #[test]
    fn test_ensure_valid_lists_every_failure() {
        let err = ConfigSchemaValidator::ensure_valid(
            &schema(),
            &props(&[("batch.size", "5000")]),
            "Sink/simple.json",
        )
        .unwrap_err();

        match err {
            DocsError::ConfigValidation { example, errors } => {
                assert_eq!(example, "Sink/simple.json");
                assert_eq!(errors.len(), 2);
                assert!(errors[0].starts_with("topic: Missing required configuration"));
                assert!(errors[1].starts_with("batch.size: Invalid value 5000"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_keys_follow_schema_policy() {
        let config = props(&[("topic", "orders"), ("bogus", "1")]);
        assert!(ConfigSchemaValidator::validate(&schema(), &config).is_valid());

        let strict = schema().unknown_keys(UnknownKeyPolicy::Reject);
        let result = ConfigSchemaValidator::validate(&strict, &config);
        assert_eq!(result.errors_for("bogus"), ["Unknown configuration 'bogus'".to_string()]);
    }
}
