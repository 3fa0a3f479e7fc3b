use serde_json::Value;

use connect_docs_plugin::config::NonEmptyString;
use connect_docs_plugin::{
    ConfigDef, ConfigKey, ConfigType, ConnectPlugin, ConnectRecord, Documentation, Importance,
    PluginError, Transformation,
};

/// Part of the record a [`ToUpperCase`] transformation rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperCaseTarget {
    Key,
    Value,
}

/// Upper-cases one string field of the record key or value
pub struct ToUpperCase {
    target: UpperCaseTarget,
    field: Option<String>,
}

impl ToUpperCase {
    pub fn new(target: UpperCaseTarget) -> Self {
        Self {
            target,
            field: None,
        }
    }

    fn config_def() -> ConfigDef {
        ConfigDef::new().define(
            ConfigKey::new(
                "field",
                ConfigType::String,
                Importance::High,
                "Name of the field to convert to upper case.",
            )
            .validator(NonEmptyString),
        )
    }

    fn rewrite(&self, field: &str, data: &mut Value) -> Result<(), PluginError> {
        let Value::Object(map) = data else {
            return Err(PluginError::Data(format!(
                "expected a struct to transform, found {data}"
            )));
        };
        match map.get_mut(field) {
            Some(Value::String(text)) => {
                *text = text.to_uppercase();
                Ok(())
            }
            Some(Value::Null) | None => Ok(()),
            Some(other) => Err(PluginError::Data(format!(
                "field '{field}' is not a string: {other}"
            ))),
        }
    }
}

impl ConnectPlugin for ToUpperCase {
    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    fn configuration(&self) -> Option<ConfigDef> {
        Some(Self::config_def())
    }

    fn documentation(&self) -> Documentation {
        match self.target {
            UpperCaseTarget::Value => Documentation::titled("To Upper Case")
                .description("Converts a string field of the record value to upper case.")
                .note("Use the nested Key class to rewrite the record key instead."),
            UpperCaseTarget::Key => Documentation::titled("To Upper Case (Key)")
                .description("Converts a string field of the record key to upper case."),
        }
    }

    fn examples(&self) -> Vec<String> {
        match self.target {
            UpperCaseTarget::Value => vec![
                "ToUpperCase/value.json".to_string(),
                "ToUpperCase/key.yaml".to_string(),
            ],
            UpperCaseTarget::Key => Vec::new(),
        }
    }
}

impl Transformation for ToUpperCase {
    fn configure(&mut self, props: &[(String, String)]) -> Result<(), PluginError> {
        let config = Self::config_def().parse(props.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        self.field = config.get_string("field").map(str::to_string);
        Ok(())
    }

    fn apply(&self, mut record: ConnectRecord) -> Result<Option<ConnectRecord>, PluginError> {
        let field = self
            .field
            .as_deref()
            .ok_or_else(|| PluginError::Data("transformation is not configured".to_string()))?;

        match self.target {
            UpperCaseTarget::Key => self.rewrite(field, &mut record.key)?,
            UpperCaseTarget::Value => self.rewrite(field, &mut record.value)?,
        }
        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn configured(target: UpperCaseTarget) -> ToUpperCase {
        let mut transform = ToUpperCase::new(target);
        transform
            .configure(&[("field".to_string(), "name".to_string())])
            .unwrap();
        transform
    }

    #[test]
    fn test_value_field_is_upper_cased() {
        let record = ConnectRecord::new("users")
            .with_key(None, json!({"name": "key"}))
            .with_value(None, json!({"name": "alice", "age": 3}));

        let output = configured(UpperCaseTarget::Value).apply(record).unwrap().unwrap();
        assert_eq!(output.value, json!({"name": "ALICE", "age": 3}));
        assert_eq!(output.key, json!({"name": "key"}));
    }

    #[test]
    fn test_key_target() {
        let record = ConnectRecord::new("users").with_key(None, json!({"name": "k1"}));
        let output = configured(UpperCaseTarget::Key).apply(record).unwrap().unwrap();
        assert_eq!(output.key, json!({"name": "K1"}));
    }

    #[test]
    fn test_errors() {
        let mut transform = ToUpperCase::new(UpperCaseTarget::Value);
        assert!(transform.configure(&[]).is_err());

        let record = ConnectRecord::new("users").with_value(None, json!({"name": 1}));
        assert!(configured(UpperCaseTarget::Value).apply(record).is_err());

        let unconfigured = ToUpperCase::new(UpperCaseTarget::Value);
        assert!(unconfigured.apply(ConnectRecord::new("users")).is_err());
    }
}
