//! Declarative configuration schemas
//!
//! A [`ConfigDef`] is the ordered set of options a plugin recognizes. Each
//! [`ConfigKey`] carries a type, an optional default, an importance, its
//! documentation and an optional [`Validator`]. Validation never stops at
//! the first problem: [`ConfigDef::validate`] reports every option with the
//! full list of error messages attached to it.

pub mod validators;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

pub use validators::{NonEmptyString, Pattern, Range, ValidString, ValidUrl, Validator};

/// Error raised while parsing or validating a single option
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ConfigException {
    /// Option the error is attributed to
    pub name: String,

    /// Human readable message
    pub message: String,
}

impl ConfigException {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// `Invalid value <value> for configuration <name>: <reason>`
    pub fn invalid(name: &str, value: impl fmt::Display, reason: impl fmt::Display) -> Self {
        Self::new(
            name,
            format!("Invalid value {value} for configuration {name}: {reason}"),
        )
    }
}

/// Option value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfigType {
    Boolean,
    String,
    Short,
    Int,
    Long,
    Double,
    List,
    Class,
    Password,
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigType::Boolean => "BOOLEAN",
            ConfigType::String => "STRING",
            ConfigType::Short => "SHORT",
            ConfigType::Int => "INT",
            ConfigType::Long => "LONG",
            ConfigType::Double => "DOUBLE",
            ConfigType::List => "LIST",
            ConfigType::Class => "CLASS",
            ConfigType::Password => "PASSWORD",
        };
        f.write_str(name)
    }
}

/// Option importance, used to order documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Importance::High => "High",
            Importance::Medium => "Medium",
            Importance::Low => "Low",
        };
        f.write_str(name)
    }
}

/// A parsed option value
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Boolean(bool),
    String(String),
    Short(i16),
    Int(i32),
    Long(i64),
    Double(f64),
    List(Vec<String>),
    Class(String),
    Password(String),
}

impl ConfigValue {
    /// Parse raw text according to `config_type`
    pub fn parse(name: &str, config_type: ConfigType, raw: &str) -> Result<Self, ConfigException> {
        let trimmed = raw.trim();
        let value = match config_type {
            ConfigType::Boolean => {
                if trimmed.eq_ignore_ascii_case("true") {
                    ConfigValue::Boolean(true)
                } else if trimmed.eq_ignore_ascii_case("false") {
                    ConfigValue::Boolean(false)
                } else {
                    return Err(ConfigException::invalid(
                        name,
                        raw,
                        "Expected value to be either true or false",
                    ));
                }
            }
            ConfigType::String => ConfigValue::String(trimmed.to_string()),
            ConfigType::Short => ConfigValue::Short(trimmed.parse().map_err(|_| {
                ConfigException::invalid(name, raw, "Not a number of type SHORT")
            })?),
            ConfigType::Int => ConfigValue::Int(trimmed.parse().map_err(|_| {
                ConfigException::invalid(name, raw, "Not a number of type INT")
            })?),
            ConfigType::Long => ConfigValue::Long(trimmed.parse().map_err(|_| {
                ConfigException::invalid(name, raw, "Not a number of type LONG")
            })?),
            ConfigType::Double => ConfigValue::Double(trimmed.parse().map_err(|_| {
                ConfigException::invalid(name, raw, "Not a number of type DOUBLE")
            })?),
            ConfigType::List => {
                if trimmed.is_empty() {
                    ConfigValue::List(Vec::new())
                } else {
                    ConfigValue::List(trimmed.split(',').map(|s| s.trim().to_string()).collect())
                }
            }
            ConfigType::Class => {
                if trimmed.is_empty() {
                    return Err(ConfigException::invalid(name, raw, "Class name must not be empty"));
                }
                ConfigValue::Class(trimmed.to_string())
            }
            ConfigType::Password => ConfigValue::Password(raw.to_string()),
        };
        Ok(value)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) | ConfigValue::Class(s) | ConfigValue::Password(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Short(v) => Some(i64::from(*v)),
            ConfigValue::Int(v) => Some(i64::from(*v)),
            ConfigValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Double(v) => Some(*v),
            other => other.as_i64().map(|v| v as f64),
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::List(values) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Boolean(b) => write!(f, "{b}"),
            ConfigValue::String(s) | ConfigValue::Class(s) => f.write_str(s),
            ConfigValue::Short(v) => write!(f, "{v}"),
            ConfigValue::Int(v) => write!(f, "{v}"),
            ConfigValue::Long(v) => write!(f, "{v}"),
            ConfigValue::Double(v) => write!(f, "{v}"),
            ConfigValue::List(values) => write!(f, "[{}]", values.join(", ")),
            ConfigValue::Password(_) => f.write_str("[hidden]"),
        }
    }
}

/// Default value of an option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// The option must be supplied
    Required,

    /// The option may be omitted and has no value
    Null,

    /// Raw default, parsed with the option's type
    Value(String),
}

/// Definition of a single option
#[derive(Clone)]
pub struct ConfigKey {
    pub name: String,
    pub config_type: ConfigType,
    pub default_value: DefaultValue,
    pub importance: Importance,
    pub documentation: String,
    pub validator: Option<Arc<dyn Validator>>,
    pub group: Option<String>,
    pub display_name: String,
    pub recommended_values: Vec<String>,
}

impl ConfigKey {
    /// A required option with no default
    pub fn new(
        name: impl Into<String>,
        config_type: ConfigType,
        importance: Importance,
        documentation: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            config_type,
            default_value: DefaultValue::Required,
            importance,
            documentation: documentation.into(),
            validator: None,
            group: None,
            recommended_values: Vec::new(),
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = DefaultValue::Value(value.into());
        self
    }

    pub fn default_null(mut self) -> Self {
        self.default_value = DefaultValue::Null;
        self
    }

    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn recommended_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommended_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_required(&self) -> bool {
        self.default_value == DefaultValue::Required
    }

    /// Default rendered for documentation
    pub fn default_text(&self) -> String {
        match &self.default_value {
            DefaultValue::Required => String::new(),
            DefaultValue::Null => "null".to_string(),
            DefaultValue::Value(v) if self.config_type == ConfigType::Password => {
                if v.is_empty() {
                    String::new()
                } else {
                    "[hidden]".to_string()
                }
            }
            DefaultValue::Value(v) => v.clone(),
        }
    }

    /// Valid values rendered for documentation
    pub fn valid_values_text(&self) -> String {
        self.validator
            .as_ref()
            .map(|v| v.describe())
            .unwrap_or_default()
    }

    /// Parse and validate a raw value, falling back to the default.
    ///
    /// Returns `Ok(None)` when the option is absent and defaults to null.
    /// The validator is not run in that case, so an unset optional value is
    /// never reported.
    fn resolve(&self, raw: Option<&str>) -> Result<Option<ConfigValue>, ConfigException> {
        let parsed = match (raw, &self.default_value) {
            (Some(raw), _) => ConfigValue::parse(&self.name, self.config_type, raw)?,
            (None, DefaultValue::Value(default)) => {
                ConfigValue::parse(&self.name, self.config_type, default)?
            }
            (None, DefaultValue::Null) => return Ok(None),
            (None, DefaultValue::Required) => {
                return Err(ConfigException::new(
                    &self.name,
                    format!(
                        "Missing required configuration \"{}\" which has no default value.",
                        self.name
                    ),
                ))
            }
        };

        if let Some(validator) = &self.validator {
            validator.ensure_valid(&self.name, &parsed)?;
        }

        Ok(Some(parsed))
    }
}

impl fmt::Debug for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigKey")
            .field("name", &self.name)
            .field("config_type", &self.config_type)
            .field("default_value", &self.default_value)
            .field("importance", &self.importance)
            .field("validator", &self.validator)
            .finish()
    }
}

/// What to do with keys the schema does not define
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownKeyPolicy {
    /// Unknown keys pass through silently
    #[default]
    Ignore,

    /// Unknown keys are reported as errors
    Reject,
}

/// Validation outcome for one option
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValueReport {
    pub name: String,
    pub value: Option<ConfigValue>,
    pub error_messages: Vec<String>,
}

/// Ordered set of option definitions
#[derive(Debug, Clone, Default)]
pub struct ConfigDef {
    keys: Vec<ConfigKey>,
    unknown_keys: UnknownKeyPolicy,
}

impl ConfigDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option. A later definition with the same name replaces the
    /// earlier one in place.
    pub fn define(mut self, key: ConfigKey) -> Self {
        match self.keys.iter_mut().find(|k| k.name == key.name) {
            Some(existing) => *existing = key,
            None => self.keys.push(key),
        }
        self
    }

    pub fn unknown_keys(mut self, policy: UnknownKeyPolicy) -> Self {
        self.unknown_keys = policy;
        self
    }

    pub fn unknown_key_policy(&self) -> UnknownKeyPolicy {
        self.unknown_keys
    }

    /// Options in definition order
    pub fn keys(&self) -> &[ConfigKey] {
        &self.keys
    }

    pub fn key(&self, name: &str) -> Option<&ConfigKey> {
        self.keys.iter().find(|k| k.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Options grouped for documentation: required first, then by
    /// importance, then by name.
    pub fn sorted_keys(&self) -> Vec<&ConfigKey> {
        let mut keys: Vec<&ConfigKey> = self.keys.iter().collect();
        keys.sort_by(|a, b| {
            b.is_required()
                .cmp(&a.is_required())
                .then(a.importance.cmp(&b.importance))
                .then(a.name.cmp(&b.name))
        });
        keys
    }

    /// Validate raw properties against every option.
    ///
    /// One report per defined option, in definition order, followed by one
    /// report per unknown key when the policy rejects them.
    pub fn validate<'a, I>(&self, props: I) -> Vec<ConfigValueReport>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let props: Vec<(&str, &str)> = props.into_iter().collect();
        let lookup: HashMap<&str, &str> = props.iter().copied().collect();

        let mut reports: Vec<ConfigValueReport> = self
            .keys
            .iter()
            .map(|key| match key.resolve(lookup.get(key.name.as_str()).copied()) {
                Ok(value) => ConfigValueReport {
                    name: key.name.clone(),
                    value,
                    error_messages: Vec::new(),
                },
                Err(e) => ConfigValueReport {
                    name: key.name.clone(),
                    value: None,
                    error_messages: vec![e.message],
                },
            })
            .collect();

        if self.unknown_keys == UnknownKeyPolicy::Reject {
            for (name, _) in &props {
                if self.key(name).is_none() && !reports.iter().any(|r| r.name == *name) {
                    reports.push(ConfigValueReport {
                        name: name.to_string(),
                        value: None,
                        error_messages: vec![format!("Unknown configuration '{name}'")],
                    });
                }
            }
        }

        reports
    }

    /// Parse properties, failing on the first invalid option
    pub fn parse<'a, I>(&self, props: I) -> Result<ParsedConfig, ConfigException>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let lookup: HashMap<&str, &str> = props.into_iter().collect();

        if self.unknown_keys == UnknownKeyPolicy::Reject {
            let mut unknown: Vec<&str> = lookup
                .keys()
                .copied()
                .filter(|name| self.key(name).is_none())
                .collect();
            unknown.sort_unstable();
            if let Some(name) = unknown.first() {
                return Err(ConfigException::new(
                    *name,
                    format!("Unknown configuration '{name}'"),
                ));
            }
        }

        let mut values = BTreeMap::new();
        for key in &self.keys {
            if let Some(value) = key.resolve(lookup.get(key.name.as_str()).copied())? {
                values.insert(key.name.clone(), value);
            }
        }
        Ok(ParsedConfig { values })
    }
}

/// Typed view over parsed properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedConfig {
    values: BTreeMap<String, ConfigValue>,
}

impl ParsedConfig {
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.values.get(name)
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ConfigValue::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ConfigValue::as_bool)
    }

    pub fn get_long(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ConfigValue::as_i64)
    }

    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(ConfigValue::as_list)
    }
}
