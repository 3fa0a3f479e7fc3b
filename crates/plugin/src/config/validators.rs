//! Option validators

use regex::Regex;
use std::fmt;
use url::Url;

use super::{ConfigException, ConfigValue};

/// Validator attached to a [`super::ConfigKey`]
pub trait Validator: fmt::Debug + Send + Sync {
    /// Check a parsed value
    fn ensure_valid(&self, name: &str, value: &ConfigValue) -> Result<(), ConfigException>;

    /// Valid values, as shown in documentation
    fn describe(&self) -> String {
        String::new()
    }
}

/// Numeric range, inclusive on both ends
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    min: Option<f64>,
    max: Option<f64>,
}

impl Range {
    pub fn at_least(min: impl Into<f64>) -> Self {
        Self {
            min: Some(min.into()),
            max: None,
        }
    }

    pub fn between(min: impl Into<f64>, max: impl Into<f64>) -> Self {
        Self {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }
}

impl Validator for Range {
    fn ensure_valid(&self, name: &str, value: &ConfigValue) -> Result<(), ConfigException> {
        let number = value
            .as_f64()
            .ok_or_else(|| ConfigException::invalid(name, value, "Value must be a number"))?;

        if let Some(min) = self.min {
            if number < min {
                return Err(ConfigException::invalid(
                    name,
                    value,
                    format!("Value must be at least {min}"),
                ));
            }
        }
        if let Some(max) = self.max {
            if number > max {
                return Err(ConfigException::invalid(
                    name,
                    value,
                    format!("Value must be no more than {max}"),
                ));
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("[{min},...,{max}]"),
            (Some(min), None) => format!("[{min},...]"),
            (None, Some(max)) => format!("[...,{max}]"),
            (None, None) => "[...]".to_string(),
        }
    }
}

/// Value must be one of a fixed set of strings
#[derive(Debug, Clone, PartialEq)]
pub struct ValidString {
    allowed: Vec<String>,
    case_sensitive: bool,
}

impl ValidString {
    pub fn one_of<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            case_sensitive: true,
        }
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    fn matches(&self, candidate: &str) -> bool {
        self.allowed.iter().any(|a| {
            if self.case_sensitive {
                a == candidate
            } else {
                a.eq_ignore_ascii_case(candidate)
            }
        })
    }
}

impl Validator for ValidString {
    fn ensure_valid(&self, name: &str, value: &ConfigValue) -> Result<(), ConfigException> {
        let ok = match value {
            ConfigValue::List(items) => items.iter().all(|item| self.matches(item)),
            other => other.as_str().map(|s| self.matches(s)).unwrap_or(false),
        };
        if ok {
            Ok(())
        } else {
            Err(ConfigException::invalid(
                name,
                value,
                format!("String must be one of: {}", self.allowed.join(", ")),
            ))
        }
    }

    fn describe(&self) -> String {
        format!("[{}]", self.allowed.join(", "))
    }
}

/// String must contain at least one non-whitespace character
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NonEmptyString;

impl Validator for NonEmptyString {
    fn ensure_valid(&self, name: &str, value: &ConfigValue) -> Result<(), ConfigException> {
        match value.as_str() {
            Some(s) if !s.trim().is_empty() => Ok(()),
            _ => Err(ConfigException::invalid(
                name,
                value,
                "String must be non-empty",
            )),
        }
    }

    fn describe(&self) -> String {
        "non-empty string".to_string()
    }
}

/// String (or every list element) must fully match a regular expression
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Fails when `pattern` is not a valid regular expression
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = format!("^(?:{pattern})$");
        Ok(Self {
            regex: Regex::new(&anchored)?,
        })
    }
}

impl Validator for Pattern {
    fn ensure_valid(&self, name: &str, value: &ConfigValue) -> Result<(), ConfigException> {
        let ok = match value {
            ConfigValue::List(items) => items.iter().all(|item| self.regex.is_match(item)),
            other => other.as_str().map(|s| self.regex.is_match(s)).unwrap_or(false),
        };
        if ok {
            Ok(())
        } else {
            Err(ConfigException::invalid(
                name,
                value,
                format!("Does not match pattern {}", self.regex.as_str()),
            ))
        }
    }

    fn describe(&self) -> String {
        format!("Matches: ``{}``", self.regex.as_str())
    }
}

/// Value must be a well-formed URL, or a list of them
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ValidUrl;

impl ValidUrl {
    fn check(name: &str, value: &str) -> Result<(), ConfigException> {
        Url::parse(value)
            .map(|_| ())
            .map_err(|e| {
                tracing::debug!("'{}' rejected '{}': {}", name, value, e);
                ConfigException::invalid(name, value, "Could not parse to URL.")
            })
    }
}

impl Validator for ValidUrl {
    fn ensure_valid(&self, name: &str, value: &ConfigValue) -> Result<(), ConfigException> {
        match value {
            ConfigValue::String(s) => Self::check(name, s),
            ConfigValue::List(values) => values.iter().try_for_each(|v| Self::check(name, v)),
            other => Err(ConfigException::invalid(
                name,
                other,
                "Must be a string or list.",
            )),
        }
    }

    fn describe(&self) -> String {
        "Valid URL".to_string()
    }
}
