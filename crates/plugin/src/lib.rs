//! Common plugin infrastructure for connect-docs
//!
//! Everything a plugin author touches lives here: the five plugin kinds and
//! their capability markers, the traits a plugin implements, the declarative
//! [`ConfigDef`] schema with its validators, and the record model that
//! transformations operate on.

pub mod config;
pub mod kind;
pub mod record;
pub mod traits;

pub use config::{
    ConfigDef, ConfigException, ConfigKey, ConfigType, ConfigValue, ConfigValueReport,
    DefaultValue, Importance, ParsedConfig, UnknownKeyPolicy, Validator,
};
pub use kind::PluginKind;
pub use record::{ConnectRecord, Field, Header, Schema, SchemaType};
pub use traits::*;
