//! Configuration management for connect-docs

pub mod config;
pub mod generation;

#[cfg(test)]
mod tests;

pub use config::{Config, PluginMetadata};
pub use generation::GenerationConfig;
