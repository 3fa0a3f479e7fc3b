//! Example files: loading and the configurations built from them

pub mod builder;
pub mod properties;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::{
    config_provider_worker_config, connector_config, converter_configs, transformation_config,
    ConverterConfigs,
};
pub use properties::{Properties, Transformations};
pub use resolver::{is_example_file, ExampleFile, ExampleResolver};
pub use types::{
    ConfigProviderExample, ConverterExample, Example, SinkConnectorExample,
    SourceConnectorExample, TransformationExample,
};
