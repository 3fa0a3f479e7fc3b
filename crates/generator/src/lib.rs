//! Documentation rendering for connect-docs
//!
//! Views are built by the caller, checked, then rendered by named templates
//! and written through an [`writer::OutputSink`].

pub mod config;
pub mod markdown;
pub mod result;
pub mod rst;
pub mod template;
pub mod view;
pub mod writer;

pub use config::{DocumentFormat, OutputConfig};
pub use result::{ExampleFailure, GenerationResult, GenerationStatistics};
pub use template::{FnTemplate, Template, TemplateRegistry};
pub use view::{
    ClassView, ConfigKeyView, ConfigProviderExampleView, ConnectorExampleView,
    ConverterExampleView, ExampleDocs, ExampleLink, PluginView, SchemaView,
    TransformationExampleView, View,
};
pub use writer::{FsSink, MemorySink, OutputSink};

/// Errors raised while rendering a view
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Template expects a {expected} view but got a {actual} view")]
    ViewMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Inconsistent view: {0}")]
    Inconsistent(String),
}
