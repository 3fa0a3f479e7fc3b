//! View objects handed to templates
//!
//! Views are plain values built once by the caller. The only logic here is
//! [`View::check`], which rejects internally inconsistent views before a
//! template ever sees them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use connect_docs_plugin::{ConfigDef, Documentation, PluginKind, Schema, SchemaType};

use crate::RenderError;

/// One configuration option as documented
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigKeyView {
    pub name: String,
    pub display_name: String,
    pub documentation: String,
    pub config_type: String,
    pub default_value: String,
    pub importance: String,
    pub valid_values: String,
    pub group: Option<String>,
    pub required: bool,
}

impl ConfigKeyView {
    /// Views for every option, required first then by importance
    pub fn from_config_def(def: &ConfigDef) -> Vec<ConfigKeyView> {
        def.sorted_keys()
            .into_iter()
            .map(|key| ConfigKeyView {
                name: key.name.clone(),
                display_name: key.display_name.clone(),
                documentation: key.documentation.clone(),
                config_type: key.config_type.to_string(),
                default_value: key.default_text(),
                importance: key.importance.to_string(),
                valid_values: key.valid_values_text(),
                group: key.group.clone(),
                required: key.is_required(),
            })
            .collect()
    }
}

/// Link from a class page to one of its example pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleLink {
    /// Example base name (file name without extension)
    pub name: String,

    /// Example title, when the example declares one
    pub title: Option<String>,

    /// Document path relative to the class page's directory, without suffix
    pub document: String,
}

/// A documented plugin class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassView {
    pub kind: PluginKind,
    pub qualified_name: String,
    pub simple_name: String,
    pub version: String,
    pub documentation: Documentation,
    pub config: Option<Vec<ConfigKeyView>>,
    pub examples: Vec<ExampleLink>,
}

impl ClassView {
    /// Title, falling back to the simple class name
    pub fn title(&self) -> &str {
        self.documentation
            .title
            .as_deref()
            .unwrap_or(&self.simple_name)
    }
}

/// Record schema rendered as a tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaView {
    pub name: Option<String>,
    pub doc: Option<String>,
    pub schema_type: SchemaType,
    pub field_name: Option<String>,
    pub optional: bool,
    pub fields: Vec<SchemaView>,
    pub key: Option<Box<SchemaView>>,
    pub value: Option<Box<SchemaView>>,
}

impl SchemaView {
    pub fn build(schema: &Schema) -> Self {
        Self::build_field(schema, None)
    }

    fn build_field(schema: &Schema, field_name: Option<&str>) -> Self {
        let mut view = SchemaView {
            name: schema.name.clone(),
            doc: schema.doc.clone(),
            schema_type: schema.schema_type,
            field_name: field_name.map(str::to_string),
            optional: schema.optional,
            fields: Vec::new(),
            key: None,
            value: None,
        };

        match schema.schema_type {
            SchemaType::Struct => {
                view.fields = schema
                    .fields
                    .iter()
                    .map(|f| Self::build_field(&f.schema, Some(&f.name)))
                    .collect();
            }
            SchemaType::Map => {
                view.key = schema.key_schema.as_deref().map(|s| Box::new(Self::build(s)));
                view.value = schema.value_schema.as_deref().map(|s| Box::new(Self::build(s)));
            }
            SchemaType::Array => {
                view.value = schema.value_schema.as_deref().map(|s| Box::new(Self::build(s)));
            }
            _ => {}
        }

        view
    }

    /// File stem for this schema's page, e.g. `struct.com.example.Customer`
    pub fn file_stem(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => {
                format!("{}.{}", self.schema_type.file_prefix(), name)
            }
            _ => self.schema_type.file_prefix().to_string(),
        }
    }
}

/// Plugin-wide view used by the index, schema overview and README
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginView {
    pub title: String,
    pub description: Option<String>,
    pub introduction: Option<String>,
    pub scan_root: String,
    pub source_connectors: Vec<ClassView>,
    pub sink_connectors: Vec<ClassView>,
    pub transformations: Vec<ClassView>,
    pub converters: Vec<ClassView>,
    pub config_providers: Vec<ClassView>,
    pub schemas: Vec<SchemaView>,
}

impl PluginView {
    /// Classes of one kind
    pub fn classes(&self, kind: PluginKind) -> &[ClassView] {
        match kind {
            PluginKind::SourceConnector => &self.source_connectors,
            PluginKind::SinkConnector => &self.sink_connectors,
            PluginKind::Transformation => &self.transformations,
            PluginKind::Converter => &self.converters,
            PluginKind::ConfigProvider => &self.config_providers,
        }
    }
}

/// Documentation fields an example file may declare
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleDocs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub note: Option<String>,
    pub warning: Option<String>,
    pub tip: Option<String>,
    pub important: Option<String>,
    pub danger: Option<String>,
}

/// Source or sink connector example
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorExampleView {
    pub kind: PluginKind,
    pub class_name: String,
    pub simple_name: String,
    pub example_name: String,
    pub docs: ExampleDocs,
    pub config_json: String,
    pub input_json: Option<String>,
    pub output_json: Option<String>,
}

/// Transformation example with its computed output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformationExampleView {
    pub class_name: String,
    pub simple_name: String,
    /// Class actually run, a nested class when the example selects one
    pub transformation_class: String,
    pub example_name: String,
    pub docs: ExampleDocs,
    pub config_json: Option<String>,
    pub input_json: Option<String>,
    pub output_json: Option<String>,
    pub output_emphasize_lines: BTreeSet<usize>,
}

/// Converter example rendered for connector and worker configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConverterExampleView {
    pub class_name: String,
    pub simple_name: String,
    pub example_name: String,
    pub docs: ExampleDocs,
    pub connector_key_config: String,
    pub connector_value_config: String,
    pub worker_key_config: String,
    pub worker_value_config: String,
}

/// Config provider example
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigProviderExampleView {
    pub class_name: String,
    pub simple_name: String,
    pub example_name: String,
    pub docs: ExampleDocs,
    pub prefix: String,
    pub worker_config: String,
    pub connector_config_json: Option<String>,
}

/// Anything a template can render
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Plugin(&'a PluginView),
    Class(&'a ClassView),
    ConnectorExample(&'a ConnectorExampleView),
    TransformationExample(&'a TransformationExampleView),
    ConverterExample(&'a ConverterExampleView),
    ConfigProviderExample(&'a ConfigProviderExampleView),
    Schema(&'a SchemaView),
}

impl<'a> View<'a> {
    /// Short name of the variant, used in error messages
    pub fn variant(&self) -> &'static str {
        match self {
            View::Plugin(_) => "plugin",
            View::Class(_) => "class",
            View::ConnectorExample(_) => "connector example",
            View::TransformationExample(_) => "transformation example",
            View::ConverterExample(_) => "converter example",
            View::ConfigProviderExample(_) => "config provider example",
            View::Schema(_) => "schema",
        }
    }

    /// Reject views whose fields contradict each other
    pub fn check(&self) -> Result<(), RenderError> {
        match self {
            View::TransformationExample(example) => check_emphasis(example),
            View::ConnectorExample(example) => {
                if example.kind == PluginKind::SourceConnector && example.input_json.is_some() {
                    return Err(RenderError::Inconsistent(format!(
                        "source connector example '{}' cannot have an input",
                        example.example_name
                    )));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

fn check_emphasis(example: &TransformationExampleView) -> Result<(), RenderError> {
    if example.output_emphasize_lines.is_empty() {
        return Ok(());
    }

    let output = example.output_json.as_deref().ok_or_else(|| {
        RenderError::Inconsistent(format!(
            "example '{}' emphasizes lines but has no output",
            example.example_name
        ))
    })?;

    let line_count = output.lines().count();
    if let Some(line) = example
        .output_emphasize_lines
        .iter()
        .find(|&&line| line == 0 || line > line_count)
    {
        return Err(RenderError::Inconsistent(format!(
            "example '{}' emphasizes line {} but the output has {} lines",
            example.example_name, line, line_count
        )));
    }

    Ok(())
}
