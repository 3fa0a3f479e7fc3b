//! Per-kind example processing: validate, build configuration, render

use std::path::PathBuf;
use tracing::debug;

use connect_docs_generator::{
    rst, ConfigProviderExampleView, ConnectorExampleView, ConverterExampleView, ExampleLink,
    TemplateRegistry, TransformationExampleView, View,
};
use connect_docs_plugin::{ConfigDef, ConnectRecord, PluginKind, Schema};

use crate::diff;
use crate::example::builder::{indented_json, indented_properties};
use crate::example::{
    config_provider_worker_config, connector_config, converter_configs, transformation_config,
    ConfigProviderExample, ConverterExample, Example, ExampleFile, ExampleResolver,
    SinkConnectorExample, SourceConnectorExample, TransformationExample,
};
use crate::plugin::{PluginClassDescriptor, Registry};
use crate::validation::ConfigSchemaValidator;
use crate::DocsError;

/// One example rendered to its page
#[derive(Debug)]
pub struct RenderedExample {
    /// Page path relative to the output directory
    pub path: PathBuf,
    pub content: String,
    pub link: ExampleLink,
    /// Record schemas the example carries
    pub schemas: Vec<Schema>,
}

/// Renders the example pages of plugin classes
pub struct ExampleRenderer<'a> {
    registry: &'a Registry,
    resolver: &'a ExampleResolver,
    templates: &'a TemplateRegistry,
}

impl<'a> ExampleRenderer<'a> {
    pub fn new(
        registry: &'a Registry,
        resolver: &'a ExampleResolver,
        templates: &'a TemplateRegistry,
    ) -> Self {
        Self {
            registry,
            resolver,
            templates,
        }
    }

    /// Load, validate and render one example file
    pub fn render(
        &self,
        descriptor: &PluginClassDescriptor,
        file: &ExampleFile,
    ) -> Result<RenderedExample, DocsError> {
        let example = self.resolver.load(file)?;
        let schemas: Vec<Schema> = example
            .records()
            .into_iter()
            .flat_map(|record| record.schemas().cloned().collect::<Vec<_>>())
            .collect();

        let template = rst::example_template(descriptor.kind);
        let content = match &example {
            Example::SourceConnector(e) => {
                let view = self.source_view(descriptor, file, e)?;
                self.templates.render(template, &View::ConnectorExample(&view))?
            }
            Example::SinkConnector(e) => {
                let view = self.sink_view(descriptor, file, e)?;
                self.templates.render(template, &View::ConnectorExample(&view))?
            }
            Example::Transformation(e) => {
                let view = self.transformation_view(descriptor, file, e)?;
                self.templates.render(template, &View::TransformationExample(&view))?
            }
            Example::Converter(e) => {
                let view = self.converter_view(descriptor, file, e)?;
                self.templates.render(template, &View::ConverterExample(&view))?
            }
            Example::ConfigProvider(e) => {
                let view = self.config_provider_view(descriptor, file, e)?;
                self.templates.render(template, &View::ConfigProviderExample(&view))?
            }
        };

        let base_name = file.base_name();
        let document = format!("{}.{}", descriptor.simple_name, base_name);
        Ok(RenderedExample {
            path: PathBuf::from(descriptor.kind.directory())
                .join("examples")
                .join(format!("{document}.rst")),
            content,
            link: ExampleLink {
                name: base_name,
                title: example.docs().title.clone(),
                document: format!("examples/{document}"),
            },
            schemas,
        })
    }

    fn source_view(
        &self,
        descriptor: &PluginClassDescriptor,
        file: &ExampleFile,
        example: &SourceConnectorExample,
    ) -> Result<ConnectorExampleView, DocsError> {
        ConfigSchemaValidator::ensure_valid(required_schema(descriptor)?, &example.config, &file.path)?;
        let config = connector_config(file, &example.config, example.transformations.as_ref())?;

        Ok(ConnectorExampleView {
            kind: PluginKind::SourceConnector,
            class_name: descriptor.qualified_name.clone(),
            simple_name: descriptor.simple_name.clone(),
            example_name: file.base_name(),
            docs: example.docs.clone(),
            config_json: indented_json(&config)?,
            input_json: None,
            output_json: record_json(example.output.as_ref())?,
        })
    }

    fn sink_view(
        &self,
        descriptor: &PluginClassDescriptor,
        file: &ExampleFile,
        example: &SinkConnectorExample,
    ) -> Result<ConnectorExampleView, DocsError> {
        ConfigSchemaValidator::ensure_valid(required_schema(descriptor)?, &example.config, &file.path)?;
        let config = connector_config(file, &example.config, example.transformations.as_ref())?;

        Ok(ConnectorExampleView {
            kind: PluginKind::SinkConnector,
            class_name: descriptor.qualified_name.clone(),
            simple_name: descriptor.simple_name.clone(),
            example_name: file.base_name(),
            docs: example.docs.clone(),
            config_json: indented_json(&config)?,
            input_json: record_json(example.input.as_ref())?,
            output_json: record_json(example.output.as_ref())?,
        })
    }

    fn transformation_view(
        &self,
        descriptor: &PluginClassDescriptor,
        file: &ExampleFile,
        example: &TransformationExample,
    ) -> Result<TransformationExampleView, DocsError> {
        let entry = match example.child_class.as_deref().filter(|c| !c.is_empty()) {
            Some(child) => {
                self.resolver
                    .child_class(self.registry, &descriptor.qualified_name, child)?
            }
            None => self.registry.get(&descriptor.qualified_name).ok_or_else(|| {
                DocsError::PluginInstantiation {
                    class: descriptor.qualified_name.clone(),
                    reason: "class is not registered".to_string(),
                }
            })?,
        };
        let class_name = entry.name().to_string();
        debug!("Running {} for example {}", class_name, file.path);

        if let Some(schema) = &descriptor.configuration {
            ConfigSchemaValidator::ensure_valid(schema, &example.config, &file.path)?;
        }

        let instantiation_error = |reason: String| DocsError::PluginInstantiation {
            class: class_name.clone(),
            reason,
        };
        let mut transform = entry
            .instantiate()
            .ok_or_else(|| instantiation_error("class has no zero-argument constructor".to_string()))?
            .map_err(|e| instantiation_error(e.to_string()))?
            .into_transformation()
            .ok_or_else(|| instantiation_error("class is not a transformation".to_string()))?;

        let transformation_failed = |reason: String| DocsError::Transformation {
            class: class_name.clone(),
            reason,
        };
        transform
            .configure(&example.config.to_pairs())
            .map_err(|e| transformation_failed(e.to_string()))?;

        let config_json = transformation_config(&descriptor.simple_name, &class_name, &example.config)
            .map(|config| indented_json(&config))
            .transpose()?;

        let mut input_json = None;
        let mut output_json = None;
        let mut output_emphasize_lines = Default::default();
        if let Some(input) = &example.input {
            let input_text = indented_json(input)?;
            let output = transform
                .apply(input.clone())
                .map_err(|e| transformation_failed(e.to_string()))?;
            if let Some(output) = output {
                let output_text = indented_json(&output)?;
                output_emphasize_lines = diff::highlight(&input_text, &output_text);
                output_json = Some(output_text);
            }
            input_json = Some(input_text);
        }

        Ok(TransformationExampleView {
            class_name: descriptor.qualified_name.clone(),
            simple_name: descriptor.simple_name.clone(),
            transformation_class: class_name.clone(),
            example_name: file.base_name(),
            docs: example.docs.clone(),
            config_json,
            input_json,
            output_json,
            output_emphasize_lines,
        })
    }

    fn converter_view(
        &self,
        descriptor: &PluginClassDescriptor,
        file: &ExampleFile,
        example: &ConverterExample,
    ) -> Result<ConverterExampleView, DocsError> {
        ConfigSchemaValidator::ensure_valid(required_schema(descriptor)?, &example.config, &file.path)?;
        let configs = converter_configs(&descriptor.qualified_name, &example.config);

        Ok(ConverterExampleView {
            class_name: descriptor.qualified_name.clone(),
            simple_name: descriptor.simple_name.clone(),
            example_name: file.base_name(),
            docs: example.docs.clone(),
            connector_key_config: indented_json(&configs.key)?,
            connector_value_config: indented_json(&configs.value)?,
            worker_key_config: indented_properties(&configs.key),
            worker_value_config: indented_properties(&configs.value),
        })
    }

    fn config_provider_view(
        &self,
        descriptor: &PluginClassDescriptor,
        file: &ExampleFile,
        example: &ConfigProviderExample,
    ) -> Result<ConfigProviderExampleView, DocsError> {
        ConfigSchemaValidator::ensure_valid(required_schema(descriptor)?, &example.config, &file.path)?;
        let worker_config = config_provider_worker_config(
            &descriptor.qualified_name,
            &example.prefix,
            &example.config,
        );

        Ok(ConfigProviderExampleView {
            class_name: descriptor.qualified_name.clone(),
            simple_name: descriptor.simple_name.clone(),
            example_name: file.base_name(),
            docs: example.docs.clone(),
            prefix: example.prefix.clone(),
            worker_config: indented_properties(&worker_config),
            connector_config_json: example
                .connector_config
                .as_ref()
                .map(indented_json)
                .transpose()?,
        })
    }
}

fn required_schema(descriptor: &PluginClassDescriptor) -> Result<&ConfigDef, DocsError> {
    descriptor
        .configuration
        .as_ref()
        .ok_or_else(|| DocsError::MissingConfiguration {
            class: descriptor.qualified_name.clone(),
            kind: descriptor.kind,
        })
}

fn record_json(record: Option<&ConnectRecord>) -> Result<Option<String>, DocsError> {
    record.map(indented_json).transpose()
}
