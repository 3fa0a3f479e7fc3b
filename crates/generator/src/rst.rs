//! reStructuredText templates

use connect_docs_plugin::{Documentation, PluginKind};

use crate::template::FnTemplate;
use crate::view::{
    ClassView, ConfigKeyView, ConfigProviderExampleView, ConnectorExampleView,
    ConverterExampleView, ExampleDocs, PluginView, SchemaView, TransformationExampleView, View,
};
use crate::RenderError;

/// All reStructuredText templates
pub fn templates() -> Vec<FnTemplate> {
    vec![
        FnTemplate::new("rst/source.rst", class_page),
        FnTemplate::new("rst/sink.rst", class_page),
        FnTemplate::new("rst/transformation.rst", class_page),
        FnTemplate::new("rst/converter.rst", class_page),
        FnTemplate::new("rst/configProvider.rst", class_page),
        FnTemplate::new("rst/sourceConnectorExample.rst", connector_example_page),
        FnTemplate::new("rst/sinkConnectorExample.rst", connector_example_page),
        FnTemplate::new("rst/transformationExample.rst", transformation_example_page),
        FnTemplate::new("rst/converterExample.rst", converter_example_page),
        FnTemplate::new("rst/configProviderExample.rst", config_provider_example_page),
        FnTemplate::new("rst/schema.rst", schema_page),
        FnTemplate::new("rst/schemas.rst", schemas_page),
        FnTemplate::new("rst/index.rst", index_page),
    ]
}

/// Template name for a class page of the given kind
pub fn class_template(kind: PluginKind) -> &'static str {
    match kind {
        PluginKind::SourceConnector => "rst/source.rst",
        PluginKind::SinkConnector => "rst/sink.rst",
        PluginKind::Transformation => "rst/transformation.rst",
        PluginKind::Converter => "rst/converter.rst",
        PluginKind::ConfigProvider => "rst/configProvider.rst",
    }
}

/// Template name for an example page of the given kind
pub fn example_template(kind: PluginKind) -> &'static str {
    match kind {
        PluginKind::SourceConnector => "rst/sourceConnectorExample.rst",
        PluginKind::SinkConnector => "rst/sinkConnectorExample.rst",
        PluginKind::Transformation => "rst/transformationExample.rst",
        PluginKind::Converter => "rst/converterExample.rst",
        PluginKind::ConfigProvider => "rst/configProviderExample.rst",
    }
}

fn mismatch(expected: &'static str, view: &View<'_>) -> RenderError {
    RenderError::ViewMismatch {
        expected,
        actual: view.variant(),
    }
}

/// Title with an over- and underline of `ch`
fn title(text: &str, ch: char) -> String {
    let line: String = std::iter::repeat(ch).take(text.chars().count().max(1)).collect();
    format!("{line}\n{text}\n{line}\n\n")
}

/// Section heading underlined with `ch`
fn heading(text: &str, ch: char) -> String {
    let line: String = std::iter::repeat(ch).take(text.chars().count().max(1)).collect();
    format!("{text}\n{line}\n\n")
}

fn anchor(label: &str) -> String {
    format!(".. _{label}:\n\n")
}

fn admonition(kind: &str, text: &Option<String>) -> String {
    match text {
        Some(text) if !text.trim().is_empty() => {
            let mut content = format!(".. {kind}::\n\n");
            for line in text.lines() {
                if line.is_empty() {
                    content.push('\n');
                } else {
                    content.push_str(&format!("    {line}\n"));
                }
            }
            content.push('\n');
            content
        }
        _ => String::new(),
    }
}

fn paragraph(text: &Option<String>) -> String {
    match text {
        Some(text) if !text.trim().is_empty() => format!("{}\n\n", text.trim_end()),
        _ => String::new(),
    }
}

fn documentation_blocks(docs: &Documentation) -> String {
    let mut content = String::new();
    content.push_str(&paragraph(&docs.description));
    content.push_str(&admonition("note", &docs.note));
    content.push_str(&admonition("important", &docs.important));
    content.push_str(&admonition("tip", &docs.tip));
    content.push_str(&admonition("warning", &docs.warning));
    content.push_str(&admonition("danger", &docs.danger));
    content
}

fn example_blocks(docs: &ExampleDocs) -> String {
    let mut content = String::new();
    content.push_str(&paragraph(&docs.description));
    content.push_str(&admonition("note", &docs.note));
    content.push_str(&admonition("important", &docs.important));
    content.push_str(&admonition("tip", &docs.tip));
    content.push_str(&admonition("warning", &docs.warning));
    content.push_str(&admonition("danger", &docs.danger));
    content
}

/// Code block; `body` is expected to be indented already
fn code_block(language: &str, caption: &str, body: &str, emphasize: Option<String>) -> String {
    let mut content = format!(".. code-block:: {language}\n");
    content.push_str(&format!("    :caption: {caption}\n"));
    if let Some(lines) = emphasize {
        content.push_str(&format!("    :emphasize-lines: {lines}\n"));
    }
    content.push('\n');
    content.push_str(body.trim_end());
    content.push_str("\n\n");
    content
}

fn config_key(key: &ConfigKeyView) -> String {
    let mut content = format!("``{}``\n", key.name);
    for line in key.documentation.lines() {
        content.push_str(&format!("  {line}\n"));
    }
    content.push('\n');
    content.push_str(&format!("  * Type: {}\n", key.config_type));
    if key.required {
        content.push_str("  * Required\n");
    } else {
        content.push_str(&format!("  * Default: {}\n", key.default_value));
    }
    if !key.valid_values.is_empty() {
        content.push_str(&format!("  * Valid Values: {}\n", key.valid_values));
    }
    content.push_str(&format!("  * Importance: {}\n\n", key.importance));
    content
}

fn configuration_section(config: &[ConfigKeyView]) -> String {
    let mut content = heading("Configuration", '-');

    // Groups keep the order in which they first appear
    let mut groups: Vec<Option<&str>> = Vec::new();
    for key in config {
        if !groups.contains(&key.group.as_deref()) {
            groups.push(key.group.as_deref());
        }
    }

    for group in groups {
        if let Some(name) = group {
            content.push_str(&heading(name, '^'));
        }
        for key in config.iter().filter(|k| k.group.as_deref() == group) {
            content.push_str(&config_key(key));
        }
    }
    content
}

fn class_page(view: &View<'_>) -> Result<String, RenderError> {
    let class: &ClassView = match view {
        View::Class(class) => class,
        other => return Err(mismatch("class", other)),
    };

    let mut content = String::new();
    content.push_str(&anchor(&format!("{}-{}", class.kind.directory(), class.simple_name)));
    content.push_str(&title(class.title(), '='));
    content.push_str(&documentation_blocks(&class.documentation));
    content.push_str(&format!(
        ".. code-block:: text\n    :caption: Class\n\n    {}\n\n",
        class.qualified_name
    ));

    if !class.examples.is_empty() {
        content.push_str(&heading("Examples", '-'));
        content.push_str(".. toctree::\n    :maxdepth: 1\n\n");
        for example in &class.examples {
            match &example.title {
                Some(title) => {
                    content.push_str(&format!("    {} <{}>\n", title, example.document))
                }
                None => content.push_str(&format!("    {}\n", example.document)),
            }
        }
        content.push('\n');
    }

    match &class.config {
        Some(config) if !config.is_empty() => content.push_str(&configuration_section(config)),
        _ => {
            content.push_str(&heading("Configuration", '-'));
            content.push_str(&format!(
                "This {} does not have any configuration options.\n",
                class.kind
            ));
        }
    }

    Ok(content)
}

fn example_title(docs: &ExampleDocs, simple_name: &str, example_name: &str) -> String {
    docs.title
        .clone()
        .unwrap_or_else(|| format!("{simple_name} - {example_name}"))
}

fn connector_example_page(view: &View<'_>) -> Result<String, RenderError> {
    let example: &ConnectorExampleView = match view {
        View::ConnectorExample(example) => example,
        other => return Err(mismatch("connector example", other)),
    };

    let mut content = String::new();
    content.push_str(&anchor(&format!(
        "{}-{}-{}",
        example.kind.directory(),
        example.simple_name,
        example.example_name
    )));
    content.push_str(&title(
        &example_title(&example.docs, &example.simple_name, &example.example_name),
        '=',
    ));
    content.push_str(&example_blocks(&example.docs));
    content.push_str(&code_block(
        "json",
        "Connector Configuration",
        &example.config_json,
        None,
    ));
    if let Some(input) = &example.input_json {
        content.push_str(&code_block("json", "Input", input, None));
    }
    if let Some(output) = &example.output_json {
        content.push_str(&code_block("json", "Output", output, None));
    }
    Ok(content)
}

fn emphasis(lines: &std::collections::BTreeSet<usize>) -> Option<String> {
    if lines.is_empty() {
        None
    } else {
        Some(
            lines
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

fn transformation_example_page(view: &View<'_>) -> Result<String, RenderError> {
    let example: &TransformationExampleView = match view {
        View::TransformationExample(example) => example,
        other => return Err(mismatch("transformation example", other)),
    };

    let mut content = String::new();
    content.push_str(&anchor(&format!(
        "transformations-{}-{}",
        example.simple_name, example.example_name
    )));
    content.push_str(&title(
        &example_title(&example.docs, &example.simple_name, &example.example_name),
        '=',
    ));
    content.push_str(&example_blocks(&example.docs));

    if let Some(config) = &example.config_json {
        content.push_str(&code_block("json", "Transformation Configuration", config, None));
    }
    if let Some(input) = &example.input_json {
        content.push_str(&code_block("json", "Input", input, None));
    }
    if let Some(output) = &example.output_json {
        content.push_str(&code_block(
            "json",
            "Output",
            output,
            emphasis(&example.output_emphasize_lines),
        ));
    }
    Ok(content)
}

fn converter_example_page(view: &View<'_>) -> Result<String, RenderError> {
    let example: &ConverterExampleView = match view {
        View::ConverterExample(example) => example,
        other => return Err(mismatch("converter example", other)),
    };

    let mut content = String::new();
    content.push_str(&anchor(&format!(
        "converters-{}-{}",
        example.simple_name, example.example_name
    )));
    content.push_str(&title(
        &example_title(&example.docs, &example.simple_name, &example.example_name),
        '=',
    ));
    content.push_str(&example_blocks(&example.docs));

    content.push_str(&heading("Connector Configuration", '-'));
    content.push_str(&code_block("json", "Key Converter", &example.connector_key_config, None));
    content.push_str(&code_block(
        "json",
        "Value Converter",
        &example.connector_value_config,
        None,
    ));

    content.push_str(&heading("Worker Configuration", '-'));
    content.push_str(&code_block(
        "properties",
        "Key Converter",
        &example.worker_key_config,
        None,
    ));
    content.push_str(&code_block(
        "properties",
        "Value Converter",
        &example.worker_value_config,
        None,
    ));
    Ok(content)
}

fn config_provider_example_page(view: &View<'_>) -> Result<String, RenderError> {
    let example: &ConfigProviderExampleView = match view {
        View::ConfigProviderExample(example) => example,
        other => return Err(mismatch("config provider example", other)),
    };

    let mut content = String::new();
    content.push_str(&anchor(&format!(
        "configProviders-{}-{}",
        example.simple_name, example.example_name
    )));
    content.push_str(&title(
        &example_title(&example.docs, &example.simple_name, &example.example_name),
        '=',
    ));
    content.push_str(&example_blocks(&example.docs));
    content.push_str(&code_block(
        "properties",
        "Worker Configuration",
        &example.worker_config,
        None,
    ));
    if let Some(connector) = &example.connector_config_json {
        content.push_str(&code_block("json", "Connector Configuration", connector, None));
    }
    Ok(content)
}

fn schema_type_text(schema: &SchemaView) -> String {
    match &schema.name {
        Some(name) if !name.is_empty() => {
            format!(":ref:`{} <schema-{}>`", name, schema.file_stem())
        }
        _ => format!("{:?}", schema.schema_type).to_uppercase(),
    }
}

fn schema_page(view: &View<'_>) -> Result<String, RenderError> {
    let schema: &SchemaView = match view {
        View::Schema(schema) => schema,
        other => return Err(mismatch("schema", other)),
    };

    let name = schema.name.clone().unwrap_or_else(|| schema.file_stem());
    let mut content = String::new();
    content.push_str(&anchor(&format!("schema-{}", schema.file_stem())));
    content.push_str(&title(&name, '='));
    content.push_str(&paragraph(&schema.doc));

    if !schema.fields.is_empty() {
        content.push_str(&heading("Fields", '-'));
        for field in &schema.fields {
            let field_name = field.field_name.as_deref().unwrap_or_default();
            let optional = if field.optional { " (optional)" } else { "" };
            content.push_str(&format!(
                "* ``{}`` - {}{}\n",
                field_name,
                schema_type_text(field),
                optional
            ));
            if let Some(doc) = &field.doc {
                content.push_str(&format!("    {doc}\n"));
            }
        }
        content.push('\n');
    }
    if let Some(key) = &schema.key {
        content.push_str(&format!("Key: {}\n\n", schema_type_text(key)));
    }
    if let Some(value) = &schema.value {
        content.push_str(&format!("Value: {}\n\n", schema_type_text(value)));
    }
    Ok(content)
}

fn schemas_page(view: &View<'_>) -> Result<String, RenderError> {
    let plugin: &PluginView = match view {
        View::Plugin(plugin) => plugin,
        other => return Err(mismatch("plugin", other)),
    };

    let mut content = title("Schemas", '=');
    content.push_str(".. toctree::\n    :maxdepth: 1\n    :glob:\n\n");
    for schema in plugin.schemas.iter().filter(|s| s.name.is_some()) {
        content.push_str(&format!("    schemas/{}\n", schema.file_stem()));
    }
    content.push('\n');
    Ok(content)
}

fn index_page(view: &View<'_>) -> Result<String, RenderError> {
    let plugin: &PluginView = match view {
        View::Plugin(plugin) => plugin,
        other => return Err(mismatch("plugin", other)),
    };

    let mut content = String::new();
    content.push_str(&title(&plugin.title, '='));
    content.push_str(&paragraph(&plugin.description));
    content.push_str(&paragraph(&plugin.introduction));

    for kind in PluginKind::ALL {
        let classes = plugin.classes(kind);
        if classes.is_empty() {
            continue;
        }
        content.push_str(&format!(
            ".. toctree::\n    :maxdepth: 1\n    :caption: {}:\n\n",
            kind.title()
        ));
        for class in classes {
            content.push_str(&format!("    {}/{}\n", kind.directory(), class.simple_name));
        }
        content.push('\n');
    }

    if plugin.schemas.iter().any(|s| s.name.is_some()) {
        content.push_str(".. toctree::\n    :maxdepth: 1\n    :caption: Schemas:\n\n    schemas\n\n");
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ExampleLink;
    use std::collections::BTreeSet;

    fn class_view() -> ClassView {
        ClassView {
            kind: PluginKind::SinkConnector,
            qualified_name: "acme.sink.ConsoleSink".to_string(),
            simple_name: "ConsoleSink".to_string(),
            version: "1.0.0".to_string(),
            documentation: Documentation::titled("Console Sink")
                .description("Writes records to stdout.")
                .warning("Not for production."),
            config: Some(vec![ConfigKeyView {
                name: "prefix".to_string(),
                display_name: "prefix".to_string(),
                documentation: "Line prefix.".to_string(),
                config_type: "STRING".to_string(),
                default_value: ">".to_string(),
                importance: "Low".to_string(),
                valid_values: String::new(),
                group: None,
                required: false,
            }]),
            examples: vec![ExampleLink {
                name: "simple".to_string(),
                title: None,
                document: "examples/ConsoleSink.simple".to_string(),
            }],
        }
    }

    #[test]
    fn test_class_page() {
        let class = class_view();
        let page = class_page(&View::Class(&class)).unwrap();

        assert!(page.starts_with(".. _sinks-ConsoleSink:\n\n============\nConsole Sink\n============\n"));
        assert!(page.contains("Writes records to stdout.\n\n"));
        assert!(page.contains(".. warning::\n\n    Not for production.\n"));
        assert!(page.contains("    examples/ConsoleSink.simple\n"));
        assert!(page.contains("``prefix``\n  Line prefix.\n\n  * Type: STRING\n  * Default: >\n"));
    }

    #[test]
    fn test_transformation_example_emphasis() {
        let view = TransformationExampleView {
            class_name: "acme.ToUpperCase".to_string(),
            simple_name: "ToUpperCase".to_string(),
            transformation_class: "acme.ToUpperCase".to_string(),
            example_name: "simple".to_string(),
            docs: ExampleDocs::default(),
            config_json: Some("    {}".to_string()),
            input_json: Some("    {\n      \"a\" : \"b\"\n    }".to_string()),
            output_json: Some("    {\n      \"a\" : \"B\"\n    }".to_string()),
            output_emphasize_lines: BTreeSet::from([2]),
        };
        let page = transformation_example_page(&View::TransformationExample(&view)).unwrap();

        assert!(page.contains("ToUpperCase - simple"));
        assert!(page.contains("    :caption: Output\n    :emphasize-lines: 2\n\n    {\n"));
    }

    #[test]
    fn test_index_lists_kinds_with_classes() {
        let plugin = PluginView {
            title: "Acme".to_string(),
            description: Some("Acme plugins.".to_string()),
            introduction: None,
            scan_root: "acme".to_string(),
            source_connectors: Vec::new(),
            sink_connectors: vec![class_view()],
            transformations: Vec::new(),
            converters: Vec::new(),
            config_providers: Vec::new(),
            schemas: Vec::new(),
        };
        let page = index_page(&View::Plugin(&plugin)).unwrap();

        assert!(page.contains(":caption: Sink Connectors:"));
        assert!(page.contains("    sinks/ConsoleSink\n"));
        assert!(!page.contains("Source Connectors"));
        assert!(!page.contains("Schemas"));
    }
}
