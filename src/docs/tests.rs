//! Example rendering and pipeline tests

use super::*;
use crate::builtin;
use crate::plugin::{PluginLoader, ScanRoot};
use crate::DocsError;
use connect_docs_generator::MemorySink;
use connect_docs_plugin::{ConfigDef, ConfigKey, ConfigType, Documentation, Importance};
use std::fs;
use tempfile::TempDir;

const EXAMPLES: &str = "test-data/examples";

fn builtin_plugin() -> Plugin {
    PluginLoader::new(&Registry::global())
        .load(&ScanRoot::from(builtin::NAMESPACE))
        .unwrap()
}

fn descriptor(simple: &str) -> PluginClassDescriptor {
    builtin_plugin()
        .find(&builtin::class_name(simple))
        .cloned()
        .unwrap()
}

fn render(descriptor: &PluginClassDescriptor, examples_dir: &str) -> Vec<Result<RenderedExample, DocsError>> {
    let registry = Registry::global();
    let resolver = ExampleResolver::new(examples_dir);
    let templates = TemplateRegistry::builtin();
    let renderer = ExampleRenderer::new(&registry, &resolver, &templates);

    resolver
        .resolve(descriptor)
        .iter()
        .map(|file| renderer.render(descriptor, file))
        .collect()
}

#[test]
fn test_transformation_output_emphasizes_changed_line() {
    let rendered = render(&descriptor("ToUpperCase"), EXAMPLES);
    let value = rendered[0].as_ref().unwrap();

    assert_eq!(
        value.path,
        PathBuf::from("transformations/examples/ToUpperCase.value.rst")
    );
    assert_eq!(value.link.document, "examples/ToUpperCase.value");
    assert_eq!(value.link.title.as_deref(), Some("Upper case a value field"));
    assert!(value.content.contains("\"transforms\": \"toUpperCase\""));
    assert!(value.content.contains("    :emphasize-lines: 7\n"));
    assert!(value.content.contains("\"name\": \"ALICE\""));
}

#[test]
fn test_transformation_runs_selected_child_class() {
    let rendered = render(&descriptor("ToUpperCase"), EXAMPLES);
    let key = rendered[1].as_ref().unwrap();

    assert!(key
        .content
        .contains("\"transforms.toUpperCase.type\": \"connect_docs.builtin.ToUpperCase$Key\""));
    assert!(key.content.contains("\"region\": \"EMEA\""));
    assert!(key.content.contains("\"name\": \"alice\""));
}

#[test]
fn test_sink_example_collects_schemas() {
    let rendered = render(&descriptor("ConsoleSinkConnector"), EXAMPLES);
    let simple = rendered[0].as_ref().unwrap();

    assert_eq!(simple.path, PathBuf::from("sinks/examples/ConsoleSinkConnector.simple.rst"));
    assert!(simple.content.contains("\"topics\": \"<required setting>\""));
    assert!(simple.content.contains("\"transforms.upper.type\""));
    assert_eq!(simple.schemas.len(), 1);
    assert_eq!(simple.schemas[0].name.as_deref(), Some("connect_docs.examples.User"));
}

#[test]
fn test_converter_example_has_worker_properties() {
    let rendered = render(&descriptor("JsonStringConverter"), EXAMPLES);
    let content = &rendered[0].as_ref().unwrap().content;

    assert!(content.contains("    key.converter=connect_docs.builtin.JsonStringConverter\n"));
    assert!(content.contains("    value.converter.schemas.enable=true"));
}

#[test]
fn test_invalid_example_reports_every_error() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("SequenceSourceConnector")).unwrap();
    fs::write(
        dir.path().join("SequenceSourceConnector/simple.yaml"),
        "config:\n  start: -1\n  batch.size: 0\n",
    )
    .unwrap();

    let rendered = render(&descriptor("SequenceSourceConnector"), dir.path().to_str().unwrap());
    let err = rendered.into_iter().next().unwrap().unwrap_err();

    let DocsError::ConfigValidation { example, errors } = &err else {
        panic!("expected a validation error, got {err}");
    };
    assert_eq!(example, "SequenceSourceConnector/simple.yaml");
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().any(|e| e.starts_with("topic: ")));
    assert!(errors.iter().any(|e| e.starts_with("start: ")));
    assert!(errors.iter().any(|e| e.starts_with("batch.size: ")));
    assert!(err
        .to_string()
        .starts_with("Example validation was not successful for SequenceSourceConnector/simple.yaml.\n"));
}

#[test]
fn test_connector_without_configuration() {
    let mut descriptor = descriptor("ConsoleSinkConnector");
    descriptor.configuration = None;

    let rendered = render(&descriptor, EXAMPLES);
    assert!(matches!(
        rendered[0],
        Err(DocsError::MissingConfiguration { kind: PluginKind::SinkConnector, .. })
    ));
}

#[test]
fn test_class_view_without_examples() {
    let descriptor = PluginClassDescriptor {
        qualified_name: "com.example.Plain".to_string(),
        simple_name: "Plain".to_string(),
        kind: PluginKind::Converter,
        version: "1.0".to_string(),
        documentation: Documentation::titled("Plain"),
        configuration: Some(ConfigDef::new().define(ConfigKey::new(
            "a",
            ConfigType::String,
            Importance::High,
            "A.",
        ))),
        examples: Vec::new(),
    };

    let view = class_view(&descriptor);
    assert_eq!(view.title(), "Plain");
    assert_eq!(view.config.as_ref().map(Vec::len), Some(1));
    assert!(view.examples.is_empty());
}

#[tokio::test]
async fn test_failures_are_collected_unless_fail_fast() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.examples_dir = dir.path().to_path_buf();
    config.output.base_path = dir.path().join("docs");

    let registry = Registry::global();
    let templates = TemplateRegistry::builtin();
    let plugins = vec![Arc::new(builtin_plugin())];

    let sink = MemorySink::new();
    let result = DocsPipeline::new(&config, &registry, &templates)
        .run(&plugins, &sink)
        .await
        .unwrap();
    assert_eq!(result.failures.len(), 6);
    assert_eq!(result.statistics.examples_rendered, 0);
    assert_eq!(result.statistics.classes_documented, 6);
    assert!(sink.get(&dir.path().join("docs/index.rst")).await.is_some());

    config.generation.fail_fast = true;
    let err = DocsPipeline::new(&config, &registry, &templates)
        .run(&plugins, &MemorySink::new())
        .await
        .unwrap_err();
    assert!(err.downcast_ref::<DocsError>().is_some());
}
