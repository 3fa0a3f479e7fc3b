//! Example loading and configuration builder tests

use super::*;
use crate::plugin::Registry;
use crate::DocsError;
use connect_docs_plugin::PluginKind;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, path: &str, content: &str) {
    let path = dir.path().join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn file(path: &str, kind: PluginKind) -> ExampleFile {
    ExampleFile {
        path: path.to_string(),
        kind,
        class_name: "com.example.Foo".to_string(),
    }
}

#[test]
fn test_load_json_sink_example() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "Foo/simple.json",
        r#"{
            "title": "Simple",
            "note": "Needs a running broker.",
            "config": {"topics": "users", "batch.size": 10},
            "input": {"topic": "users", "value": {"name": "alice"}}
        }"#,
    );

    let resolver = ExampleResolver::new(dir.path());
    let example = resolver
        .load(&file("Foo/simple.json", PluginKind::SinkConnector))
        .unwrap();

    assert_eq!(example.kind(), PluginKind::SinkConnector);
    assert_eq!(example.docs().title.as_deref(), Some("Simple"));
    assert_eq!(example.docs().note.as_deref(), Some("Needs a running broker."));
    assert_eq!(example.config().get("batch.size"), Some("10"));
    assert_eq!(example.records().len(), 1);
}

#[test]
fn test_load_yaml_transformation_example() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "Foo/key.yml",
        "childClass: Key\nconfig:\n  field: name\ninput:\n  topic: t\n  key:\n    name: a\n",
    );

    let example = ExampleResolver::new(dir.path())
        .load(&file("Foo/key.yml", PluginKind::Transformation))
        .unwrap();

    let Example::Transformation(example) = example else {
        panic!("expected a transformation example");
    };
    assert_eq!(example.child_class.as_deref(), Some("Key"));
    assert_eq!(example.config.get("field"), Some("name"));
    assert!(example.input.is_some());
}

#[test]
fn test_example_without_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    write(&dir, "Foo/empty.json", r#"{"title": "No config"}"#);

    let err = ExampleResolver::new(dir.path())
        .load(&file("Foo/empty.json", PluginKind::Converter))
        .unwrap_err();
    assert!(matches!(err, DocsError::ExampleFormat { file, .. } if file == "Foo/empty.json"));
}

#[test]
fn test_missing_and_unsupported_files() {
    let dir = TempDir::new().unwrap();
    write(&dir, "Foo/notes.txt", "config: {}");
    let resolver = ExampleResolver::new(dir.path());

    let missing = resolver
        .load(&file("Foo/missing.json", PluginKind::Converter))
        .unwrap_err();
    assert!(matches!(missing, DocsError::ExampleFormat { .. }));

    let unsupported = resolver
        .load(&file("Foo/notes.txt", PluginKind::Converter))
        .unwrap_err();
    assert!(unsupported.to_string().contains("unsupported example format"));
}

#[test]
fn test_non_scalar_config_value_is_rejected() {
    let dir = TempDir::new().unwrap();
    write(&dir, "Foo/nested.json", r#"{"config": {"a": {"b": 1}}}"#);

    let err = ExampleResolver::new(dir.path())
        .load(&file("Foo/nested.json", PluginKind::Converter))
        .unwrap_err();
    assert!(err.to_string().contains("expected a scalar value for 'a'"));
}

#[test]
fn test_child_class_not_found() {
    let registry = Registry::global();
    let resolver = ExampleResolver::new("unused");
    let parent = crate::builtin::class_name("ToUpperCase");

    assert!(resolver.child_class(&registry, &parent, "Key").is_ok());
    let err = resolver.child_class(&registry, &parent, "Value").unwrap_err();
    assert!(matches!(
        err,
        DocsError::ChildClassNotFound { child, parent: p } if child == "Value" && p == parent
    ));
}

#[test]
fn test_resolve_keeps_declaration_order() {
    let registry = Registry::global();
    let plugin = crate::plugin::PluginLoader::new(&registry)
        .load(&crate::plugin::ScanRoot::from(crate::builtin::NAMESPACE))
        .unwrap();
    let descriptor = plugin
        .find(&crate::builtin::class_name("ToUpperCase"))
        .unwrap();

    let files = ExampleResolver::new("test-data/examples").resolve(descriptor);
    let names: Vec<String> = files.iter().map(ExampleFile::base_name).collect();
    assert_eq!(names, vec!["value", "key"]);
    assert!(files.iter().all(|f| f.kind == PluginKind::Transformation));
}

#[test]
fn test_is_example_file() {
    assert!(is_example_file(std::path::Path::new("a/b.json")));
    assert!(is_example_file(std::path::Path::new("a/b.yaml")));
    assert!(is_example_file(std::path::Path::new("a/b.yml")));
    assert!(!is_example_file(std::path::Path::new("a/README.md")));
}

#[test]
fn test_converter_configs() {
    let config: Properties = [("schemas.enable", "true")].into_iter().collect();
    let configs = converter_configs("com.example.JsonConverter", &config);

    let pairs = |p: &Properties| {
        p.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
    };
    assert_eq!(
        pairs(&configs.key),
        vec![
            ("key.converter".to_string(), "com.example.JsonConverter".to_string()),
            ("key.converter.schemas.enable".to_string(), "true".to_string()),
        ]
    );
    assert_eq!(configs.value.get("value.converter.schemas.enable"), Some("true"));
}

#[test]
fn test_transformation_config() {
    let config: Properties = [("field", "name")].into_iter().collect();
    let result = transformation_config("ToUpperCase", "com.example.ToUpperCase$Key", &config).unwrap();

    assert_eq!(result.get("transforms"), Some("toUpperCase"));
    assert_eq!(
        result.get("transforms.toUpperCase.type"),
        Some("com.example.ToUpperCase$Key")
    );
    assert_eq!(result.get("transforms.toUpperCase.field"), Some("name"));

    assert!(transformation_config("ToUpperCase", "x", &Properties::new()).is_none());
}

#[test]
fn test_connector_config_for_sink() {
    let config: Properties = [("format", "json")].into_iter().collect();
    let transformations: Transformations = [(
        "upper",
        [("type", "com.example.ToUpperCase"), ("field", "name")]
            .into_iter()
            .collect::<Properties>(),
    )]
    .into_iter()
    .collect();

    let result = connector_config(
        &file("Foo/simple.json", PluginKind::SinkConnector),
        &config,
        Some(&transformations),
    )
    .unwrap();

    let keys: Vec<&str> = result.keys().collect();
    assert_eq!(
        keys,
        vec![
            "connector.class",
            "topics",
            "format",
            "transforms",
            "transforms.upper.type",
            "transforms.upper.field",
        ]
    );
    assert_eq!(result.get("transforms"), Some("upper"));
}

#[test]
fn test_connector_config_for_source_has_no_topics() {
    let result = connector_config(
        &file("Foo/simple.json", PluginKind::SourceConnector),
        &Properties::new(),
        None,
    )
    .unwrap();
    assert!(!result.contains_key("topics"));
    assert_eq!(result.get("connector.class"), Some("com.example.Foo"));
}

#[test]
fn test_transform_without_type() {
    let transformations: Transformations = [(
        "broken",
        [("field", "name")].into_iter().collect::<Properties>(),
    )]
    .into_iter()
    .collect();

    let err = connector_config(
        &file("Foo/simple.json", PluginKind::SourceConnector),
        &Properties::new(),
        Some(&transformations),
    )
    .unwrap_err();
    assert!(err
        .to_string()
        .contains("Transform 'broken' does not have a type property."));
}

#[test]
fn test_config_provider_worker_config() {
    let config: Properties = [("allowed.pattern", "APP_.*")].into_iter().collect();
    let result = config_provider_worker_config("com.example.EnvProvider", "env", &config);

    assert_eq!(
        result.to_properties_text(),
        "config.providers=env\n\
         config.providers.env.class=com.example.EnvProvider\n\
         config.providers.env.param.allowed.pattern=APP_.*"
    );
}
