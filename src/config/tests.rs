//! Configuration tests

use super::*;
use connect_docs_generator::DocumentFormat;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config.version, parsed.version);
    assert_eq!(config.scan_roots, parsed.scan_roots);
    assert_eq!(config.output, parsed.output);
}

#[test]
fn test_config_from_file() {
    let mut config = Config::default();
    config.plugin.title = Some("Sample Plugins".to_string());
    config.generation.fail_fast = true;

    let temp_file = NamedTempFile::new().unwrap();
    config.save_to_file(temp_file.path()).unwrap();

    let loaded = Config::from_file(temp_file.path()).unwrap();
    assert_eq!(loaded.plugin.title.as_deref(), Some("Sample Plugins"));
    assert!(loaded.generation.fail_fast);
}

#[test]
fn test_minimal_config_uses_defaults() {
    let yaml = r#"
version: "1.0"
scan_roots: [com.example]
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.examples_dir, PathBuf::from("./test-data/examples"));
    assert!(config.output.wants(DocumentFormat::Rst));
    assert!(config.output.wants(DocumentFormat::Markdown));
    assert!(!config.generation.fail_fast);
    assert_eq!(config.scan_roots()[0].to_string(), "com.example");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.version = "2.0".to_string();
    assert!(config.validate().is_err());

    config.version = "1.0".to_string();
    config.scan_roots.clear();
    assert!(config.validate().is_err());

    config.scan_roots.push("  ".to_string());
    assert!(config.validate().is_err());
}

#[test]
fn test_paths_are_expanded() {
    std::env::set_var("CONNECT_DOCS_TEST_DIR", "/tmp/connect-docs");
    let mut config = Config::default();
    config.examples_dir = PathBuf::from("$CONNECT_DOCS_TEST_DIR/examples");
    config.output.base_path = PathBuf::from("$CONNECT_DOCS_TEST_DIR/docs");

    assert_eq!(
        config.examples_dir().unwrap(),
        PathBuf::from("/tmp/connect-docs/examples")
    );
    assert_eq!(
        config.output().unwrap().base_path,
        PathBuf::from("/tmp/connect-docs/docs")
    );
}
