//! Config schema tests

use super::*;
use rstest::rstest;

fn schema() -> ConfigDef {
    ConfigDef::new()
        .define(ConfigKey::new(
            "topic",
            ConfigType::String,
            Importance::High,
            "Topic to write to.",
        ))
        .define(
            ConfigKey::new("batch.size", ConfigType::Int, Importance::Medium, "Batch size.")
                .default_value("100")
                .validator(Range::between(1, 1000)),
        )
        .define(
            ConfigKey::new("enabled", ConfigType::Boolean, Importance::Low, "Enable.")
                .default_value("true"),
        )
        .define(
            ConfigKey::new("endpoints", ConfigType::List, Importance::Low, "Endpoints.")
                .default_null()
                .validator(ValidUrl),
        )
}

#[test]
fn test_validate_accepts_complete_config() {
    let reports = schema().validate([("topic", "events"), ("batch.size", "50")]);

    assert_eq!(reports.len(), 4);
    assert!(reports.iter().all(|r| r.error_messages.is_empty()));
    assert_eq!(reports[1].value, Some(ConfigValue::Int(50)));
    assert_eq!(reports[2].value, Some(ConfigValue::Boolean(true)));
    assert_eq!(reports[3].value, None);
}

#[test]
fn test_validate_reports_missing_required() {
    let reports = schema().validate(std::iter::empty());

    let topic = &reports[0];
    assert_eq!(topic.name, "topic");
    assert_eq!(
        topic.error_messages,
        vec!["Missing required configuration \"topic\" which has no default value.".to_string()]
    );
}

#[test]
fn test_validate_attributes_each_error_to_its_key() {
    let reports = schema().validate([
        ("topic", "events"),
        ("batch.size", "5000"),
        ("enabled", "maybe"),
        ("endpoints", "http://a.example.com,not a url"),
    ]);

    let errors: Vec<(&str, usize)> = reports
        .iter()
        .map(|r| (r.name.as_str(), r.error_messages.len()))
        .collect();
    assert_eq!(
        errors,
        vec![("topic", 0), ("batch.size", 1), ("enabled", 1), ("endpoints", 1)]
    );
    assert_eq!(
        reports[1].error_messages[0],
        "Invalid value 5000 for configuration batch.size: Value must be no more than 1000"
    );
    assert_eq!(
        reports[3].error_messages[0],
        "Invalid value not a url for configuration endpoints: Could not parse to URL."
    );
}

#[test]
fn test_unknown_keys_follow_policy() {
    let props = [("topic", "events"), ("typo.key", "x")];

    let ignored = schema().validate(props);
    assert!(ignored.iter().all(|r| r.error_messages.is_empty()));

    let rejected = schema()
        .unknown_keys(UnknownKeyPolicy::Reject)
        .validate(props);
    let unknown = rejected.last().unwrap();
    assert_eq!(unknown.name, "typo.key");
    assert_eq!(unknown.error_messages, vec!["Unknown configuration 'typo.key'"]);
}

#[rstest]
#[case(ConfigType::Boolean, "TRUE", ConfigValue::Boolean(true))]
#[case(ConfigType::Int, " 42 ", ConfigValue::Int(42))]
#[case(ConfigType::Long, "-7", ConfigValue::Long(-7))]
#[case(ConfigType::Double, "0.5", ConfigValue::Double(0.5))]
#[case(ConfigType::List, "a, b,c", ConfigValue::List(vec!["a".into(), "b".into(), "c".into()]))]
#[case(ConfigType::List, "", ConfigValue::List(Vec::new()))]
#[case(ConfigType::Class, "com.example.Foo", ConfigValue::Class("com.example.Foo".into()))]
fn test_parse_types(#[case] config_type: ConfigType, #[case] raw: &str, #[case] expected: ConfigValue) {
    assert_eq!(ConfigValue::parse("key", config_type, raw).unwrap(), expected);
}

#[rstest]
#[case(ConfigType::Boolean, "yes", "Expected value to be either true or false")]
#[case(ConfigType::Int, "ten", "Not a number of type INT")]
#[case(ConfigType::Short, "70000", "Not a number of type SHORT")]
fn test_parse_errors(#[case] config_type: ConfigType, #[case] raw: &str, #[case] reason: &str) {
    let err = ConfigValue::parse("key", config_type, raw).unwrap_err();
    assert_eq!(err.name, "key");
    assert!(err.message.ends_with(reason), "{}", err.message);
}

#[test]
fn test_password_is_hidden() {
    let value = ConfigValue::parse("secret", ConfigType::Password, "hunter2").unwrap();
    assert_eq!(value.to_string(), "[hidden]");
}

#[test]
fn test_parse_returns_typed_values() {
    let parsed = schema().parse([("topic", "events")]).unwrap();
    assert_eq!(parsed.get_string("topic"), Some("events"));
    assert_eq!(parsed.get_long("batch.size"), Some(100));
    assert_eq!(parsed.get_bool("enabled"), Some(true));
    assert!(parsed.get("endpoints").is_none());

    let err = schema().parse([("batch.size", "0")]).unwrap_err();
    assert_eq!(err.name, "topic");
}

#[test]
fn test_redefining_a_key_replaces_it() {
    let def = schema().define(
        ConfigKey::new("topic", ConfigType::String, Importance::Low, "Replaced.").default_value("t"),
    );
    assert_eq!(def.keys().len(), 4);
    assert_eq!(def.keys()[0].documentation, "Replaced.");
}

#[test]
fn test_sorted_keys_puts_required_first() {
    let binding = schema();
    let names: Vec<&str> = binding.sorted_keys().iter().map(|k| k.name.as_str()).collect();
    assert_eq!(names, vec!["topic", "batch.size", "enabled", "endpoints"]);
}

#[test]
fn test_valid_url_accepts_string_and_list() {
    let single = ConfigValue::String("https://example.com/path".into());
    assert!(ValidUrl.ensure_valid("url", &single).is_ok());

    let list = ConfigValue::List(vec!["http://a".into(), "ftp://b/c".into()]);
    assert!(ValidUrl.ensure_valid("url", &list).is_ok());

    let bad_list = ConfigValue::List(vec!["http://a".into(), "relative/path".into()]);
    let err = ValidUrl.ensure_valid("url", &bad_list).unwrap_err();
    assert!(err.message.ends_with("Could not parse to URL."));

    let err = ValidUrl.ensure_valid("url", &ConfigValue::Int(1)).unwrap_err();
    assert!(err.message.ends_with("Must be a string or list."));
}

#[test]
fn test_pattern_and_valid_string() {
    let pattern = Pattern::new("[a-z]+").unwrap();
    assert!(pattern.ensure_valid("p", &ConfigValue::String("abc".into())).is_ok());
    assert!(pattern.ensure_valid("p", &ConfigValue::String("abc1".into())).is_err());

    let one_of = ValidString::one_of(["json", "avro"]).case_insensitive();
    assert!(one_of.ensure_valid("f", &ConfigValue::String("JSON".into())).is_ok());
    let err = one_of.ensure_valid("f", &ConfigValue::String("xml".into())).unwrap_err();
    assert!(err.message.ends_with("String must be one of: json, avro"));

    assert!(NonEmptyString.ensure_valid("n", &ConfigValue::String("  ".into())).is_err());
}

#[test]
fn test_absent_null_default_skips_validator() {
    let reports = schema().validate([("topic", "t")]);
    let endpoints = reports.iter().find(|r| r.name == "endpoints").unwrap();
    assert!(endpoints.value.is_none());
    assert!(endpoints.error_messages.is_empty());

    let reports = schema().validate([("topic", "t"), ("endpoints", "relative/path")]);
    let endpoints = reports.iter().find(|r| r.name == "endpoints").unwrap();
    assert!(endpoints.error_messages[0].ends_with("Could not parse to URL."));
}
