//! Static configuration source tests

use cfm_application::ports::{ConfigSource, ConfigSourceExt, StaticConfigSource};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct Vault {
    url: String,
    retries: u32,
}

#[test]
fn test_dotted_keys_create_nested_objects() {
    let config = StaticConfigSource::new()
        .with("vault.url", "http://localhost:8200")
        .with("vault.retries", 3);

    assert_eq!(
        config.value("vault"),
        Some(json!({"url": "http://localhost:8200", "retries": 3}))
    );
    assert!(config.contains("vault.url"));
    assert!(!config.contains("vault.token"));
    assert!(!config.contains("vault.url.host"));
}

#[test]
fn test_typed_accessors_coerce_strings() {
    let config = StaticConfigSource::from_value(json!({
        "feature": {"enabled": "true", "limit": "42"},
        "port": 8080,
    }));

    assert_eq!(config.get_bool("feature.enabled"), Some(true));
    assert_eq!(config.get_i64("feature.limit"), Some(42));
    assert_eq!(config.get_string("port").as_deref(), Some("8080"));
    assert_eq!(config.get_bool("port"), None);
}

#[test]
fn test_set_replaces_scalar_intermediate() {
    let mut config = StaticConfigSource::new().with("db", "sqlite");
    config.set("db.path", "/tmp/cfm.db");

    assert_eq!(config.get_string("db.path").as_deref(), Some("/tmp/cfm.db"));
}

#[test]
fn test_extract_struct() {
    let config = StaticConfigSource::new()
        .with("vault.url", "http://vault")
        .with("vault.retries", 5);

    let vault: Option<Vault> = config.extract("vault").expect("valid vault section");
    assert_eq!(
        vault,
        Some(Vault {
            url: "http://vault".into(),
            retries: 5,
        })
    );

    let missing: Option<Vault> = config.extract("other").expect("absent is not an error");
    assert!(missing.is_none());
}

#[test]
fn test_extract_invalid_value_is_configuration_error() {
    let config = StaticConfigSource::new().with("vault.retries", "many");
    let err = config.extract::<u32>("vault.retries").unwrap_err();
    assert!(err.to_string().contains("vault.retries"));
}

#[test]
fn test_non_object_root_is_empty() {
    let config = StaticConfigSource::from_value(json!([1, 2, 3]));
    assert!(config.value("0").is_none());
}
