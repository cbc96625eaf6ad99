use plist_domain::config::{ApiConfig, CatalogConfig, ServerConfig};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 3000);
    assert!(server.address.is_unspecified());
    assert!(server.ssl.is_none());

    assert!(CatalogConfig::default().seed.is_none());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "catalog": { "seed": "data/data.json" }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.catalog.seed, Some(PathBuf::from("data/data.json")));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("empty config deserialize");
    assert_eq!(cfg.server.port, 3000);
    assert!(cfg.catalog.seed.is_none());
}

#[test]
fn mutation_through_deref_does_not_leak_into_clones() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 4000;

    assert_eq!(original.server.port, 3000);
    assert_eq!(changed.server.port, 4000);
}
