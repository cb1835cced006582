use shub_domain::config::{AppConfig, ServerConfig, SiteConfig, StorageConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4180);
    assert!(server.ssl.is_none());

    let site = SiteConfig::default();
    assert_eq!(site.app_name, "Sunlight Hub");
    assert!(!site.support_email.is_empty());

    let storage = StorageConfig::default();
    assert_eq!(storage.static_dir, std::path::PathBuf::from("public"));
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "site": { "app_name": "Acme Corp", "tagline": "t", "support_email": "help@acme.test" },
        "storage": { "data_dir": "/tmp/data", "static_dir": "/tmp/static" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.site.app_name, "Acme Corp");
    assert_eq!(cfg.storage.static_dir, std::path::PathBuf::from("/tmp/static"));
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let raw = json!({
        "site": { "app_name": "Acme Inc" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.site.app_name, "Acme Inc");
    assert_eq!(cfg.server.port, 4180);
    assert_eq!(cfg.site.support_email, SiteConfig::default().support_email);
}
