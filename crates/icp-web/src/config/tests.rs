use std::io::Write;

use super::*;
use pretty_assertions::assert_eq;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.classifier, ClassifierConfig::default());
    assert_eq!(config.logging.filter, "info,icp_web=info,icp_classifier=info");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("icp.toml")).unwrap();
    assert!(config.source.is_none());
    assert_eq!(config.server.port, 8000);
}

#[test]
fn test_partial_file_keeps_remaining_defaults() {
    let file = write_config(
        r#"
        [server]
        port = 9100

        [classifier]
        fast_path = false
        "#,
    );
    let config = Config::load_from(file.path()).unwrap();
    assert_eq!(config.source.as_deref(), Some(file.path()));
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9100);
    assert!(!config.classifier.fast_path);
    assert_eq!(config.classifier.result_cache_size, 10_000);
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("[server\nport = ");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_env_overrides() {
    let mut config = Config::default();
    config
        .apply_overrides(|key| match key {
            "ICP_HOST" => Some("127.0.0.1".to_string()),
            "ICP_PORT" => Some("9000".to_string()),
            _ => None,
        })
        .unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
}

#[test]
fn test_invalid_port_override_is_rejected() {
    let mut config = Config::default();
    let result = config.apply_overrides(|key| (key == "ICP_PORT").then(|| "eighty".to_string()));
    assert!(result.is_err());
    assert_eq!(config.server.port, 8000);
}
