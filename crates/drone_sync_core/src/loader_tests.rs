use super::*;
use serial_test::serial;
use std::io::Write;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
#[serial]
fn test_load_yaml_with_environment_secret() {
    std::env::set_var("DRONE_SYNC_LOADER_PASSWORD", "hunter2");
    let file = write_temp(
        ".yml",
        "repos:\n  acme/widget:\n    secrets:\n      password: '{{env \"DRONE_SYNC_LOADER_PASSWORD\"}}'\n",
    );

    let config = load_config(file.path()).unwrap();

    std::env::remove_var("DRONE_SYNC_LOADER_PASSWORD");
    let secret = &config.repos["acme/widget"].secrets["password"];
    assert_eq!(secret.name, "password");
    assert_eq!(secret.value, "hunter2");
}

#[test]
#[serial]
fn test_missing_environment_variable_gives_empty_value() {
    std::env::remove_var("DRONE_SYNC_LOADER_MISSING");
    let file = write_temp(
        ".yaml",
        "repos:\n  acme/widget:\n    secrets:\n      token: '{{env \"DRONE_SYNC_LOADER_MISSING\"}}'\n",
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.repos["acme/widget"].secrets["token"].value, "");
}

#[test]
fn test_load_json_by_extension() {
    let file = write_temp(".json", r#"{ "repos": { "acme/widget": { "timeout": 15 } } }"#);

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.repos["acme/widget"].timeout, Some(15));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yml");

    let err = load_config(&path).unwrap_err();

    match err {
        SyncError::ReadFile { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_directive_is_a_template_error() {
    let result = parse_document("value: {{env \"X\"\n", DocumentFormat::Yaml);

    assert!(matches!(result, Err(SyncError::Template(_))));
}

#[test]
fn test_invalid_document_is_a_configuration_error() {
    let result = parse_document(
        "repos:\n  acme/widget:\n    secrets:\n      token:\n        events: [push]\n",
        DocumentFormat::Yaml,
    );

    assert!(matches!(result, Err(SyncError::Configuration(_))));
}
