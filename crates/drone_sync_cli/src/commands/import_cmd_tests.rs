use super::*;
use secrecy::SecretString;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOCUMENT: &str = r#"
global:
  hooks:
    push: true
owners:
  acme:
    hooks:
      push: false
repos:
  acme/widget:
    secrets:
      password: hunter2
  x/y:
    timeout: 90
"#;

fn write_document_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let file = dir.path().join(name);
    fs::write(&file, content).expect("Failed to write settings file");
    file
}

fn unreachable_server() -> Result<ServerConfig, Error> {
    panic!("dry run must not contact the server")
}

#[tokio::test]
async fn test_dry_run_prints_resolved_settings() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let args = ImportArgs {
        file: write_document_file(&dir, "drone.yml", DOCUMENT),
        dry_run: true,
        format: OutputFormat::Yaml,
    };
    let mut out = Vec::new();

    run(&args, unreachable_server, &mut out).await.unwrap();

    let expected = "\
acme/widget:
  secrets:
    password:
      value: hunter2
      events:
      - push
      - tag
  hooks:
    push: false
x/y:
  hooks:
    push: true
  timeout: 90
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[tokio::test]
async fn test_dry_run_keys_output_by_repository_name() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let args = ImportArgs {
        file: write_document_file(&dir, "drone.yml", DOCUMENT),
        dry_run: true,
        format: OutputFormat::Json,
    };
    let mut out = Vec::new();

    run(&args, unreachable_server, &mut out).await.unwrap();

    let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        printed,
        json!({
            "acme/widget": {
                "secrets": {
                    "password": { "value": "hunter2", "events": ["push", "tag"] }
                },
                "hooks": { "push": false }
            },
            "x/y": {
                "hooks": { "push": true },
                "timeout": 90
            }
        })
    );
}

#[tokio::test]
async fn test_import_without_environment_fails_before_any_request() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let args = ImportArgs {
        file: write_document_file(&dir, "drone.yml", DOCUMENT),
        dry_run: false,
        format: OutputFormat::Yaml,
    };
    let mut out = Vec::new();

    let err = run(
        &args,
        || Err(Error::MissingEnvironment("DRONE_SERVER".to_string())),
        &mut out,
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "DRONE_SERVER not set");
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_missing_file_is_reported() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let args = ImportArgs {
        file: dir.path().join("absent.yml"),
        dry_run: true,
        format: OutputFormat::Yaml,
    };
    let mut out = Vec::new();

    let err = run(&args, unreachable_server, &mut out).await.unwrap_err();

    assert!(err.to_string().contains("absent.yml"), "{err}");
}

#[tokio::test]
async fn test_import_applies_settings_to_server() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/repos/acme/widget"))
        .and(body_json(json!({ "allow_push": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "owner": "acme",
            "name": "widget"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/repos/acme/widget/secrets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/repos/acme/widget/secrets"))
        .and(body_json(json!({
            "name": "password",
            "value": "hunter2",
            "image": [],
            "event": ["push", "tag"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "password",
            "event": ["push", "tag"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp directory");
    let args = ImportArgs {
        file: write_document_file(
            &dir,
            "drone.yml",
            "repos:\n  acme/widget:\n    hooks:\n      push: false\n    secrets:\n      password: hunter2\n",
        ),
        dry_run: false,
        format: OutputFormat::Yaml,
    };
    let uri = server.uri();
    let mut out = Vec::new();

    run(
        &args,
        || {
            Ok(ServerConfig {
                server: uri,
                token: SecretString::from("test-token".to_string()),
            })
        },
        &mut out,
    )
    .await
    .unwrap();

    assert!(out.is_empty());
}
