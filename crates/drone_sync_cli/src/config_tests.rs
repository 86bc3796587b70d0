use super::*;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| values.get(name).cloned()
}

#[test]
fn test_from_lookup_reads_both_variables() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("DRONE_SERVER", "https://drone.example.com"),
        ("DRONE_TOKEN", "secret-token"),
    ]))
    .unwrap();

    assert_eq!(config.server, "https://drone.example.com");
    assert_eq!(config.token.expose_secret(), "secret-token");
}

#[test]
fn test_missing_server_is_reported_first() {
    let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();

    assert_eq!(err.to_string(), "DRONE_SERVER not set");
}

#[test]
fn test_missing_token_is_reported() {
    let err = ServerConfig::from_lookup(lookup_from(&[(
        "DRONE_SERVER",
        "https://drone.example.com",
    )]))
    .unwrap_err();

    assert!(matches!(err, Error::MissingEnvironment(ref name) if name == "DRONE_TOKEN"));
}

#[test]
fn test_empty_values_count_as_missing() {
    let err = ServerConfig::from_lookup(lookup_from(&[
        ("DRONE_SERVER", "https://drone.example.com"),
        ("DRONE_TOKEN", ""),
    ]))
    .unwrap_err();

    assert_eq!(err.to_string(), "DRONE_TOKEN not set");
}

#[test]
fn test_token_is_not_shown_in_debug_output() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("DRONE_SERVER", "https://drone.example.com"),
        ("DRONE_TOKEN", "secret-token"),
    ]))
    .unwrap();

    assert!(!format!("{config:?}").contains("secret-token"));
}

#[test]
fn test_connect_rejects_invalid_server() {
    let config = ServerConfig {
        server: "not a url".to_string(),
        token: SecretString::from("t".to_string()),
    };

    assert!(matches!(config.connect(), Err(Error::Client(_))));
}

#[test]
#[serial]
fn test_from_env_reads_process_environment() {
    std::env::set_var("DRONE_SERVER", "https://drone.example.com");
    std::env::set_var("DRONE_TOKEN", "env-token");

    let result = ServerConfig::from_env();

    std::env::remove_var("DRONE_SERVER");
    std::env::remove_var("DRONE_TOKEN");
    assert_eq!(result.unwrap().server, "https://drone.example.com");
}

#[test]
#[serial]
fn test_from_env_fails_without_environment() {
    std::env::remove_var("DRONE_SERVER");
    std::env::remove_var("DRONE_TOKEN");

    assert!(matches!(
        ServerConfig::from_env(),
        Err(Error::MissingEnvironment(_))
    ));
}
