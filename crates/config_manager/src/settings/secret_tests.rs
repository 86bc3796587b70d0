use super::*;
use std::collections::BTreeMap;

fn parse_secrets(yaml: &str) -> BTreeMap<String, Secret> {
    serde_yaml::from_str(yaml).expect("secrets should parse")
}

#[test]
fn test_bare_value_gets_default_events() {
    let secrets = parse_secrets("password: hunter2\n");

    let secret = &secrets["password"];
    assert_eq!(secret.value, "hunter2");
    assert_eq!(secret.events, vec![Event::Push, Event::Tag]);
}

#[test]
fn test_structured_value_with_events() {
    let secrets = parse_secrets(
        r#"
deploy_key:
  value: abc123
  events: [deployment, pull_request]
"#,
    );

    let secret = &secrets["deploy_key"];
    assert_eq!(secret.value, "abc123");
    assert_eq!(secret.events, vec![Event::Deployment, Event::PullRequest]);
}

#[test]
fn test_structured_value_without_events_has_no_events() {
    let secrets = parse_secrets(
        r#"
token:
  value: xyz
"#,
    );

    let secret = &secrets["token"];
    assert_eq!(secret.value, "xyz");
    assert!(secret.events.is_empty());
}

#[test]
fn test_structured_value_requires_value() {
    let result: Result<BTreeMap<String, Secret>, _> = serde_yaml::from_str(
        r#"
token:
  events: [push]
"#,
    );

    let err = result.expect_err("missing value must be rejected");
    assert!(err.to_string().contains("value"), "unexpected error: {err}");
}

#[test]
fn test_events_must_be_a_sequence() {
    let result: Result<BTreeMap<String, Secret>, _> = serde_yaml::from_str(
        r#"
token:
  value: xyz
  events: push
"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_unknown_structured_keys_are_ignored() {
    let secrets = parse_secrets(
        r#"
token:
  value: xyz
  images: [plugins/docker]
"#,
    );

    assert_eq!(secrets["token"].value, "xyz");
}

#[test]
fn test_non_string_scalars_become_bare_values() {
    let secrets = parse_secrets("port: 8080\nenabled: true\n");

    assert_eq!(secrets["port"].value, "8080");
    assert_eq!(secrets["enabled"].value, "true");
    assert_eq!(secrets["port"].events, Event::defaults());
}

#[test]
fn test_unknown_event_is_kept_verbatim() {
    let secrets = parse_secrets(
        r#"
token:
  value: xyz
  events: [cron, push]
"#,
    );

    assert_eq!(
        secrets["token"].events,
        vec![Event::Other("cron".to_string()), Event::Push]
    );
    assert_eq!(secrets["token"].events[0].as_str(), "cron");
}

#[test]
fn test_structured_json_input() {
    let secrets: BTreeMap<String, Secret> =
        serde_json::from_str(r#"{ "a": "one", "b": { "value": "two", "events": ["tag"] } }"#)
            .unwrap();

    assert_eq!(secrets["a"].events, Event::defaults());
    assert_eq!(secrets["b"].value, "two");
    assert_eq!(secrets["b"].events, vec![Event::Tag]);
}

#[test]
fn test_serialization_omits_name_and_empty_events() {
    let secret = Secret {
        name: "token".to_string(),
        value: "xyz".to_string(),
        events: Vec::new(),
    };

    assert_eq!(
        serde_json::to_value(&secret).unwrap(),
        serde_json::json!({ "value": "xyz" })
    );
}

#[test]
fn test_serialization_writes_event_names() {
    let secret = Secret::with_default_events("token", "xyz");

    assert_eq!(
        serde_json::to_value(&secret).unwrap(),
        serde_json::json!({ "value": "xyz", "events": ["push", "tag"] })
    );
}

#[test]
fn test_event_from_str_round_trips_known_names() {
    for name in ["push", "tag", "deployment", "pull_request"] {
        assert_eq!(Event::from(name).to_string(), name);
    }
}
