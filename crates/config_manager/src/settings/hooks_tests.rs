use super::*;

#[test]
fn test_default_hooks_are_empty() {
    assert!(Hooks::default().is_empty());
    assert!(!Hooks {
        tag: Some(false),
        ..Default::default()
    }
    .is_empty());
}

#[test]
fn test_overridden_by_prefers_declared_values() {
    let base = Hooks {
        push: Some(true),
        pull_request: Some(true),
        tag: None,
        deployment: Some(true),
    };
    let target = Hooks {
        push: Some(false),
        pull_request: None,
        tag: Some(true),
        deployment: None,
    };

    let merged = base.overridden_by(&target);

    assert_eq!(merged.push, Some(false));
    assert_eq!(merged.pull_request, Some(true));
    assert_eq!(merged.tag, Some(true));
    assert_eq!(merged.deployment, Some(true));
}

#[test]
fn test_unset_switches_are_not_serialized() {
    let hooks = Hooks {
        pull_request: Some(false),
        ..Default::default()
    };

    assert_eq!(
        serde_json::to_value(hooks).unwrap(),
        serde_json::json!({ "pullrequest": false })
    );
}

#[test]
fn test_missing_switches_deserialize_as_unset() {
    let hooks: Hooks = serde_json::from_str(r#"{ "push": false }"#).unwrap();

    assert_eq!(hooks.push, Some(false));
    assert_eq!(hooks.pull_request, None);
    assert_eq!(hooks.tag, None);
    assert_eq!(hooks.deployment, None);
}
