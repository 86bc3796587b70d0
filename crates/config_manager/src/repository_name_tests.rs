use super::*;

#[test]
fn test_split_qualified_name() {
    assert_eq!(split_owner_and_repo_name("acme/widget"), ("acme", "widget"));
}

#[test]
fn test_split_name_without_owner() {
    assert_eq!(split_owner_and_repo_name("widget"), ("", "widget"));
}

#[test]
fn test_split_only_on_first_separator() {
    assert_eq!(
        split_owner_and_repo_name("group/sub/project"),
        ("group", "sub/project")
    );
}

#[test]
fn test_split_edge_cases() {
    assert_eq!(split_owner_and_repo_name(""), ("", ""));
    assert_eq!(split_owner_and_repo_name("/widget"), ("", "widget"));
    assert_eq!(split_owner_and_repo_name("acme/"), ("acme", ""));
}
