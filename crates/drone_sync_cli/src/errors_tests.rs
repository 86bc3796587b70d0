use super::*;

#[test]
fn test_missing_environment_message() {
    let error = Error::MissingEnvironment("DRONE_SERVER".to_string());

    assert_eq!(error.to_string(), "DRONE_SERVER not set");
}

#[test]
fn test_sync_errors_are_shown_unchanged() {
    let sync = drone_sync_core::SyncError::PatchRepository {
        repository: "acme/widget".to_string(),
        source: drone_client::Error::NotFound,
    };
    let expected = sync.to_string();

    let error: Error = sync.into();

    assert_eq!(error.to_string(), expected);
}
