//! Conversions between the Drone wire shapes and the declarative model.

use std::collections::BTreeMap;

use config_manager::{Event, Hooks, Repo, Secret, Settings};
use drone_client::{RemoteRepository, RemoteSecret, RepositoryPatch};

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;

/// Builds the declarative view of a remote repository and its secrets.
///
/// Every flag the server reports is recorded as set. Visibility is never
/// recorded, so an exported document does not pin it on a later import.
pub fn repo_from_remote(remote: &RemoteRepository, secrets: &[RemoteSecret]) -> Repo {
    Repo {
        secrets: secrets
            .iter()
            .map(|secret| (secret.name.clone(), secret_from_remote(secret)))
            .collect::<BTreeMap<_, _>>(),
        settings: Settings {
            protected: Some(remote.is_gated),
            trusted: Some(remote.is_trusted),
        },
        visibility: None,
        hooks: Hooks {
            push: Some(remote.allow_push),
            pull_request: Some(remote.allow_pull),
            tag: Some(remote.allow_tag),
            deployment: Some(remote.allow_deploy),
        },
        timeout: Some(remote.timeout),
    }
}

pub fn secret_from_remote(remote: &RemoteSecret) -> Secret {
    Secret {
        name: remote.name.clone(),
        value: remote.value.clone(),
        events: remote
            .events
            .iter()
            .map(|event| Event::from(event.as_str()))
            .collect(),
    }
}

/// Builds the repository patch for a resolved repository. Unset fields stay
/// unset so the server keeps its current value.
pub fn patch_from_repo(repo: &Repo) -> RepositoryPatch {
    RepositoryPatch {
        allow_push: repo.hooks.push,
        allow_pull: repo.hooks.pull_request,
        allow_tag: repo.hooks.tag,
        allow_deploy: repo.hooks.deployment,
        is_gated: repo.settings.protected,
        is_trusted: repo.settings.trusted,
        timeout: repo.timeout,
        visibility: repo.visibility.map(|v| v.as_str().to_string()),
    }
}

/// Builds the wire form of a declared secret. `name` is the map key the
/// secret was declared under.
pub fn secret_to_remote(name: &str, secret: &Secret) -> RemoteSecret {
    RemoteSecret {
        name: name.to_string(),
        value: secret.value.clone(),
        images: Vec::new(),
        events: secret
            .events
            .iter()
            .map(|event| event.as_str().to_string())
            .collect(),
    }
}
