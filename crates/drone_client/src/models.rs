//! Wire types for the Drone REST API.
//!
//! Field names follow the JSON emitted and accepted by the Drone server. The Rust
//! names are chosen to read like the settings they control, so several fields
//! carry a `serde(rename)`.

use serde::{Deserialize, Deserializer, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A repository as returned by `GET /api/user/repos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRepository {
    #[serde(default)]
    pub id: i64,

    pub owner: String,

    pub name: String,

    #[serde(default)]
    pub full_name: String,

    /// Builds are triggered on push events.
    #[serde(default)]
    pub allow_push: bool,

    /// Builds are triggered on pull request events.
    #[serde(rename = "allow_pr", default)]
    pub allow_pull: bool,

    /// Builds are triggered on tag events.
    #[serde(rename = "allow_tags", default)]
    pub allow_tag: bool,

    /// Builds are triggered on deployment events.
    #[serde(rename = "allow_deploys", default)]
    pub allow_deploy: bool,

    /// Builds require approval before they run.
    #[serde(rename = "gated", default)]
    pub is_gated: bool,

    /// Builds may run privileged containers.
    #[serde(rename = "trusted", default)]
    pub is_trusted: bool,

    /// Build timeout in minutes.
    #[serde(default)]
    pub timeout: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub visibility: String,
}

impl RemoteRepository {
    /// Returns the `owner/name` form of the repository name.
    ///
    /// Falls back to joining `owner` and `name` when the server left
    /// `full_name` empty.
    pub fn qualified_name(&self) -> String {
        if self.full_name.is_empty() {
            format!("{}/{}", self.owner, self.name)
        } else {
            self.full_name.clone()
        }
    }
}

/// A repository secret.
///
/// Used both for reading (`GET .../secrets`) and writing (`POST`/`PATCH`).
/// Drone does not return secret values when listing, so `value` is usually
/// empty on secrets read from the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSecret {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    /// Images the secret is restricted to. Empty means every image.
    #[serde(rename = "image", default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,

    /// Events the secret is exposed to.
    #[serde(rename = "event", default, deserialize_with = "null_as_default")]
    pub events: Vec<String>,
}

/// Partial update for a repository, sent with `PATCH /api/repos/{owner}/{name}`.
///
/// Only fields that are `Some` are serialized, so the server keeps its current
/// value for everything left unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_push: Option<bool>,

    #[serde(rename = "allow_pr", skip_serializing_if = "Option::is_none")]
    pub allow_pull: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_tag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_deploy: Option<bool>,

    #[serde(rename = "gated", skip_serializing_if = "Option::is_none")]
    pub is_gated: Option<bool>,

    #[serde(rename = "trusted", skip_serializing_if = "Option::is_none")]
    pub is_trusted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

// Drone encodes empty lists and strings as `null` in several places.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
