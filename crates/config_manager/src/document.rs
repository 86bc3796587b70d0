//! The declarative settings document.
//!
//! A document has three optional sections layered from least to most specific:
//!
//! ```yaml
//! global:
//!   hooks:
//!     push: true
//! owners:
//!   acme:
//!     timeout: 60
//! repos:
//!   acme/widget:
//!     hooks:
//!       push: false
//!     secrets:
//!       docker_password: hunter2
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::settings::{Hooks, Secret, Settings};
use crate::Visibility;

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;

/// Settings for one repository, or a layer of defaults applied to many.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// Secrets keyed by name.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub secrets: BTreeMap<String, Secret>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Settings::is_empty"
    )]
    pub settings: Settings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Hooks::is_empty"
    )]
    pub hooks: Hooks,

    /// Build timeout in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
}

impl Repo {
    /// Returns `true` when nothing is declared at this level.
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
            && self.settings.is_empty()
            && self.visibility.is_none()
            && self.hooks.is_empty()
            && self.timeout.is_none()
    }

    /// Copies every secret's map key into its `name`.
    pub fn assign_secret_names(&mut self) {
        for (name, secret) in self.secrets.iter_mut() {
            secret.name.clone_from(name);
        }
    }
}

/// Repositories keyed by their qualified `owner/name`.
///
/// Iteration (and therefore output) is in sorted key order.
pub type Repos = BTreeMap<String, Repo>;

/// A complete settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Defaults applied to every repository.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Repo::is_empty"
    )]
    pub global: Repo,

    /// Defaults applied to every repository of an owner, keyed by owner name.
    #[serde(
        default,
        deserialize_with = "repo_map",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub owners: BTreeMap<String, Repo>,

    #[serde(
        default,
        deserialize_with = "repo_map",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub repos: Repos,
}

impl Config {
    /// Creates a document whose only populated section is `repos`.
    pub fn from_repos(repos: Repos) -> Self {
        Self {
            repos,
            ..Default::default()
        }
    }

    /// Names every secret in every section after its map key.
    pub fn assign_secret_names(&mut self) {
        self.global.assign_secret_names();
        for repo in self.owners.values_mut().chain(self.repos.values_mut()) {
            repo.assign_secret_names();
        }
    }
}

// An explicit `null` (e.g. `hooks:` with nothing under it) reads as "nothing declared".
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn repo_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, Repo>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<BTreeMap<String, Option<Repo>>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|(key, repo)| (key, repo.unwrap_or_default()))
        .collect())
}
