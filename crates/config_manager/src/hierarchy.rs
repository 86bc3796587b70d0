//! Three-level settings resolution.
//!
//! Every repository in the `repos` section is resolved against its owner's
//! layer, which is itself resolved against `global`:
//!
//! 1. `owner[o] = merge(global, owners[o])` for every declared owner
//! 2. `repo[k] = merge(owner[split(k).0], repos[k])` when that owner is
//!    declared, otherwise `merge(global, repos[k])`
//!
//! Only repositories listed under `repos` appear in the result. Owner and global
//! layers never create entries of their own.

use std::collections::BTreeMap;

use tracing::debug;

use crate::document::{Config, Repo, Repos};
use crate::merger::ConfigurationMerger;
use crate::repository_name::split_owner_and_repo_name;

#[cfg(test)]
#[path = "hierarchy_tests.rs"]
mod tests;

/// Resolves `config` into the effective settings of each listed repository.
pub fn resolve(config: &Config) -> Repos {
    let merger = ConfigurationMerger::new();

    let owners: BTreeMap<&str, Repo> = config
        .owners
        .iter()
        .map(|(owner, layer)| (owner.as_str(), merger.merge(&config.global, layer)))
        .collect();

    config
        .repos
        .iter()
        .map(|(full_name, layer)| {
            let (owner, _) = split_owner_and_repo_name(full_name);
            let base = match owners.get(owner) {
                Some(owner_layer) => owner_layer,
                None => &config.global,
            };
            debug!(
                repository = full_name.as_str(),
                owner_layer = owners.contains_key(owner),
                "Resolved repository settings"
            );
            (full_name.clone(), merger.merge(base, layer))
        })
        .collect()
}

impl Config {
    /// See [`resolve`].
    pub fn resolve(&self) -> Repos {
        resolve(self)
    }
}
