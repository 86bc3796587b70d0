//! Layer merging.
//!
//! Two layers combine field by field, with the more specific layer (`target`)
//! winning wherever it declares a value:
//!
//! - each hook switch, each settings flag, `timeout` and `visibility` take the
//!   target's value when set, otherwise the base's
//! - secrets are the base map with every target entry inserted over it; a secret
//!   is replaced as a whole, never field by field
//!
//! # Examples
//!
//! ```rust
//! use config_manager::{ConfigurationMerger, Repo};
//!
//! let merger = ConfigurationMerger::new();
//! let base = Repo { timeout: Some(60), ..Default::default() };
//! let target = Repo { timeout: Some(90), ..Default::default() };
//!
//! assert_eq!(merger.merge(&base, &target).timeout, Some(90));
//! ```

use std::collections::BTreeMap;

use crate::document::Repo;
use crate::settings::Secret;

#[cfg(test)]
#[path = "merger_tests.rs"]
mod tests;

/// Stateless merging engine for settings layers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationMerger;

impl ConfigurationMerger {
    pub fn new() -> Self {
        Self
    }

    /// Overlays `target` on `base` and returns the combined layer.
    ///
    /// Neither input is modified.
    pub fn merge(&self, base: &Repo, target: &Repo) -> Repo {
        Repo {
            secrets: Self::merge_secrets(&base.secrets, &target.secrets),
            settings: base.settings.overridden_by(&target.settings),
            visibility: target.visibility.or(base.visibility),
            hooks: base.hooks.overridden_by(&target.hooks),
            timeout: target.timeout.or(base.timeout),
        }
    }

    fn merge_secrets(
        base: &BTreeMap<String, Secret>,
        target: &BTreeMap<String, Secret>,
    ) -> BTreeMap<String, Secret> {
        let mut merged = base.clone();
        merged.extend(
            target
                .iter()
                .map(|(name, secret)| (name.clone(), secret.clone())),
        );
        merged
    }
}
