//! Repository trust and protection flags.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// Elevated-permission flags of a repository.
///
/// `protected` maps to Drone's gated builds (a build waits for approval),
/// `trusted` allows privileged containers and host volumes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protected: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted: Option<bool>,
}

impl Settings {
    /// Returns `true` when neither flag is declared.
    pub fn is_empty(&self) -> bool {
        self.protected.is_none() && self.trusted.is_none()
    }

    /// Returns `self` with every flag declared in `other` taking precedence.
    pub fn overridden_by(&self, other: &Settings) -> Settings {
        Settings {
            protected: other.protected.or(self.protected),
            trusted: other.trusted.or(self.trusted),
        }
    }
}
