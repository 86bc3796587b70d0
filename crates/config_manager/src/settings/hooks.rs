//! Build trigger switches.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "hooks_tests.rs"]
mod tests;

/// Per-event build trigger switches for a repository.
///
/// # YAML Format
///
/// ```yaml
/// hooks:
///   push: true
///   pullrequest: false
///   tag: true
///   deployment: false
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hooks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push: Option<bool>,

    #[serde(
        rename = "pullrequest",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub pull_request: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<bool>,
}

impl Hooks {
    /// Returns `true` when no switch is declared.
    pub fn is_empty(&self) -> bool {
        self.push.is_none()
            && self.pull_request.is_none()
            && self.tag.is_none()
            && self.deployment.is_none()
    }

    /// Returns `self` with every switch declared in `other` taking precedence.
    pub fn overridden_by(&self, other: &Hooks) -> Hooks {
        Hooks {
            push: other.push.or(self.push),
            pull_request: other.pull_request.or(self.pull_request),
            tag: other.tag.or(self.tag),
            deployment: other.deployment.or(self.deployment),
        }
    }
}
