//! Repository visibility.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;

/// Repository exposure level.
///
/// Serializes to/from lowercase strings: "public", "private", "internal".
/// Drone only honours `internal` on servers backed by an SCM that supports it.
///
/// # Examples
///
/// ```rust
/// use config_manager::Visibility;
///
/// let visibility: Visibility = "private".parse().unwrap();
/// assert_eq!(visibility, Visibility::Private);
/// assert_eq!(visibility.as_str(), "private");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible to everyone
    Public,

    /// Visible only to repository collaborators
    Private,

    /// Visible to every authenticated user of the server
    Internal,
}

impl Visibility {
    /// Convert visibility to the string Drone expects in a repository patch.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "internal" => Ok(Self::Internal),
            other => Err(format!("unknown visibility '{other}'")),
        }
    }
}
