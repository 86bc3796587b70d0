//! Declarative Drone repository settings.
//!
//! A settings document ([`Config`]) declares defaults at a global level, per
//! owner, and per repository. [`resolve`] layers them into the effective
//! settings of every listed repository ([`Repos`]).
//!
//! ```rust
//! use config_manager::{parse_config, resolve, DocumentFormat};
//!
//! let config = parse_config(
//!     "global:\n  timeout: 60\nrepos:\n  acme/widget:\n    hooks:\n      push: false\n",
//!     DocumentFormat::Yaml,
//! )?;
//! let repos = resolve(&config);
//!
//! assert_eq!(repos["acme/widget"].timeout, Some(60));
//! assert_eq!(repos["acme/widget"].hooks.push, Some(false));
//! # Ok::<(), config_manager::ConfigurationError>(())
//! ```

pub mod document;
pub mod errors;
pub mod hierarchy;
pub mod merger;
pub mod parsers;
pub mod repository_name;
pub mod settings;
pub mod visibility;

pub use document::{Config, Repo, Repos};
pub use errors::{ConfigurationError, ConfigurationResult};
pub use hierarchy::resolve;
pub use merger::ConfigurationMerger;
pub use parsers::{parse_config, to_document, DocumentFormat};
pub use repository_name::split_owner_and_repo_name;
pub use settings::{Event, Hooks, Secret, Settings};
pub use visibility::Visibility;
