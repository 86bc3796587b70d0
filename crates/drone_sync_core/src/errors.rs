//! Error types for synchronization runs.

use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that stop an export, an import, or a document load.
///
/// Failures during an import name the repository (and secret) being
/// processed. Export failures are passed through unchanged.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Failed to read settings file '{}': {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to process settings template: {0}")]
    Template(#[from] template_engine::Error),

    #[error(transparent)]
    Configuration(#[from] config_manager::ConfigurationError),

    #[error(transparent)]
    Remote(#[from] drone_client::Error),

    #[error("Failed to update repository {repository}: {source}")]
    PatchRepository {
        repository: String,
        #[source]
        source: drone_client::Error,
    },

    #[error("Failed to list secrets of repository {repository}: {source}")]
    ListSecrets {
        repository: String,
        #[source]
        source: drone_client::Error,
    },

    #[error("Failed to create secret {secret} in repository {repository}: {source}")]
    CreateSecret {
        repository: String,
        secret: String,
        #[source]
        source: drone_client::Error,
    },

    #[error("Failed to update secret {secret} in repository {repository}: {source}")]
    UpdateSecret {
        repository: String,
        secret: String,
        #[source]
        source: drone_client::Error,
    },
}

/// Result alias for synchronization operations.
pub type SyncResult<T> = Result<T, SyncError>;
