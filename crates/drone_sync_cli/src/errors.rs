use std::io;

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the drone-sync CLI application.
#[derive(Error, Debug)]
pub enum Error {
    /// A required environment variable is unset or empty.
    ///
    /// Raised before any request is sent to the server.
    #[error("{0} not set")]
    MissingEnvironment(String),

    /// The Drone client could not be created from the server settings.
    #[error("Invalid server configuration: {0}")]
    Client(#[from] drone_client::Error),

    /// A document could not be serialized for output.
    #[error(transparent)]
    Configuration(#[from] config_manager::ConfigurationError),

    /// Loading, exporting or importing failed.
    #[error(transparent)]
    Sync(#[from] drone_sync_core::SyncError),

    /// Failed to write a document to standard output.
    #[error("Failed to write output: {0}")]
    WriteOutput(io::Error),
}
