//! Error types for Drone client operations.
//!
//! This module defines the error types that can occur when talking to the Drone
//! REST API through the drone_client crate.

use reqwest::StatusCode;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during Drone client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use drone_client::{DroneApi, Error};
///
/// match client.list_repositories().await {
///     Ok(repos) => println!("Found {} repositories", repos.len()),
///     Err(Error::Unauthorized) => eprintln!("Check DRONE_TOKEN"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The Drone API answered with a non-success status code that has no
    /// more specific variant.
    #[error("API request failed with status {status}: {message}")]
    ApiError {
        /// HTTP status code returned by the server
        status: u16,
        /// Response body, usually a short message from Drone
        message: String,
    },

    /// Error deserializing the response from Drone.
    ///
    /// This usually means the server speaks a different API version than the
    /// one this client was written against.
    #[error("Failed to deserialize Drone response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The configured server address cannot be used as a base URL.
    #[error("Invalid Drone server address: {0}")]
    InvalidServerUrl(String),

    /// The requested resource was not found.
    ///
    /// Drone answers 404 both for missing repositories and for repositories the
    /// token has no access to.
    #[error("Resource not found")]
    NotFound,

    /// The request never produced a response (connection refused, TLS failure,
    /// timeout in the transport, ...).
    #[error("Failed to send request to the Drone server: {0}")]
    Transport(String),

    /// The token was rejected by the server.
    #[error("Authentication rejected by the Drone server")]
    Unauthorized,
}

impl Error {
    /// Maps a non-success HTTP status and its body to the matching error.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized,
            StatusCode::NOT_FOUND => Self::NotFound,
            _ => Self::ApiError {
                status: status.as_u16(),
                message,
            },
        }
    }
}
