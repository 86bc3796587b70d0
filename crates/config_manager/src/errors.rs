//! Configuration system error types.
//!
//! Domain-specific errors for parsing and serializing settings documents.

use thiserror::Error;

use crate::parsers::DocumentFormat;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Configuration system errors.
///
/// Secret decoding failures (a structured secret without `value`, or an
/// `events` entry that is not a sequence) surface as `ParseError` with the
/// deserializer's `missing field` / `invalid type` message in `reason`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Failed to parse {format} configuration: {reason}")]
    ParseError {
        format: DocumentFormat,
        reason: String,
    },

    #[error("Failed to serialize configuration as {format}: {reason}")]
    SerializeError {
        format: DocumentFormat,
        reason: String,
    },
}

/// Result type alias for configuration operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
