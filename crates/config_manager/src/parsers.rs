//! Document parsing and serialization.
//!
//! YAML is the primary format. JSON and TOML documents share the same schema.

use serde::Serialize;
use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::document::Config;
use crate::errors::{ConfigurationError, ConfigurationResult};

#[cfg(test)]
#[path = "parsers_tests.rs"]
mod tests;

/// Textual format of a settings document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Infers the format from a file extension. Anything that is not `.json`
    /// or `.toml` is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("toml") => Self::Toml,
            _ => Self::Yaml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a settings document and names every secret after its map key.
///
/// Blank text is an empty document.
///
/// # Errors
///
/// Returns [`ConfigurationError::ParseError`] when the text is not a valid
/// document, including secrets without a `value` and `events` entries that
/// are not sequences.
pub fn parse_config(text: &str, format: DocumentFormat) -> ConfigurationResult<Config> {
    if text.trim().is_empty() {
        debug!(format = %format, "Empty document");
        return Ok(Config::default());
    }

    let parse_error = |reason: String| ConfigurationError::ParseError { format, reason };

    let mut config: Config = match format {
        DocumentFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|e| parse_error(e.to_string()))?
        }
        DocumentFormat::Json => {
            serde_json::from_str(text).map_err(|e| parse_error(e.to_string()))?
        }
        DocumentFormat::Toml => toml::from_str(text).map_err(|e| parse_error(e.to_string()))?,
    };

    config.assign_secret_names();

    debug!(
        format = %format,
        owners = config.owners.len(),
        repos = config.repos.len(),
        "Parsed settings document"
    );

    Ok(config)
}

/// Serializes `value` as a complete document in `format`.
///
/// JSON output is pretty-printed and, like the other formats, ends with a
/// newline.
pub fn to_document<T: Serialize>(
    value: &T,
    format: DocumentFormat,
) -> ConfigurationResult<String> {
    let serialize_error = |reason: String| ConfigurationError::SerializeError { format, reason };

    match format {
        DocumentFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| serialize_error(e.to_string()))
        }
        DocumentFormat::Json => serde_json::to_string_pretty(value)
            .map(|mut text| {
                text.push('\n');
                text
            })
            .map_err(|e| serialize_error(e.to_string())),
        DocumentFormat::Toml => {
            toml::to_string(value).map_err(|e| serialize_error(e.to_string()))
        }
    }
}
