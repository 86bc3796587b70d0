//! Settings document loading: read, template, parse.

use std::path::Path;

use config_manager::{parse_config, Config, DocumentFormat};
use tracing::{debug, instrument};

use crate::{SyncError, SyncResult};

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

/// Loads the settings document at `path`.
///
/// The format is inferred from the file extension (see
/// [`DocumentFormat::from_path`]).
///
/// # Errors
///
/// - `SyncError::ReadFile`: the file cannot be read
/// - `SyncError::Template`: an `{{env ...}}` directive is malformed
/// - `SyncError::Configuration`: the rendered text is not a valid document
#[instrument]
pub fn load_config(path: &Path) -> SyncResult<Config> {
    let text = std::fs::read_to_string(path).map_err(|source| SyncError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(bytes = text.len(), "Read settings file");

    parse_document(&text, DocumentFormat::from_path(path))
}

/// Renders the environment directives in `text` and parses the result.
pub fn parse_document(text: &str, format: DocumentFormat) -> SyncResult<Config> {
    let rendered = template_engine::apply_template(text)?;
    Ok(parse_config(&rendered, format)?)
}
