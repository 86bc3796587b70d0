//! Command modules for the drone-sync CLI.
//!
//! - `export_cmd`: write the server's repository settings as a document
//! - `import_cmd`: apply a settings document to the server

use std::io::Write;

use clap::ValueEnum;
use config_manager::{to_document, DocumentFormat};
use serde::Serialize;

use crate::errors::Error;

pub mod export_cmd;
pub mod import_cmd;

/// Document format for command output.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl From<OutputFormat> for DocumentFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => DocumentFormat::Yaml,
            OutputFormat::Json => DocumentFormat::Json,
            OutputFormat::Toml => DocumentFormat::Toml,
        }
    }
}

/// Serializes `value` completely before writing any of it to `out`.
fn write_document<T: Serialize>(
    value: &T,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), Error> {
    let text = to_document(value, format.into())?;
    out.write_all(text.as_bytes()).map_err(Error::WriteOutput)?;
    out.flush().map_err(Error::WriteOutput)
}
