//! `drone-sync import`: apply a settings document to the server.
//!
//! ```bash
//! # Preview the resolved settings without contacting the server
//! drone-sync import drone.yml --dry-run
//!
//! # Apply them
//! DRONE_SERVER=https://drone.example.com DRONE_TOKEN=... drone-sync import drone.yml
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use drone_sync_core::{load_config, Synchronizer};
use tracing::{info, instrument};

use super::{write_document, OutputFormat};
use crate::config::ServerConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "import_cmd_tests.rs"]
mod tests;

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// Settings document to import. `.json` and `.toml` files are read as
    /// such, anything else as YAML.
    pub file: PathBuf,

    /// Print the resolved settings instead of applying them.
    #[arg(short, long)]
    pub dry_run: bool,

    /// Output document format for --dry-run.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Runs the import, reading server settings from the environment.
pub async fn execute(args: &ImportArgs, out: &mut dyn Write) -> Result<(), Error> {
    run(args, ServerConfig::from_env, out).await
}

/// Loads and resolves `args.file`, then either prints the result (dry run) or
/// applies it to the server described by `server`.
///
/// `server` is only consulted when the server is contacted.
#[instrument(skip_all, fields(file = %args.file.display(), dry_run = args.dry_run))]
pub async fn run<F>(args: &ImportArgs, server: F, out: &mut dyn Write) -> Result<(), Error>
where
    F: FnOnce() -> Result<ServerConfig, Error>,
{
    let config = load_config(&args.file)?;
    let repos = config.resolve();

    if args.dry_run {
        info!(repositories = repos.len(), "Dry run, not contacting the server");
        return write_document(&repos, args.format, out);
    }

    let synchronizer = Synchronizer::new(server()?.connect()?);
    let summary = synchronizer.import(&repos).await?;

    info!(
        repositories = summary.repositories,
        secrets_created = summary.secrets_created,
        secrets_updated = summary.secrets_updated,
        "Import finished"
    );

    Ok(())
}
