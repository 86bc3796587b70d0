//! `drone-sync export`: dump the server's repository settings.
//!
//! ```bash
//! DRONE_SERVER=https://drone.example.com DRONE_TOKEN=... drone-sync export > drone.yml
//! ```

use std::io::Write;

use clap::Args;
use config_manager::Config;
use drone_client::DroneApi;
use drone_sync_core::Synchronizer;
use tracing::{info, instrument};

use super::{write_document, OutputFormat};
use crate::config::ServerConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "export_cmd_tests.rs"]
mod tests;

#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Output document format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Runs the export against the server named in the environment.
pub async fn execute(args: &ExportArgs, out: &mut dyn Write) -> Result<(), Error> {
    let server = ServerConfig::from_env()?;
    let synchronizer = Synchronizer::new(server.connect()?);
    run(args, &synchronizer, out).await
}

/// Exports through `synchronizer` and writes a document whose only section is
/// `repos`.
#[instrument(skip(synchronizer, out))]
pub async fn run<C: DroneApi>(
    args: &ExportArgs,
    synchronizer: &Synchronizer<C>,
    out: &mut dyn Write,
) -> Result<(), Error> {
    let repos = synchronizer.export().await?;
    info!(repositories = repos.len(), "Export complete");

    write_document(&Config::from_repos(repos), args.format, out)
}
