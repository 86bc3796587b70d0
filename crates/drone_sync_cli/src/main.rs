use std::io;

use clap::{Parser, Subcommand};
use drone_sync_cli::commands::{export_cmd, import_cmd};
use drone_sync_cli::errors::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// drone-sync: keep Drone repository settings in a file
#[derive(Parser, Debug)]
#[command(name = "drone-sync")]
#[command(about = "Export and import Drone repository settings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the settings of every repository on the server to stdout
    Export(export_cmd::ExportArgs),

    /// Apply a settings document to the server
    Import(import_cmd::ImportArgs),

    /// Show the CLI version
    Version,
}

/// Exit status for a failed parse. Help and version requests succeed; every
/// usage error exits 1 like any other failure.
fn parse_exit_code(error: &clap::Error) -> i32 {
    if error.use_stderr() {
        1
    } else {
        0
    }
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let mut stdout = io::stdout();
    match &cli.command {
        Commands::Export(args) => export_cmd::execute(args, &mut stdout).await,
        Commands::Import(args) => import_cmd::execute(args, &mut stdout).await,
        Commands::Version => {
            println!(
                "drone-sync version {}",
                option_env!("DRONE_SYNC_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
            );
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging; stdout is reserved for documents
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_env("DRONE_SYNC_LOG"))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_exit_code(&e));
        }
    };
    if let Err(e) = run(&cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
