mod commands;
mod config;
mod discovery;
mod watcher;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{init, inspect, sync, InitArgs, InspectArgs, SyncArgs};
use tracing_subscriber::EnvFilter;

/// Synctypes - keep TypeScript enums and constants in sync with backend models
#[derive(Parser, Debug)]
#[command(name = "synctypes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a config file and an example model manifest
    Init(InitArgs),

    /// Generate TypeScript constants and enums from model manifests
    Sync(SyncArgs),

    /// Print the constants and enums extracted from each model
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Init(args) => init(args, &cwd),
            Command::Sync(args) => sync(args, &cwd),
            Command::Inspect(args) => inspect(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
