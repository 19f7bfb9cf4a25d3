//! # certreg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use certreg_cli::hash::{run_hash, HashArgs};
use certreg_cli::smoke::{run_smoke, SmokeArgs};

/// CERTREG CLI
///
/// Tooling for the CERTREG certificate registry: an end-to-end smoke test
/// of the registry operations and certificate hash derivation.
#[derive(Parser, Debug)]
#[command(name = "certreg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Exercise a fresh registry end to end (register, exists, owner, count).
    Smoke(SmokeArgs),

    /// Compute the certificate hash of a file's content.
    Hash(HashArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Smoke(args) => run_smoke(&args),
        Commands::Hash(args) => run_hash(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
