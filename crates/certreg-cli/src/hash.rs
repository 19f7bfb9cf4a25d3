//! # Hash Subcommand
//!
//! Computes the certificate hash of a file's content. The output is the
//! 64-hex-character identifier a client passes to the registration
//! operation, so tooling and registry agree on one hash derivation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use certreg_core::sha256_hash;

/// Arguments for the `certreg hash` subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Path to the certificate content to hash.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Execute the hash subcommand.
///
/// Returns exit code: 0 on success.
pub fn run_hash(args: &HashArgs) -> Result<u8> {
    let data = std::fs::read(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let hash = sha256_hash(&data);
    tracing::debug!(path = %args.path.display(), bytes = data.len(), "hashed certificate content");
    println!("{hash}");
    Ok(0)
}
