//! # Smoke Subcommand
//!
//! Exercises a fresh in-process registry end to end: register a test
//! certificate, confirm it exists, look up its owner and timestamp, and
//! report the owner's certificate count. Useful as a deployment sanity
//! check and as a quick demonstration of the four registry operations.

use anyhow::{Context, Result};
use clap::Args;

use certreg_core::{CertificateHash, OwnerId};
use certreg_ledger::CertificateRegistry;

/// Default hash exercised by the smoke test (64 hex characters).
pub const DEFAULT_SMOKE_HASH: &str =
    "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Arguments for the `certreg smoke` subcommand.
#[derive(Args, Debug)]
pub struct SmokeArgs {
    /// Owner identity to register the test certificate under.
    #[arg(long, default_value = "deployer")]
    pub owner: String,

    /// Certificate hash to register (64 hex characters).
    #[arg(long, default_value = DEFAULT_SMOKE_HASH)]
    pub hash: String,
}

/// Execute the smoke subcommand.
///
/// Returns exit code: 0 on success, 1 if any check fails.
pub fn run_smoke(args: &SmokeArgs) -> Result<u8> {
    let hash = CertificateHash::parse(&args.hash).context("invalid --hash")?;
    let owner = OwnerId::new(args.owner.as_str()).context("invalid --owner")?;

    let registry = CertificateRegistry::with_system_clock();

    println!("Registering test certificate {hash}...");
    let record = registry
        .register(hash, owner.clone())
        .context("registration failed")?;
    println!("Certificate registered.");

    let exists = registry.exists(&hash);
    println!("Certificate exists? {exists}");
    if !exists {
        tracing::error!(%hash, "registered certificate not found by existence check");
        return Ok(1);
    }

    let fetched = registry.owner_of(&hash).context("owner lookup failed")?;
    println!("Owner: {}", fetched.owner);
    println!("Timestamp: {}", fetched.registered_at.epoch_secs());
    if fetched != record {
        tracing::error!(%hash, "owner lookup does not match the registered record");
        return Ok(1);
    }

    let count = registry.owner_count(&owner);
    println!("Certificates registered by {owner}: {count}");
    if count != 1 {
        tracing::error!(%owner, count, "expected exactly one certificate for the smoke owner");
        return Ok(1);
    }

    println!("Smoke test complete.");
    Ok(0)
}
