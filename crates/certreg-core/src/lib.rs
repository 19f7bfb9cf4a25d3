//! # certreg-core — Foundational Types for CERTREG
//!
//! This crate is the bedrock of the CERTREG certificate registry. It defines
//! the domain primitives that enforce correctness guarantees at construction
//! time. Every other crate in the workspace depends on `certreg-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`CertificateHash`] and
//!    [`OwnerId`] are newtypes with validated constructors. No bare strings
//!    for identifiers.
//!
//! 2. **Fixed-length content hashes.** A certificate hash is exactly 32
//!    bytes (SHA-256), parsed from 64 hex characters and rendered as
//!    lowercase hex. Malformed input is rejected at construction — it can
//!    never reach the ledger.
//!
//! 3. **UTC-only timestamps.** The [`Timestamp`] type enforces UTC with Z
//!    suffix and seconds precision; the epoch-seconds view is the integer
//!    timestamp recorded per registration.
//!
//! 4. **Injected time source.** The ledger never reads the system clock
//!    directly — it receives a [`Clock`] capability, so registration
//!    timestamps are deterministic under test.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `certreg-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod clock;
pub mod digest;
pub mod error;
pub mod hash;
pub mod owner;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use clock::{Clock, ManualClock, SystemClock};
pub use digest::sha256_hash;
pub use error::ValidationError;
pub use hash::{CertificateHash, HASH_HEX_LEN, HASH_LEN};
pub use owner::OwnerId;
pub use temporal::Timestamp;
