//! # certreg-ledger — The Certificate Registry Engine
//!
//! Implements the append-only, content-addressed ownership ledger at the
//! heart of CERTREG. A registration binds a certificate hash, one time and
//! irreversibly, to an owner and a timestamp; the registry answers
//! existence, ownership, and per-owner count queries.
//!
//! ## Design
//!
//! - A certificate hash is either absent or present — one-directional,
//!   terminal once present. There is no update, revoke, or delete.
//! - All state lives behind a single non-poisoning `parking_lot::RwLock`,
//!   so readers always observe a record together with its owner count.
//! - The registration timestamp comes from an injected [`certreg_core::Clock`],
//!   never from a direct system-clock call.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Locks are never held across `.await` points (all operations are
//!   synchronous).

pub mod registry;

pub use registry::{CertificateRecord, CertificateRegistry, RegistryError};
