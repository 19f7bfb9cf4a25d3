//! # API Route Modules
//!
//! Route modules for the CERTREG API surface:
//!
//! - `certificates` — one-time registration, existence checks, and owner
//!   lookups keyed by certificate hash.
//! - `owners` — per-owner certificate counts.

pub mod certificates;
pub mod owners;
