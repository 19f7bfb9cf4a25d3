//! # Error Hierarchy
//!
//! Structured validation errors for the domain primitives, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Each variant carries the invalid input and the expected format so that
//! callers can diagnose malformed identifiers without guesswork. Validation
//! failures are raised at construction time, before any registry state is
//! touched.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Certificate hash string has the wrong length.
    #[error("invalid certificate hash length: {0} characters (expected 64 hex characters)")]
    InvalidHashLength(usize),

    /// Certificate hash string contains a non-hex character.
    #[error("invalid certificate hash: non-hex character at position {0}")]
    InvalidHashCharacter(usize),

    /// Owner identifier fails basic format validation.
    #[error("invalid owner identifier: {0:?} (expected non-empty, at most 255 characters)")]
    InvalidOwner(String),

    /// Timestamp string is not valid UTC RFC 3339.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
