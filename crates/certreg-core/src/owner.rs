//! # Owner Identity
//!
//! Newtype for the identifier of a registering principal — typically an
//! account address or service identity. The registry treats it as an
//! opaque, validated string so any hosting environment can supply its own
//! identity scheme.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of the principal who registered (or may register) certificates.
///
/// Validated on construction: surrounding whitespace is trimmed, and the
/// result must be non-empty and at most 255 characters. Beyond that the
/// value is opaque — the registry never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Create a validated owner identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidOwner`] if the trimmed string is
    /// empty or exceeds 255 characters.
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.len() > 255 {
            return Err(ValidationError::InvalidOwner(s));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Return the owner identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for OwnerId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_plain_identifier() {
        let owner = OwnerId::new("0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B").unwrap();
        assert_eq!(owner.as_str(), "0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B");
    }

    #[test]
    fn test_new_trims_whitespace() {
        let owner = OwnerId::new("  deployer  ").unwrap();
        assert_eq!(owner, "deployer");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(OwnerId::new("").is_err());
        assert!(OwnerId::new("   ").is_err());
    }

    #[test]
    fn test_new_rejects_overlong() {
        assert!(OwnerId::new("x".repeat(256)).is_err());
        assert!(OwnerId::new("x".repeat(255)).is_ok());
    }

    #[test]
    fn test_display() {
        let owner = OwnerId::new("deployer").unwrap();
        assert_eq!(format!("{owner}"), "deployer");
    }

    #[test]
    fn test_serde_transparent() {
        let owner = OwnerId::new("deployer").unwrap();
        let json = serde_json::to_string(&owner).unwrap();
        assert_eq!(json, "\"deployer\"");
        let parsed: OwnerId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, owner);
    }
}
