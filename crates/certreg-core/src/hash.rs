//! # Certificate Hash — Content-Addressed Certificate Identifiers
//!
//! Defines [`CertificateHash`], the fixed-length content identifier that
//! names a certificate. The hash is the 32-byte SHA-256 digest of the
//! certificate's content, carried around as raw bytes and rendered as
//! 64 lowercase hex characters.
//!
//! ## Security Invariant
//!
//! A `CertificateHash` can only be obtained through [`CertificateHash::parse`]
//! (which validates length and character set) or [`crate::digest::sha256_hash`]
//! (which computes it from content). Malformed identifiers are rejected at
//! construction and never reach the ledger.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Length of a certificate hash in bytes (SHA-256 output size).
pub const HASH_LEN: usize = 32;

/// Length of a certificate hash rendered as hex characters.
pub const HASH_HEX_LEN: usize = 64;

/// A fixed-length content identifier uniquely naming a certificate.
///
/// Hex input is accepted in either case and normalized: the stored value is
/// the raw 32 bytes, and every rendering is lowercase hex. Two hashes that
/// differ only in input casing are therefore equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CertificateHash([u8; HASH_LEN]);

impl CertificateHash {
    /// Create a certificate hash from raw digest bytes.
    ///
    /// Prefer [`crate::digest::sha256_hash`] when hashing content and
    /// [`CertificateHash::parse`] when ingesting an external identifier.
    pub fn from_bytes(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a certificate hash from a 64-character hex string.
    ///
    /// Surrounding whitespace is trimmed and mixed-case hex is accepted;
    /// the result is always the canonical lowercase rendering.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidHashLength`] if the trimmed string
    /// is not exactly 64 characters, or [`ValidationError::InvalidHashCharacter`]
    /// at the first non-hex character.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.len() != HASH_HEX_LEN {
            return Err(ValidationError::InvalidHashLength(s.len()));
        }
        let mut bytes = [0u8; HASH_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pos = i * 2;
            let pair = s
                .get(pos..pos + 2)
                .ok_or(ValidationError::InvalidHashCharacter(pos))?;
            *byte = u8::from_str_radix(pair, 16)
                .map_err(|_| ValidationError::InvalidHashCharacter(pos))?;
        }
        Ok(Self(bytes))
    }

    /// Access the raw 32-byte digest value.
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Render the hash as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for CertificateHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for CertificateHash {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CertificateHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for CertificateHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    #[test]
    fn test_parse_valid_hash() {
        let hash = CertificateHash::parse(SAMPLE).unwrap();
        assert_eq!(hash.to_hex(), SAMPLE);
    }

    #[test]
    fn test_parse_normalizes_case() {
        let upper = SAMPLE.to_uppercase();
        let a = CertificateHash::parse(&upper).unwrap();
        let b = CertificateHash::parse(SAMPLE).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_hex(), SAMPLE);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let padded = format!("  {SAMPLE}\n");
        assert_eq!(
            CertificateHash::parse(&padded).unwrap(),
            CertificateHash::parse(SAMPLE).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let err = CertificateHash::parse("abcd").unwrap_err();
        assert_eq!(err, ValidationError::InvalidHashLength(4));
    }

    #[test]
    fn test_parse_rejects_long_input() {
        let long = format!("{SAMPLE}00");
        let err = CertificateHash::parse(&long).unwrap_err();
        assert_eq!(err, ValidationError::InvalidHashLength(66));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(CertificateHash::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let bad = format!("zz{}", &SAMPLE[2..]);
        let err = CertificateHash::parse(&bad).unwrap_err();
        assert_eq!(err, ValidationError::InvalidHashCharacter(0));
    }

    #[test]
    fn test_parse_reports_position_of_bad_character() {
        let bad = format!("{}g{}", &SAMPLE[..10], &SAMPLE[11..]);
        let err = CertificateHash::parse(&bad).unwrap_err();
        // Positions are reported at even offsets (hex pair granularity).
        assert_eq!(err, ValidationError::InvalidHashCharacter(10));
    }

    #[test]
    fn test_display_matches_to_hex() {
        let hash = CertificateHash::parse(SAMPLE).unwrap();
        assert_eq!(format!("{hash}"), hash.to_hex());
    }

    #[test]
    fn test_from_str_roundtrip() {
        let hash: CertificateHash = SAMPLE.parse().unwrap();
        assert_eq!(hash.to_hex(), SAMPLE);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let hash = CertificateHash::parse(SAMPLE).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{SAMPLE}\""));
        let parsed: CertificateHash = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, hash);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        let result: Result<CertificateHash, _> = serde_json::from_str("\"not-a-hash\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let hash = CertificateHash::from_bytes([0xab; HASH_LEN]);
        assert_eq!(hash.to_hex(), "ab".repeat(HASH_LEN));
        assert_eq!(CertificateHash::parse(&hash.to_hex()).unwrap(), hash);
    }
}
