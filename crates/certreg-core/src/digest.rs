//! # Content Hash Derivation
//!
//! Computes the certificate hash of raw certificate content. Clients
//! derive the hash before calling the registration operation;
//! [`sha256_hash`] is that derivation, so tooling (the CLI `hash`
//! subcommand) and the registry agree on one hash function.

use sha2::{Digest, Sha256};

use crate::hash::{CertificateHash, HASH_LEN};

/// Compute the SHA-256 certificate hash of raw content bytes.
pub fn sha256_hash(data: &[u8]) -> CertificateHash {
    let digest = Sha256::digest(data);
    let mut bytes = [0u8; HASH_LEN];
    bytes.copy_from_slice(&digest);
    CertificateHash::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sha256_vector_empty() {
        // SHA256("") — verified against Python hashlib.sha256(b"").hexdigest()
        assert_eq!(
            sha256_hash(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_known_sha256_vector_hello_world() {
        // SHA256("hello world") — verified against Python hashlib.
        assert_eq!(
            sha256_hash(b"hello world").to_hex(),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(sha256_hash(b"certificate"), sha256_hash(b"certificate"));
    }

    #[test]
    fn test_different_inputs_different_hashes() {
        assert_ne!(sha256_hash(b"a"), sha256_hash(b"b"));
    }
}
