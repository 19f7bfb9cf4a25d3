//! # Certificate Registry
//!
//! The shared mutable store mapping certificate hashes to ownership
//! records, plus the derived per-owner counts. Exposes exactly four
//! operations: register, existence check, owner lookup, and owner count.
//!
//! ## Invariants
//!
//! - A hash appears in the record map at most once, ever.
//! - The count stored for an owner always equals the number of records
//!   that owner holds; both are mutated inside one critical section.
//! - A record's timestamp is fixed at the moment its registration is
//!   accepted. The clock is read inside the write lock, so stored
//!   timestamps are non-decreasing in insertion order for a monotonic
//!   clock.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use certreg_core::{CertificateHash, Clock, OwnerId, SystemClock, Timestamp};

/// Immutable record of a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// The principal that registered the certificate.
    pub owner: OwnerId,
    /// When the registration was accepted.
    pub registered_at: Timestamp,
}

/// Errors reported by registry operations.
///
/// Both variants are recoverable by the caller; the registry never retries
/// internally, and a failed operation leaves no partial state behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Attempted registration of a hash that is already bound.
    #[error("certificate {hash} is already registered")]
    AlreadyRegistered {
        /// The hash that was already present.
        hash: CertificateHash,
    },

    /// Owner lookup for a hash that was never registered.
    #[error("certificate {hash} is not registered")]
    NotFound {
        /// The hash that was absent.
        hash: CertificateHash,
    },
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<CertificateHash, CertificateRecord>,
    owner_counts: HashMap<OwnerId, u64>,
}

/// The append-only certificate ownership ledger.
///
/// Cheaply cloneable — all clones share the same underlying state via
/// `Arc`, so a clone handed to another thread or task observes every
/// registration. The lock is `parking_lot` (non-poisonable): a panicking
/// caller cannot permanently corrupt the store.
#[derive(Debug, Clone)]
pub struct CertificateRegistry {
    inner: Arc<RwLock<Inner>>,
    clock: Arc<dyn Clock>,
}

impl CertificateRegistry {
    /// Create an empty registry with the given time source.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            clock,
        }
    }

    /// Create an empty registry backed by the system clock.
    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    /// Register a certificate hash under the given owner.
    ///
    /// The existence check, record insertion, and count increment run under
    /// a single write lock: concurrent attempts to register the same hash
    /// yield exactly one success, and the losers observe
    /// [`RegistryError::AlreadyRegistered`] with no state change.
    ///
    /// Returns the stored record on success.
    ///
    /// # Errors
    ///
    /// Fails with [`RegistryError::AlreadyRegistered`] if the hash is
    /// already bound.
    pub fn register(
        &self,
        hash: CertificateHash,
        owner: OwnerId,
    ) -> Result<CertificateRecord, RegistryError> {
        let mut inner = self.inner.write();
        if inner.records.contains_key(&hash) {
            return Err(RegistryError::AlreadyRegistered { hash });
        }
        let record = CertificateRecord {
            owner: owner.clone(),
            registered_at: self.clock.now(),
        };
        inner.records.insert(hash, record.clone());
        *inner.owner_counts.entry(owner).or_insert(0) += 1;
        Ok(record)
    }

    /// Whether the given hash has been registered.
    ///
    /// Pure lookup; never fails.
    pub fn exists(&self, hash: &CertificateHash) -> bool {
        self.inner.read().records.contains_key(hash)
    }

    /// Return the owner/timestamp record for a registered hash.
    ///
    /// # Errors
    ///
    /// Fails with [`RegistryError::NotFound`] if the hash was never
    /// registered. Callers that want a non-failing probe should use
    /// [`CertificateRegistry::exists`] instead.
    pub fn owner_of(&self, hash: &CertificateHash) -> Result<CertificateRecord, RegistryError> {
        self.inner
            .read()
            .records
            .get(hash)
            .cloned()
            .ok_or(RegistryError::NotFound { hash: *hash })
    }

    /// Number of certificates the given owner has registered.
    ///
    /// Returns 0 for an owner that never registered anything — unlike
    /// [`CertificateRegistry::owner_of`], absence is not an error here.
    pub fn owner_count(&self, owner: &OwnerId) -> u64 {
        self.inner
            .read()
            .owner_counts
            .get(owner)
            .copied()
            .unwrap_or(0)
    }

    /// Total number of registered certificates.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certreg_core::ManualClock;

    const TEST_HASH: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    fn hash(seed: u8) -> CertificateHash {
        CertificateHash::from_bytes([seed; 32])
    }

    fn owner(name: &str) -> OwnerId {
        OwnerId::new(name).unwrap()
    }

    fn fixed_clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(
            Timestamp::parse("2026-01-15T12:00:00Z").unwrap(),
        ))
    }

    #[test]
    fn register_then_query_roundtrip() {
        let clock = fixed_clock();
        let registry = CertificateRegistry::new(clock.clone());
        let h = CertificateHash::parse(TEST_HASH).unwrap();

        let record = registry.register(h, owner("alice")).unwrap();
        assert_eq!(record.owner, "alice");
        assert_eq!(record.registered_at, clock.now());

        assert!(registry.exists(&h));
        assert_eq!(registry.owner_of(&h).unwrap(), record);
        assert_eq!(registry.owner_count(&owner("alice")), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_registration_fails_and_leaves_state_unchanged() {
        let clock = fixed_clock();
        let registry = CertificateRegistry::new(clock.clone());
        let h = hash(1);

        let first = registry.register(h, owner("alice")).unwrap();
        clock.advance_secs(60);

        let err = registry.register(h, owner("bob")).unwrap_err();
        assert_eq!(err, RegistryError::AlreadyRegistered { hash: h });

        // State after both attempts equals state after the first alone.
        assert_eq!(registry.owner_of(&h).unwrap(), first);
        assert_eq!(registry.owner_count(&owner("alice")), 1);
        assert_eq!(registry.owner_count(&owner("bob")), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn owner_of_unregistered_hash_is_not_found() {
        let registry = CertificateRegistry::with_system_clock();
        let h = hash(7);
        let err = registry.owner_of(&h).unwrap_err();
        assert_eq!(err, RegistryError::NotFound { hash: h });
    }

    #[test]
    fn exists_is_false_for_unregistered_hash() {
        let registry = CertificateRegistry::with_system_clock();
        assert!(!registry.exists(&hash(9)));
    }

    #[test]
    fn count_is_zero_for_unknown_owner() {
        let registry = CertificateRegistry::with_system_clock();
        assert_eq!(registry.owner_count(&owner("nobody")), 0);
    }

    #[test]
    fn counts_accumulate_per_owner() {
        let registry = CertificateRegistry::new(fixed_clock());
        registry.register(hash(1), owner("alice")).unwrap();
        registry.register(hash(2), owner("alice")).unwrap();
        registry.register(hash(3), owner("bob")).unwrap();

        assert_eq!(registry.owner_count(&owner("alice")), 2);
        assert_eq!(registry.owner_count(&owner("bob")), 1);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn timestamps_come_from_injected_clock() {
        let clock = fixed_clock();
        let registry = CertificateRegistry::new(clock.clone());

        let first = registry.register(hash(1), owner("alice")).unwrap();
        clock.advance_secs(3600);
        let second = registry.register(hash(2), owner("alice")).unwrap();

        assert_eq!(first.registered_at.to_iso8601(), "2026-01-15T12:00:00Z");
        assert_eq!(second.registered_at.to_iso8601(), "2026-01-15T13:00:00Z");
        assert!(first.registered_at < second.registered_at);
    }

    #[test]
    fn record_is_immutable_after_failed_reregistration() {
        // The full one-time-binding scenario: register as A, re-register as
        // B fails, A's record survives untouched with its original timestamp.
        let clock = fixed_clock();
        let registry = CertificateRegistry::new(clock.clone());
        let h = CertificateHash::parse(TEST_HASH).unwrap();

        let original = registry.register(h, owner("A")).unwrap();
        clock.advance_secs(120);
        assert!(registry.register(h, owner("B")).is_err());

        let fetched = registry.owner_of(&h).unwrap();
        assert_eq!(fetched.owner, "A");
        assert_eq!(fetched.registered_at, original.registered_at);
        assert_eq!(registry.owner_count(&owner("B")), 0);
    }

    #[test]
    fn clone_shares_underlying_ledger() {
        let registry = CertificateRegistry::new(fixed_clock());
        let clone = registry.clone();

        clone.register(hash(1), owner("alice")).unwrap();
        assert!(registry.exists(&hash(1)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn concurrent_registration_of_same_hash_has_single_winner() {
        let registry = CertificateRegistry::with_system_clock();
        let h = hash(42);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    registry
                        .register(h, OwnerId::new(format!("owner-{i}")).unwrap())
                        .is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1, "exactly one concurrent registration may win");
        assert_eq!(registry.len(), 1);

        let winner = registry.owner_of(&h).unwrap();
        assert_eq!(registry.owner_count(&winner.owner), 1);
    }

    #[test]
    fn record_serializes_with_hex_and_iso_fields() {
        let registry = CertificateRegistry::new(fixed_clock());
        let record = registry.register(hash(1), owner("alice")).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["owner"], "alice");
        assert!(json["registered_at"].is_string());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use certreg_core::ManualClock;
    use proptest::prelude::*;

    /// A registration attempt drawn from a deliberately small key space so
    /// that duplicate hashes and repeated owners occur often.
    fn attempt() -> impl Strategy<Value = (u8, u8)> {
        (0u8..8, 0u8..4)
    }

    proptest! {
        /// After any sequence of registration attempts, the sum of
        /// per-owner counts equals the number of stored records.
        #[test]
        fn owner_counts_always_sum_to_len(attempts in prop::collection::vec(attempt(), 0..64)) {
            let registry = CertificateRegistry::new(Arc::new(ManualClock::new(
                Timestamp::parse("2026-01-15T12:00:00Z").unwrap(),
            )));
            let owners: Vec<OwnerId> = (0..4)
                .map(|i| OwnerId::new(format!("owner-{i}")).unwrap())
                .collect();

            for (seed, owner_idx) in attempts {
                let _ = registry.register(
                    CertificateHash::from_bytes([seed; 32]),
                    owners[owner_idx as usize].clone(),
                );
            }

            let total: u64 = owners.iter().map(|o| registry.owner_count(o)).sum();
            prop_assert_eq!(total, registry.len() as u64);
        }

        /// Re-registering any existing hash never changes observable state.
        #[test]
        fn failed_reregistration_is_a_no_op(attempts in prop::collection::vec(attempt(), 1..32)) {
            let registry = CertificateRegistry::new(Arc::new(ManualClock::new(
                Timestamp::parse("2026-01-15T12:00:00Z").unwrap(),
            )));
            let owners: Vec<OwnerId> = (0..4)
                .map(|i| OwnerId::new(format!("owner-{i}")).unwrap())
                .collect();

            for (seed, owner_idx) in &attempts {
                let _ = registry.register(
                    CertificateHash::from_bytes([*seed; 32]),
                    owners[*owner_idx as usize].clone(),
                );
            }

            let before: Vec<_> = (0u8..8)
                .map(|seed| registry.owner_of(&CertificateHash::from_bytes([seed; 32])))
                .collect();
            let len_before = registry.len();

            // Replay every attempt; each must now fail without effect.
            for (seed, owner_idx) in &attempts {
                let result = registry.register(
                    CertificateHash::from_bytes([*seed; 32]),
                    owners[*owner_idx as usize].clone(),
                );
                prop_assert!(result.is_err());
            }

            let after: Vec<_> = (0u8..8)
                .map(|seed| registry.owner_of(&CertificateHash::from_bytes([seed; 32])))
                .collect();
            prop_assert_eq!(before, after);
            prop_assert_eq!(len_before, registry.len());
        }
    }
}
