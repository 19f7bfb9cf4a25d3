//! # Clock — Injected Time Source
//!
//! The registry records the time at which each registration was accepted,
//! but the time itself originates outside the ledger — a hosting
//! environment may have its own notion of time (ledger time, block time).
//! Modeling the source as a capability keeps the ledger deterministic
//! under test: production code injects [`SystemClock`], tests inject
//! [`ManualClock`] and control time explicitly.

use parking_lot::RwLock;

use crate::temporal::Timestamp;

/// A source of the current time.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Return the current timestamp.
    fn now(&self) -> Timestamp;
}

/// Production clock backed by the system's UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Deterministic clock for tests: time only moves when told to.
///
/// The lock is `parking_lot` (non-poisonable), so a panicking test thread
/// cannot corrupt the clock for the rest of the suite.
#[derive(Debug)]
pub struct ManualClock {
    current: RwLock<Timestamp>,
}

impl ManualClock {
    /// Create a manual clock starting at the given instant.
    pub fn new(start: Timestamp) -> Self {
        Self {
            current: RwLock::new(start),
        }
    }

    /// Set the clock to an exact instant.
    pub fn set(&self, ts: Timestamp) {
        *self.current.write() = ts;
    }

    /// Advance the clock by the given number of seconds.
    ///
    /// Saturates silently at the representable datetime range.
    pub fn advance_secs(&self, secs: i64) {
        if let Some(delta) = chrono::Duration::try_seconds(secs) {
            let mut current = self.current.write();
            if let Some(next) = current.as_datetime().checked_add_signed(delta) {
                *current = Timestamp::from_utc(next);
            }
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.read()
    }
}
