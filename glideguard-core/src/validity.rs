//! Freshness Tracking for Derived Values
//!
//! ## Overview
//!
//! Almost every derived value is only meaningful for a while after it was
//! computed: a head-wind component is stale after a few seconds, an auto-QNH
//! result after an hour. Rather than pairing each value with a `bool`, the
//! engine stores a `Validity` next to it recording *when* the value was last
//! written.
//!
//! ```text
//! Validity { last_update: None }        → never valid
//! Validity { last_update: Some(t) }     → valid while now ∈ [t, t + max_age]
//! ```
//!
//! ## Memory Model
//!
//! `Validity` is a plain `Copy` value (an `Option<u64>`, 16 bytes). It is
//! embedded by value in many derived records and copied along with them, for
//! instance when the finish-line snapshot is taken.
//!
//! ## Usage Example
//!
//! ```rust
//! use glideguard_core::Validity;
//!
//! let mut head_wind = Validity::invalid();
//! assert!(!head_wind.is_fresh(0, 3_000));
//!
//! head_wind.update(10_000);
//! assert!(head_wind.is_fresh(12_000, 3_000));
//!
//! // Orchestrator expires it before the next tick runs
//! head_wind.expire_if_stale(14_000, 3_000);
//! assert!(!head_wind.is_valid());
//! ```

use crate::time::Timestamp;

/// Time stamp of the most recent update of a derived value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Validity {
    last_update: Option<Timestamp>,
}

impl Validity {
    /// A validity that has never been updated
    pub const fn invalid() -> Self {
        Self { last_update: None }
    }

    /// A validity stamped at `now`
    pub const fn at(now: Timestamp) -> Self {
        Self { last_update: Some(now) }
    }

    /// Mark the value as written at `now`
    pub fn update(&mut self, now: Timestamp) {
        self.last_update = Some(now);
    }

    /// Forget the value entirely
    pub fn clear(&mut self) {
        self.last_update = None;
    }

    /// Has the value ever been written (and not cleared/expired since)?
    pub const fn is_valid(&self) -> bool {
        self.last_update.is_some()
    }

    /// Time stamp of the last update, if any
    pub const fn last_update(&self) -> Option<Timestamp> {
        self.last_update
    }

    /// Is the value no older than `max_age_ms` at `now`?
    ///
    /// A value stamped after `now` (the clock went backwards) is not fresh.
    pub fn is_fresh(&self, now: Timestamp, max_age_ms: u64) -> bool {
        match self.last_update {
            Some(t) => now >= t && now - t <= max_age_ms,
            None => false,
        }
    }

    /// Clear the value if it is not fresh at `now`
    pub fn expire_if_stale(&mut self, now: Timestamp, max_age_ms: u64) {
        if self.is_valid() && !self.is_fresh(now, max_age_ms) {
            self.clear();
        }
    }

    /// Was this value updated after `other`?
    ///
    /// Lets consumers detect a new airspace warning or a new team code
    /// without comparing payloads.
    pub fn modified_since(&self, other: &Validity) -> bool {
        match (self.last_update, other.last_update) {
            (Some(a), Some(b)) => a > b,
            (Some(_), None) => true,
            _ => false,
        }
    }
}
