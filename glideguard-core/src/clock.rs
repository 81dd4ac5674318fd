//! Throttle Clocks Driven by the Sample Clock
//!
//! ## Overview
//!
//! The orchestrator runs several computations less often than once per fix:
//! the idle pass every 500 ms, the own team code every 10 s, a trace-history
//! entry every 500 ms of GPS time. Each of those gates is one of two small
//! clocks in this module.
//!
//! ### `PeriodClock`
//! "Has at least `interval` passed since I last fired?" Fires on the first
//! check, then at most once per interval.
//!
//! ### `DeltaTime`
//! "How much time passed since the last accepted stamp?" Small deltas are
//! held back so they accumulate, and a stamp earlier than the last accepted
//! one is reported as a time warp instead of a negative delta.
//!
//! ## Why the Sample Clock?
//!
//! Both clocks are advanced with time stamps taken from the samples, never
//! from the host's wall clock. Replaying a recorded flight at 10x speed then
//! produces the same cadence as flying it, and several engine instances can
//! run side by side without sharing state.
//!
//! ```text
//! sample clock:   0    1s   2s   ...  10s  11s  ...  20s
//! team code:      ●                   ●              ●
//! ```

use crate::time::Timestamp;

/// Minimum-interval gate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodClock {
    last: Option<Timestamp>,
}

impl PeriodClock {
    /// A clock that fires on its first check
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Forget the last firing
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Record a firing at `now` without checking
    pub fn update(&mut self, now: Timestamp) {
        self.last = Some(now);
    }

    /// Has this clock ever fired?
    pub const fn is_defined(&self) -> bool {
        self.last.is_some()
    }

    /// Time since the last firing, `None` if never fired or the clock went
    /// backwards
    pub fn elapsed(&self, now: Timestamp) -> Option<u64> {
        self.last.and_then(|last| now.checked_sub(last))
    }

    /// Fire if `interval_ms` has elapsed since the last firing
    ///
    /// A clock that has never fired fires immediately. When `now` lies
    /// before the last firing the clock restarts at `now` and fires, so a
    /// backward jump cannot stall the gate.
    pub fn check_update(&mut self, now: Timestamp, interval_ms: u64) -> bool {
        let due = match self.last {
            None => true,
            Some(last) if now < last => true,
            Some(last) => now - last >= interval_ms,
        };

        if due {
            self.last = Some(now);
        }

        due
    }

    /// Like `check_update`, but a clock that has never fired only starts
    /// counting and does not fire
    pub fn check_advance(&mut self, now: Timestamp, interval_ms: u64) -> bool {
        if self.last.is_none() {
            self.last = Some(now);
            return false;
        }

        self.check_update(now, interval_ms)
    }
}

/// Outcome of advancing a `DeltaTime`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStep {
    /// First stamp, or less than the minimum delta since the last accepted
    /// stamp; nothing to do yet
    Pending,
    /// At least the minimum delta has passed (milliseconds)
    Elapsed(u64),
    /// The stamp lies before the last accepted one
    Warp,
}

/// Delta tracker with time-warp detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeltaTime {
    last: Option<Timestamp>,
}

impl DeltaTime {
    /// An empty tracker
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Forget the last accepted stamp
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Has a stamp been accepted?
    pub const fn is_defined(&self) -> bool {
        self.last.is_some()
    }

    /// Advance to `now`
    ///
    /// Deltas below `min_delta_ms` leave the last stamp untouched so small
    /// steps add up. Any forward delta beyond that is accepted, however
    /// long; a warp restarts tracking at `now`.
    pub fn update(&mut self, now: Timestamp, min_delta_ms: u64) -> TimeStep {
        let Some(last) = self.last else {
            self.last = Some(now);
            return TimeStep::Pending;
        };

        if now < last {
            self.last = Some(now);
            return TimeStep::Warp;
        }

        let delta = now - last;
        if delta < min_delta_ms {
            return TimeStep::Pending;
        }

        self.last = Some(now);
        TimeStep::Elapsed(delta)
    }
}
