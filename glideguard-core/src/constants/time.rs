//! Time-Related Constants
//!
//! Time intervals and conversion factors used by the orchestrator for
//! throttling and scheduling. All engine timestamps are milliseconds.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u32 = 60;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Seconds per hour.
pub const SECONDS_PER_HOUR: u32 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;

/// Seconds per day, the modulus for time-of-day arithmetic.
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR as i64;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * SECONDS_PER_MINUTE as u64;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = MS_PER_MINUTE * MINUTES_PER_HOUR as u64;

// ===== ORCHESTRATOR THROTTLES =====

/// Minimum spacing between idle passes (milliseconds).
///
/// The tick returns `true` once this much sample clock has elapsed since the
/// previous idle signal.
pub const DEFAULT_IDLE_INTERVAL_MS: u64 = 500;

/// Minimum spacing between own team-code recomputations (milliseconds).
///
/// The own code is read out over the radio, so a display-rate value is
/// enough.
pub const TEAM_CODE_UPDATE_INTERVAL_MS: u64 = 10 * MS_PER_SECOND;

/// Minimum GPS time between two trace-history entries (milliseconds).
pub const TRACE_HISTORY_MIN_DELTA_MS: u64 = 500;

// ===== UTC OFFSET LIMITS =====

/// Largest accepted UTC offset magnitude (minutes).
///
/// Real time zones span UTC-12 to UTC+14.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * MINUTES_PER_HOUR as i32;
