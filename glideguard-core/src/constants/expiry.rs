//! Maximum Ages of Validity-Guarded Derived Fields
//!
//! Before any sub-computer runs, the orchestrator expires every derived
//! field whose last update is older than the limit below (measured on the
//! raw sample clock). Consumers can then trust `Validity::is_valid()` without
//! knowing these limits.

use super::time::{MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Estimated wind stays usable for an hour; it changes slowly.
pub const ESTIMATED_WIND_MAX_AGE_MS: u64 = MS_PER_HOUR;

/// Effective wind vector.
pub const WIND_MAX_AGE_MS: u64 = MS_PER_HOUR;

/// Auto-QNH result.
pub const PRESSURE_MAX_AGE_MS: u64 = MS_PER_HOUR;

/// Head wind component is recomputed on every fix.
pub const HEAD_WIND_MAX_AGE_MS: u64 = 3 * MS_PER_SECOND;

/// Sun azimuth.
pub const SUN_DATA_MAX_AGE_MS: u64 = MS_PER_HOUR;

/// Automatic MacCready value.
pub const AUTO_MAC_CREADY_MAX_AGE_MS: u64 = 5 * MS_PER_MINUTE;

/// Climb rate and vario averages.
pub const CLIMB_MAX_AGE_MS: u64 = 5 * MS_PER_SECOND;

/// Most recent airspace warning time stamp.
pub const AIRSPACE_WARNING_MAX_AGE_MS: u64 = MS_PER_MINUTE;

/// Wave detection result.
pub const WAVE_MAX_AGE_MS: u64 = 10 * MS_PER_MINUTE;

/// Fuel endurance estimate.
pub const FUEL_ESTIMATE_MAX_AGE_MS: u64 = 10 * MS_PER_SECOND;

/// Own team code. Refreshed every 10 s, so three missed refreshes mean the
/// reference or position has gone away.
pub const OWN_TEAM_CODE_MAX_AGE_MS: u64 = 30 * MS_PER_SECOND;
