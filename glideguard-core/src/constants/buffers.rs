//! Buffer Size Constants
//!
//! Capacities of every bounded collection the engine owns. Nothing in the
//! tick pipeline allocates, so these fix the engine's memory footprint.

/// Trace history entries.
///
/// At the 500 ms minimum spacing this covers the last 15 seconds, enough for
/// the short-term vario trend display.
pub const TRACE_HISTORY_SIZE: usize = 30;

/// Traffic contacts carried in one raw sample.
///
/// FLARM devices report at most ~20 contacts; the margin covers ADS-B mixes.
pub const MAX_TRAFFIC: usize = 32;

/// Flight events awaiting collection by the caller.
///
/// Events are rare (takeoff, landing, finish), so a small queue suffices even
/// if the caller drains it only on idle passes.
pub const MAX_PENDING_EVENTS: usize = 16;

/// Waypoints held by the in-memory waypoint store.
pub const MAX_WAYPOINTS: usize = 256;

/// Characters in a team code.
pub const TEAM_CODE_LENGTH: usize = 5;

/// Characters kept from a waypoint name.
pub const WAYPOINT_NAME_LENGTH: usize = 32;
