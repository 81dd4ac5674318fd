//! Constants for GlideGuard Core
//!
//! Centralised, documented constants used throughout the engine. Every
//! interval, age limit and capacity the orchestrator relies on is defined
//! here rather than as a magic number at the call site.
//!
//! ## Organization
//!
//! - **Time**: unit conversions and the orchestrator's throttle intervals
//! - **Expiry**: maximum ages of Validity-guarded derived fields
//! - **Buffers**: capacities of the bounded histories and stores
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include units in the name (`_MS`, `_M`)
//! 3. Keep runtime-tunable values in `EngineConfig`; these are its defaults

/// Time unit conversions and throttle intervals.
pub mod time;

/// Maximum ages for Validity-guarded derived fields.
pub mod expiry;

/// Capacities of bounded histories, queues and stores.
pub mod buffers;

pub use time::{
    MS_PER_SECOND, MS_PER_MINUTE, MS_PER_HOUR,
    DEFAULT_IDLE_INTERVAL_MS, TEAM_CODE_UPDATE_INTERVAL_MS,
    TRACE_HISTORY_MIN_DELTA_MS,
};

pub use buffers::{
    TRACE_HISTORY_SIZE, MAX_TRAFFIC, MAX_PENDING_EVENTS, MAX_WAYPOINTS,
};
