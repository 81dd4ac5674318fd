//! Error Types for Configuration and Collaborator Boundaries
//!
//! ## Design Philosophy
//!
//! The per-fix pipeline never fails. A fix without time, position or traffic
//! simply leaves the dependent derived fields stale, and downstream consumers
//! check freshness before use. Errors therefore only exist where data enters
//! the engine from outside:
//!
//! 1. **Settings**: a configuration snapshot that makes no physical sense
//!    (NaN fuel load, a UTC offset of 30 hours) is rejected before it can
//!    reach a tick.
//!
//! 2. **Team codes**: codes typed in by the pilot are parsed and rejected
//!    when malformed.
//!
//! 3. **Bounded stores**: the in-memory waypoint store has fixed capacity.
//!
//! Like the rest of the crate, errors are small and `Copy`, carrying only
//! `&'static str` context so they can be returned from hot paths and stored
//! without allocation.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use glideguard_core::{ComputerError, ComputerSettings};
//!
//! let mut settings = ComputerSettings::default();
//! settings.utc_offset_minutes = 30 * 60;
//!
//! match settings.validate() {
//!     Ok(()) => {}
//!     Err(ComputerError::InvalidSetting { name, .. }) => {
//!         // Keep the previous snapshot and tell the pilot which field is wrong
//!         assert_eq!(name, "utc_offset_minutes");
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for engine configuration operations
pub type ComputerResult<T> = Result<T, ComputerError>;

/// Engine errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ComputerError {
    /// A configuration value is outside its meaningful range
    #[error("Invalid setting {name}: {reason}")]
    InvalidSetting {
        /// Name of the offending field
        name: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },

    /// A team code string could not be decoded
    #[error("Invalid team code: {reason}")]
    InvalidTeamCode {
        /// What is wrong with the code
        reason: &'static str,
    },

    /// A fixed-capacity store is full
    #[error("Capacity exceeded: store holds at most {capacity} entries")]
    CapacityExceeded {
        /// Maximum number of entries the store accepts
        capacity: usize,
    },

    /// A numeric input is NaN or infinite
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ComputerError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidSetting { name, reason } =>
                defmt::write!(fmt, "Setting {}: {}", name, reason),
            Self::InvalidTeamCode { reason } =>
                defmt::write!(fmt, "Team code: {}", reason),
            Self::CapacityExceeded { capacity } =>
                defmt::write!(fmt, "Store full ({})", capacity),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}
