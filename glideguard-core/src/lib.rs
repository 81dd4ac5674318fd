//! Flight-data derivation engine for GlideGuard
//!
//! Turns a stream of raw GPS/sensor fixes into the continuously updated
//! derived state a soaring instrument displays: climb performance, working
//! band, team-mate position, task progress, fuel endurance and more.
//! Designed for instruments with modest resources.
//!
//! Key constraints:
//! - One tick per GPS fix, never blocks
//! - A tick never fails; missing inputs leave fields stale
//! - Bounded memory for every history the engine keeps
//!
//! ```no_run
//! use glideguard_core::{GlideComputer, ComputerSettings, EngineConfig, RawSample};
//! use glideguard_core::computers::SubComputers;
//! use glideguard_core::waypoint::Waypoints;
//!
//! let mut computer = GlideComputer::new(
//!     ComputerSettings::default(),
//!     EngineConfig::default(),
//!     Box::new(Waypoints::new()),
//!     SubComputers::noop(),
//! );
//!
//! // Feed one fix per sensor update
//! let idle_due = computer.process_sample(RawSample::at(1_000), false);
//! if idle_due {
//!     computer.process_idle(false);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod logging;

pub mod buffer;
pub mod clock;
pub mod computers;
pub mod constants;
pub mod derived;
pub mod errors;
pub mod geo;
pub mod glide_computer;
pub mod raw;
pub mod settings;
pub mod team_code;
pub mod time;
pub mod traffic;
pub mod validity;
pub mod waypoint;

// Public API
pub use errors::{ComputerError, ComputerResult};
pub use derived::DerivedState;
pub use glide_computer::{GlideComputer, GlideEvent};
pub use raw::RawSample;
pub use settings::{ComputerSettings, EngineConfig};
pub use validity::Validity;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
