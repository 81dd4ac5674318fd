//! Flight phase state
//!
//! Written by the air-data computer's flight-phase detector, which owns the
//! hysteresis deciding when a moving glider counts as flying. The
//! orchestrator only reads `flying` and reacts to its edges.

use crate::geo::GeoPoint;
use crate::time::Timestamp;

/// Flying / grounded state and detector bookkeeping
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlyingState {
    /// The aircraft is airborne
    pub flying: bool,
    /// The aircraft is confirmed on the ground
    pub on_ground: bool,
    /// Accumulated time the detector has seen flight conditions (ms)
    pub time_in_flight_ms: u64,
    /// Accumulated time the detector has seen ground conditions (ms)
    pub time_on_ground_ms: u64,
    /// Sample clock at takeoff
    pub takeoff_time: Option<Timestamp>,
    /// Where the takeoff happened
    pub takeoff_location: Option<GeoPoint>,
    /// Sample clock at landing
    pub landing_time: Option<Timestamp>,
    /// Where the landing happened
    pub landing_location: Option<GeoPoint>,
}

impl FlyingState {
    /// Back to "never flown"
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Flight duration at `now`, if airborne
    pub fn flight_duration_ms(&self, now: Timestamp) -> Option<u64> {
        if !self.flying {
            return None;
        }
        self.takeoff_time.map(|t| now.saturating_sub(t))
    }
}
