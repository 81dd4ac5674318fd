//! Team-mate tracking results

use crate::geo::{GeoPoint, GeoVector};
use crate::team_code::TeamCode;
use crate::validity::Validity;

/// Derived team code information
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamInfo {
    /// Are `teammate_vector` and `teammate_location` usable?
    pub teammate_available: bool,
    /// Resolved team-code reference waypoint position
    pub reference_location: Option<GeoPoint>,
    /// Position of the chosen team mate
    pub teammate_location: Option<GeoPoint>,
    /// Vector from own position to the team mate
    pub teammate_vector: Option<GeoVector>,
    /// Own code relative to the reference, refreshed at most every 10 s
    pub own_code: Option<TeamCode>,
    /// When `own_code` was last recomputed
    pub own_code_available: Validity,
    /// Code of the traffic-tracked team mate
    pub peer_code: Option<TeamCode>,
    /// Is `peer_code` from the current sample, or did we lose the contact?
    pub peer_code_is_current: bool,
}

impl TeamInfo {
    /// Forget everything
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Mark the team mate as unavailable and drop its code
    pub fn clear_teammate(&mut self) {
        self.teammate_available = false;
        self.peer_code = None;
        self.peer_code_is_current = false;
    }
}
