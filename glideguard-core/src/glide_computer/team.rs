//! Team-position tracking
//!
//! ## Overview
//!
//! Both team computations are relative to a reference waypoint chosen in
//! the settings:
//!
//! ```text
//!                 reference ●
//!                 ╱          ╲
//!   own code    ╱              ╲   peer code
//!   (10 s)    ╱                  ╲ (every tick)
//!      own ●───────────────────────● team mate
//!                teammate_vector
//! ```
//!
//! - **Own code**: bearing/range from the reference to us, encoded as a
//!   team code for reading out over the radio. Throttled per instance.
//! - **Team mate**: from a tracked traffic contact (preferred) or a code the
//!   pilot typed in. Cheap vector math, recomputed every tick.
//!
//! ## Reference Resolution
//!
//! The reference location is cached per configured waypoint id and only
//! looked up again when the id changes. An id missing from the store is
//! retried every tick, with one warning per id.

use crate::clock::PeriodClock;
use crate::derived::TeamInfo;
use crate::geo::GeoPoint;
use crate::raw::RawSample;
use crate::settings::TeamCodeSettings;
use crate::team_code::TeamCode;
use crate::time::Timestamp;
use crate::waypoint::{WaypointId, WaypointStore};

/// Cached outcome of the last reference lookup
#[derive(Debug, Clone, Copy, PartialEq)]
enum Reference {
    Unset,
    Resolved { id: WaypointId, location: GeoPoint },
    NotFound { id: WaypointId },
}

/// Per-instance team tracking state
#[derive(Debug, Clone)]
pub(super) struct TeamTracker {
    reference: Reference,
    own_code_clock: PeriodClock,
}

impl Default for TeamTracker {
    fn default() -> Self {
        Self {
            reference: Reference::Unset,
            own_code_clock: PeriodClock::new(),
        }
    }
}

impl TeamTracker {
    /// Resolve the configured reference and publish it into `team`
    ///
    /// Returns the reference location, or `None` when team computations
    /// must be skipped this tick.
    pub(super) fn resolve_reference(
        &mut self,
        settings: &TeamCodeSettings,
        waypoints: &dyn WaypointStore,
        team: &mut TeamInfo,
    ) -> Option<GeoPoint> {
        let Some(id) = settings.reference_waypoint else {
            if self.reference != Reference::Unset {
                self.reference = Reference::Unset;
                team.clear();
            }
            return None;
        };

        if let Reference::Resolved { id: cached, location } = self.reference {
            if cached == id {
                team.reference_location = Some(location);
                return Some(location);
            }
        }

        match waypoints.lookup_id(id) {
            Some(waypoint) => {
                let location = waypoint.location;
                log_debug!("Team reference {} resolved", id.value());
                self.reference = Reference::Resolved { id, location };
                team.reference_location = Some(location);
                Some(location)
            }
            None => {
                if self.reference != (Reference::NotFound { id }) {
                    log_warn!("Team reference waypoint {} not found", id.value());
                }
                self.reference = Reference::NotFound { id };
                team.reference_location = None;
                team.teammate_available = false;
                None
            }
        }
    }

    /// Recompute the own team code, at most once per `interval_ms`
    ///
    /// Without an own position nothing happens and the throttle is not
    /// consumed, so the code is computed on the first fix.
    pub(super) fn update_own_code(
        &mut self,
        now: Timestamp,
        interval_ms: u64,
        own: Option<GeoPoint>,
        reference: GeoPoint,
        team: &mut TeamInfo,
    ) {
        let Some(own) = own else {
            return;
        };

        if !self.own_code_clock.check_update(now, interval_ms) {
            return;
        }

        let v = reference.distance_bearing(&own);
        team.own_code = Some(TeamCode::encode(v.bearing, v.distance));
        team.own_code_available.update(now);
    }

    /// Drop the cached reference so the next tick looks it up again
    pub(super) fn forget_reference(&mut self) {
        self.reference = Reference::Unset;
    }

    /// Forget the throttle so the next fix recomputes the own code
    pub(super) fn reset_throttle(&mut self) {
        self.own_code_clock.reset();
    }
}

/// Locate the team mate and the vector to it
///
/// A tracked traffic contact takes precedence over a typed-in code. When the
/// contact is missing from this sample the previous result is kept but
/// marked as not current.
pub(super) fn update_teammate(
    settings: &TeamCodeSettings,
    raw: &RawSample,
    reference: GeoPoint,
    team: &mut TeamInfo,
) {
    let mate = if let Some(flarm_id) = settings.flarm_id {
        let Some(location) = raw.traffic.find(flarm_id).and_then(|t| t.location) else {
            team.peer_code_is_current = false;
            return;
        };

        let v = reference.distance_bearing(&location);
        team.peer_code = Some(TeamCode::encode(v.bearing, v.distance));
        team.peer_code_is_current = true;
        location
    } else if let Some(code) = &settings.team_code {
        team.peer_code = Some(code.clone());
        team.peer_code_is_current = true;
        code.location(&reference)
    } else {
        team.clear_teammate();
        team.teammate_location = None;
        team.teammate_vector = None;
        return;
    };

    team.teammate_location = Some(mate);
    team.teammate_vector = raw.location.map(|own| own.distance_bearing(&mate));
    team.teammate_available = team.teammate_vector.is_some();
}
