//! Waypoint Lookup
//!
//! The orchestrator resolves exactly one waypoint: the team-code reference.
//! It only needs lookup by id, so the waypoint database is abstracted behind
//! the narrow `WaypointStore` trait. The database is read-mostly and shared
//! with the rest of the instrument; the engine never mutates it.
//!
//! `Waypoints` is a bounded in-memory store for tests, replay tools and
//! small embedded deployments.

use heapless::{String, Vec};

use crate::constants::buffers::{MAX_WAYPOINTS, WAYPOINT_NAME_LENGTH};
use crate::errors::{ComputerError, ComputerResult};
use crate::geo::GeoPoint;

/// Waypoint identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointId(u32);

impl WaypointId {
    /// Wrap a known-good id
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Map a stored id, where negative values mean "not configured"
    pub fn from_raw(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().map(Self)
    }

    /// The numeric id
    pub const fn value(&self) -> u32 {
        self.0
    }
}

/// A named location
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Identifier
    pub id: WaypointId,
    /// Display name, truncated to the store's name length
    pub name: String<WAYPOINT_NAME_LENGTH>,
    /// Position
    pub location: GeoPoint,
}

impl Waypoint {
    /// Create a waypoint; names longer than the limit are truncated
    pub fn new(id: WaypointId, name: &str, location: GeoPoint) -> Self {
        let mut short = String::new();
        for c in name.chars() {
            if short.push(c).is_err() {
                break;
            }
        }
        Self { id, name: short, location }
    }
}

/// Read-only waypoint lookup
pub trait WaypointStore {
    /// Find a waypoint by id
    fn lookup_id(&self, id: WaypointId) -> Option<&Waypoint>;
}

/// Bounded in-memory waypoint store
#[derive(Debug, Clone, Default)]
pub struct Waypoints {
    items: Vec<Waypoint, MAX_WAYPOINTS>,
}

impl Waypoints {
    /// An empty store
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add or replace a waypoint
    pub fn insert(&mut self, waypoint: Waypoint) -> ComputerResult<()> {
        if let Some(existing) = self.items.iter_mut().find(|w| w.id == waypoint.id) {
            *existing = waypoint;
            return Ok(());
        }

        self.items
            .push(waypoint)
            .map_err(|_| ComputerError::CapacityExceeded { capacity: MAX_WAYPOINTS })
    }

    /// Number of stored waypoints
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Store holds nothing?
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl WaypointStore for Waypoints {
    fn lookup_id(&self, id: WaypointId) -> Option<&Waypoint> {
        self.items.iter().find(|w| w.id == id)
    }
}
