//! Traffic Contacts from the Collision-Avoidance Receiver
//!
//! A FLARM-style receiver reports nearby gliders keyed by a 24-bit device
//! id. The orchestrator only needs to find one contact (the team mate) and
//! read its position, so the list is a small bounded vector.

use core::fmt;

use heapless::Vec;

use crate::constants::buffers::MAX_TRAFFIC;
use crate::errors::{ComputerError, ComputerResult};
use crate::geo::GeoPoint;

/// Stable device identifier of a traffic contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlarmId(u32);

impl FlarmId {
    /// Largest id a 24-bit device address can take
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Map a raw device address, where 0 means "not configured"
    pub const fn from_raw(raw: u32) -> Option<Self> {
        if raw == 0 || raw > Self::MAX {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The raw 24-bit address
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for FlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

/// One traffic contact
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlarmTraffic {
    /// Device id
    pub id: FlarmId,
    /// Position, absent when the receiver only reports relative bearing
    pub location: Option<GeoPoint>,
}

/// Contacts reported in one sample
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficList {
    contacts: Vec<FlarmTraffic, MAX_TRAFFIC>,
}

impl TrafficList {
    /// An empty list
    pub const fn new() -> Self {
        Self { contacts: Vec::new() }
    }

    /// Add a contact, replacing an earlier report of the same id
    pub fn insert(&mut self, traffic: FlarmTraffic) -> ComputerResult<()> {
        if let Some(existing) = self.contacts.iter_mut().find(|t| t.id == traffic.id) {
            *existing = traffic;
            return Ok(());
        }

        self.contacts
            .push(traffic)
            .map_err(|_| ComputerError::CapacityExceeded { capacity: MAX_TRAFFIC })
    }

    /// Find a contact by device id
    pub fn find(&self, id: FlarmId) -> Option<&FlarmTraffic> {
        self.contacts.iter().find(|t| t.id == id)
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// No contacts reported?
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts
    pub fn iter(&self) -> impl Iterator<Item = &FlarmTraffic> {
        self.contacts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_id_means_unset() {
        assert_eq!(FlarmId::from_raw(0), None);
        assert_eq!(FlarmId::from_raw(0x0100_0000), None);
        assert_eq!(FlarmId::from_raw(0xDD1234).map(|id| id.value()), Some(0xDD1234));
    }

    #[test]
    fn insert_replaces_same_id() {
        let id = FlarmId::from_raw(0xABCDEF).unwrap();
        let mut list = TrafficList::new();
        list.insert(FlarmTraffic { id, location: None }).unwrap();
        list.insert(FlarmTraffic { id, location: Some(GeoPoint::new(1.0, 2.0)) }).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list.find(id).and_then(|t| t.location), Some(GeoPoint::new(1.0, 2.0)));
    }

    #[test]
    fn full_list_rejects_new_contacts() {
        let mut list = TrafficList::new();
        for raw in 1..=MAX_TRAFFIC as u32 {
            let id = FlarmId::from_raw(raw).unwrap();
            list.insert(FlarmTraffic { id, location: None }).unwrap();
        }

        let extra = FlarmId::from_raw(0xFFFF).unwrap();
        assert_eq!(
            list.insert(FlarmTraffic { id: extra, location: None }),
            Err(ComputerError::CapacityExceeded { capacity: MAX_TRAFFIC })
        );
    }
}
