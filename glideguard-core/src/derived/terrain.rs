//! Terrain clearance results, written by the air-data computer

use crate::geo::GeoPoint;

/// Derived terrain altitude information
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainInfo {
    /// Is `terrain_altitude` valid?
    pub terrain_valid: bool,
    /// Is `terrain_base` valid?
    pub terrain_base_valid: bool,
    /// Is `altitude_agl` valid?
    pub altitude_agl_valid: bool,
    /// Terrain elevation below the aircraft (m)
    pub terrain_altitude: f64,
    /// Lowest terrain within glide range (m)
    pub terrain_base: f64,
    /// Height above terrain (m)
    pub altitude_agl: f64,
    /// Where the glide path first hits terrain, if it does
    pub terrain_warning_location: Option<GeoPoint>,
}

impl TerrainInfo {
    /// Back to "no terrain data"
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Terrain base if known, else terrain altitude below the aircraft
    pub fn terrain_base_fallback(&self) -> f64 {
        if self.terrain_base_valid {
            self.terrain_base
        } else {
            self.terrain_altitude
        }
    }
}
