//! Sensor-derived concern groups
//!
//! These records are written by the air-data, circling and warning
//! computers. The orchestrator treats them as opaque apart from their
//! `Validity` gates, which it expires each tick against
//! [`constants::expiry`](crate::constants::expiry).

use crate::constants::expiry;
use crate::time::Timestamp;
use crate::validity::Validity;

/// Climb rate and vario averages
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClimbInfo {
    /// Vertical speed from altitude differentiation (m/s)
    pub gps_vario: f64,
    /// 30 s averaged brutto vario (m/s)
    pub average: f64,
    /// Average climb rate of the current thermal (m/s)
    pub current_thermal_average: f64,
    /// Gain in the current thermal (m)
    pub current_thermal_gain: f64,
    /// When the vario group was last written
    pub available: Validity,
}

impl ClimbInfo {
    /// Back to "no climb data"
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn expire(&mut self, now: Timestamp) {
        self.available.expire_if_stale(now, expiry::CLIMB_MAX_AGE_MS);
    }
}

/// Circling detection state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CirclingInfo {
    /// Currently circling
    pub circling: bool,
    /// Turning, but not yet long enough to count as circling
    pub turning: bool,
    /// Turn rate (deg/s), positive to the right
    pub turn_rate: f64,
    /// Sample clock when circling started
    pub climb_start_time: Option<Timestamp>,
    /// Sample clock when cruising started
    pub cruise_start_time: Option<Timestamp>,
}

impl CirclingInfo {
    /// Back to straight flight
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A wind vector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindVector {
    /// Wind speed (m/s)
    pub speed: f64,
    /// Direction the wind blows from (degrees)
    pub bearing: f64,
}

/// Wind estimates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindInfo {
    /// Wind estimated from circling drift or the EKF
    pub estimated_wind: WindVector,
    /// Gate for `estimated_wind`
    pub estimated_wind_available: Validity,
    /// Wind in use (estimate or manual)
    pub wind: WindVector,
    /// Gate for `wind`
    pub wind_available: Validity,
    /// Head wind component along the track (m/s)
    pub head_wind: f64,
    /// Gate for `head_wind`
    pub head_wind_available: Validity,
}

impl WindInfo {
    /// Back to "no wind"
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn expire(&mut self, now: Timestamp) {
        self.estimated_wind_available
            .expire_if_stale(now, expiry::ESTIMATED_WIND_MAX_AGE_MS);
        self.wind_available.expire_if_stale(now, expiry::WIND_MAX_AGE_MS);
        self.head_wind_available
            .expire_if_stale(now, expiry::HEAD_WIND_MAX_AGE_MS);
    }
}

/// Slowly changing atmospheric and environmental values
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtmosphereInfo {
    /// QNH found by auto-QNH (hPa)
    pub pressure_qnh: f64,
    /// Gate for `pressure_qnh`
    pub pressure_available: Validity,
    /// Sun azimuth (degrees)
    pub sun_azimuth: f64,
    /// Gate for `sun_azimuth`
    pub sun_data_available: Validity,
    /// MacCready value chosen by auto-MC (m/s)
    pub auto_mac_cready: f64,
    /// Gate for `auto_mac_cready`
    pub auto_mac_cready_available: Validity,
}

impl AtmosphereInfo {
    /// Forget everything
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn expire(&mut self, now: Timestamp) {
        self.pressure_available
            .expire_if_stale(now, expiry::PRESSURE_MAX_AGE_MS);
        self.sun_data_available
            .expire_if_stale(now, expiry::SUN_DATA_MAX_AGE_MS);
        self.auto_mac_cready_available
            .expire_if_stale(now, expiry::AUTO_MAC_CREADY_MAX_AGE_MS);
    }
}

/// Summary of the airspace warning manager's state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AirspaceWarningsInfo {
    /// Number of active warnings
    pub active: u16,
    /// Number of warnings the pilot has acknowledged
    pub acknowledged: u16,
    /// When the warning list last changed
    pub latest: Validity,
}

impl AirspaceWarningsInfo {
    /// No warnings
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Any unacknowledged warning?
    pub fn has_pending(&self) -> bool {
        self.latest.is_valid() && self.active > self.acknowledged
    }

    fn expire(&mut self, now: Timestamp) {
        self.latest
            .expire_if_stale(now, expiry::AIRSPACE_WARNING_MAX_AGE_MS);
    }
}

/// Wave detection result
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveInfo {
    /// Number of lift bands found
    pub waves: u8,
    /// Strongest lift found in a wave (m/s)
    pub best_lift: f64,
    /// Gate for the whole record
    pub available: Validity,
}

impl WaveInfo {
    /// No wave
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn expire(&mut self, now: Timestamp) {
        self.available.expire_if_stale(now, expiry::WAVE_MAX_AGE_MS);
    }
}

pub(super) fn expire_all(
    now: Timestamp,
    climb: &mut ClimbInfo,
    wind: &mut WindInfo,
    atmosphere: &mut AtmosphereInfo,
    airspace: &mut AirspaceWarningsInfo,
    wave: &mut WaveInfo,
) {
    climb.expire(now);
    wind.expire(now);
    atmosphere.expire(now);
    airspace.expire(now);
    wave.expire(now);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_wind_expires_before_estimated_wind() {
        let mut wind = WindInfo::default();
        wind.estimated_wind_available.update(0);
        wind.head_wind_available.update(0);

        wind.expire(5_000);
        assert!(wind.estimated_wind_available.is_valid());
        assert!(!wind.head_wind_available.is_valid());
    }

    #[test]
    fn pending_warnings_need_fresh_list() {
        let mut warnings = AirspaceWarningsInfo {
            active: 2,
            acknowledged: 1,
            latest: Validity::at(0),
        };
        assert!(warnings.has_pending());

        warnings.expire(61_000);
        assert!(!warnings.has_pending());
    }
}
