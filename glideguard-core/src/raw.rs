//! Raw Sensor Samples
//!
//! One `RawSample` is produced per sensor update (typically once per GPS
//! fix) and handed to `GlideComputer::process_sample`. It is immutable for
//! the duration of that tick and not retained afterwards, apart from the
//! copy the orchestrator keeps for its idle pass.
//!
//! Every measured quantity is an `Option`: a GPS without a fix has no
//! location, a logger without a baro has no altitude. The orchestrator never
//! substitutes defaults for missing inputs.
//!
//! ## Building Samples
//!
//! ```rust
//! use glideguard_core::RawSample;
//! use glideguard_core::geo::GeoPoint;
//!
//! let sample = RawSample::at(12_000)
//!     .with_time(36_000_000)
//!     .with_location(GeoPoint::new(47.2, 7.4))
//!     .with_nav_altitude(1_450.0)
//!     .with_vario(1.8, 2.3);
//!
//! assert!(sample.time_available());
//! assert!(sample.location.is_some());
//! ```

use crate::geo::GeoPoint;
use crate::time::{BrokenDateTime, Timestamp};
use crate::traffic::TrafficList;

/// Aircraft attitude from an AHRS, if fitted
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attitude {
    /// Bank angle in degrees, positive right wing down
    pub bank_angle: Option<f64>,
    /// Pitch angle in degrees, positive nose up
    pub pitch_angle: Option<f64>,
    /// Magnetic heading in degrees
    pub heading: Option<f64>,
}

/// Flight recorder connectivity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightRecorderStatus {
    /// An external recorder is connected
    pub connected: bool,
    /// The recorder reports that it is writing a flight log
    pub recording: bool,
}

/// Raw input for one tick
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSample {
    /// Monotonic sample clock (milliseconds); always present
    pub clock: Timestamp,
    /// GPS time (milliseconds), absent without a time fix
    pub time: Option<Timestamp>,
    /// GPS UTC date and time of day
    pub date_time_utc: BrokenDateTime,
    /// GPS position
    pub location: Option<GeoPoint>,
    /// Best available altitude for navigation (metres MSL)
    pub nav_altitude: Option<f64>,
    /// Total-energy vertical speed (m/s)
    pub brutto_vario: Option<f64>,
    /// Air-mass vertical speed (m/s)
    pub netto_vario: Option<f64>,
    /// Attitude
    pub attitude: Attitude,
    /// Traffic contacts
    pub traffic: TrafficList,
    /// Flight recorder status
    pub flight_recorder: FlightRecorderStatus,
}

impl RawSample {
    /// A sample carrying nothing but the sample clock
    pub fn at(clock: Timestamp) -> Self {
        Self {
            clock,
            ..Self::default()
        }
    }

    /// Set GPS time
    pub fn with_time(mut self, time: Timestamp) -> Self {
        self.time = Some(time);
        self
    }

    /// Set GPS UTC date and time of day
    pub fn with_date_time(mut self, date_time_utc: BrokenDateTime) -> Self {
        self.date_time_utc = date_time_utc;
        self
    }

    /// Set position
    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Set navigation altitude
    pub fn with_nav_altitude(mut self, altitude: f64) -> Self {
        self.nav_altitude = Some(altitude);
        self
    }

    /// Set brutto and netto vario
    pub fn with_vario(mut self, brutto: f64, netto: f64) -> Self {
        self.brutto_vario = Some(brutto);
        self.netto_vario = Some(netto);
        self
    }

    /// Set traffic
    pub fn with_traffic(mut self, traffic: TrafficList) -> Self {
        self.traffic = traffic;
        self
    }

    /// Does this sample carry GPS time?
    pub fn time_available(&self) -> bool {
        self.time.is_some()
    }

    /// Navigation altitude, if known and finite
    pub fn nav_altitude(&self) -> Option<f64> {
        self.nav_altitude.filter(|h| h.is_finite())
    }
}
