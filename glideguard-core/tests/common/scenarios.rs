//! Sample generators

use glideguard_core::geo::GeoPoint;
use glideguard_core::time::{BrokenDate, BrokenDateTime, BrokenTime, Timestamp};
use glideguard_core::RawSample;

/// Home airfield
pub const HOME: GeoPoint = GeoPoint::new(47.0, 8.0);

/// A straight flight away from home, one fix per `step_ms`
#[derive(Debug, Clone)]
pub struct FlightScript {
    /// Sample clock of the first fix
    pub start_ms: Timestamp,
    /// Time between fixes
    pub step_ms: u64,
    /// Track (degrees)
    pub track: f64,
    /// Ground speed (m/s)
    pub speed: f64,
    /// Altitude of the first fix (m)
    pub start_altitude: f64,
    /// Climb rate (m/s)
    pub climb: f64,
}

impl Default for FlightScript {
    fn default() -> Self {
        Self {
            start_ms: 36_000_000,
            step_ms: 1_000,
            track: 90.0,
            speed: 30.0,
            start_altitude: 1_000.0,
            climb: 0.0,
        }
    }
}

impl FlightScript {
    /// The `i`-th fix: clock and GPS time advance together
    pub fn fix(&self, i: u64) -> RawSample {
        let clock = self.start_ms + i * self.step_ms;
        let seconds = (i * self.step_ms) as f64 / 1_000.0;
        RawSample::at(clock)
            .with_time(clock)
            .with_date_time(utc_at(clock))
            .with_location(HOME.destination(self.track, self.speed * seconds))
            .with_nav_altitude(self.start_altitude + self.climb * seconds)
            .with_vario(self.climb, self.climb + 0.6)
    }

    /// The first `n` fixes
    pub fn fixes(&self, n: u64) -> impl Iterator<Item = RawSample> + '_ {
        (0..n).map(move |i| self.fix(i))
    }
}

/// UTC date-time on a fixed day for a millisecond time of day
pub fn utc_at(time_ms: Timestamp) -> BrokenDateTime {
    let seconds = (time_ms / 1_000) as i64;
    BrokenDateTime::new(
        BrokenDate::new(2024, 7, 14),
        BrokenTime::from_second_of_day(seconds),
    )
}
