//! Time handling for GPS fixes
//!
//! Two kinds of time flow through the engine:
//! - Monotonic sample clock (`Timestamp`, milliseconds) used for throttles
//!   and Validity stamps
//! - Broken-down calendar date and time-of-day as reported by the GPS, used
//!   to derive local time for display and logging
//!
//! A GPS that has a fix but no almanac reports a valid time-of-day with a
//! garbage date. The broken-down types keep date and time separately
//! plausible so local time can still be shown in that case.

use chrono::{Datelike, NaiveDate, TimeDelta, Timelike};

use crate::constants::time::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Timestamp in milliseconds (sample clock or GPS time)
pub type Timestamp = u64;

/// Calendar date as reported by the GPS
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrokenDate {
    /// Year, e.g. 2024
    pub year: u16,
    /// Month 1..=12
    pub month: u8,
    /// Day of month 1..=31
    pub day: u8,
}

impl BrokenDate {
    /// Create a date without checking it
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// The "no date known" marker
    pub const fn invalid() -> Self {
        Self { year: 0, month: 0, day: 0 }
    }

    /// Could this be a real date?
    ///
    /// Receivers without almanac data report years like 1980 or 2080, which
    /// pass; month 0 or day 0 do not.
    pub fn is_plausible(&self) -> bool {
        (1800..=2500).contains(&self.year)
            && (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
    }
}

/// Time of day as reported by the GPS
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrokenTime {
    /// Hour 0..=23
    pub hour: u8,
    /// Minute 0..=59
    pub minute: u8,
    /// Second 0..=59
    pub second: u8,
}

impl BrokenTime {
    /// Create a time of day without checking it
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self { hour, minute, second }
    }

    /// Build from seconds since midnight, wrapping around the day
    pub fn from_second_of_day(seconds: i64) -> Self {
        let s = seconds.rem_euclid(SECONDS_PER_DAY);
        Self {
            hour: (s / SECONDS_PER_HOUR as i64) as u8,
            minute: ((s / SECONDS_PER_MINUTE as i64) % 60) as u8,
            second: (s % 60) as u8,
        }
    }

    /// Seconds since midnight
    pub fn second_of_day(&self) -> i64 {
        self.hour as i64 * SECONDS_PER_HOUR as i64
            + self.minute as i64 * SECONDS_PER_MINUTE as i64
            + self.second as i64
    }

    /// Are all fields within their ranges?
    pub fn is_plausible(&self) -> bool {
        self.hour < 24 && self.minute < 60 && self.second < 60
    }

    /// Shift by an offset, wrapping around midnight
    pub fn offset_by_minutes(&self, minutes: i32) -> Self {
        Self::from_second_of_day(self.second_of_day() + minutes as i64 * SECONDS_PER_MINUTE as i64)
    }
}

/// Date and time of day, each independently plausible or not
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrokenDateTime {
    /// Calendar date
    pub date: BrokenDate,
    /// Time of day
    pub time: BrokenTime,
    /// Is `time` meaningful at all?
    valid: bool,
}

impl BrokenDateTime {
    /// Combine a date and a time of day
    pub const fn new(date: BrokenDate, time: BrokenTime) -> Self {
        Self { date, time, valid: true }
    }

    /// Neither date nor time known
    pub const fn invalid() -> Self {
        Self {
            date: BrokenDate::invalid(),
            time: BrokenTime::new(0, 0, 0),
            valid: false,
        }
    }

    /// Is the date part usable?
    pub fn is_date_plausible(&self) -> bool {
        self.valid && self.date.is_plausible()
    }

    /// Is the time-of-day part usable?
    pub fn is_time_plausible(&self) -> bool {
        self.valid && self.time.is_plausible()
    }

    /// Are both parts usable?
    pub fn is_plausible(&self) -> bool {
        self.is_date_plausible() && self.is_time_plausible()
    }

    /// Convert UTC to local time
    ///
    /// With a plausible date the offset is applied to the full date-time and
    /// may roll the date over. Without one, only the time of day is shifted
    /// (wrapping at midnight) and the date stays invalid.
    pub fn to_local(&self, utc_offset_minutes: i32) -> Self {
        if !self.is_time_plausible() {
            return Self::invalid();
        }

        if self.date.is_plausible() {
            if let Some(local) = self.shift_full(utc_offset_minutes) {
                return local;
            }
        }

        Self::new(BrokenDate::invalid(), self.time.offset_by_minutes(utc_offset_minutes))
    }

    fn shift_full(&self, utc_offset_minutes: i32) -> Option<Self> {
        let utc = NaiveDate::from_ymd_opt(
            self.date.year as i32,
            self.date.month as u32,
            self.date.day as u32,
        )?
        .and_hms_opt(self.time.hour as u32, self.time.minute as u32, self.time.second as u32)?;

        let offset = TimeDelta::try_minutes(utc_offset_minutes as i64)?;
        let local = utc.checked_add_signed(offset)?;

        Some(Self::new(
            BrokenDate::new(local.year() as u16, local.month() as u8, local.day() as u8),
            BrokenTime::new(local.hour() as u8, local.minute() as u8, local.second() as u8),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rolls_date_forward() {
        let utc = BrokenDateTime::new(BrokenDate::new(2024, 12, 31), BrokenTime::new(23, 30, 0));
        let local = utc.to_local(120);
        assert_eq!(local.date, BrokenDate::new(2025, 1, 1));
        assert_eq!(local.time, BrokenTime::new(1, 30, 0));
    }

    #[test]
    fn negative_offset_rolls_date_back() {
        let utc = BrokenDateTime::new(BrokenDate::new(2024, 3, 1), BrokenTime::new(2, 0, 0));
        let local = utc.to_local(-180);
        assert_eq!(local.date, BrokenDate::new(2024, 2, 29));
        assert_eq!(local.time, BrokenTime::new(23, 0, 0));
    }

    #[test]
    fn implausible_date_shifts_time_only() {
        let utc = BrokenDateTime::new(BrokenDate::new(2024, 0, 0), BrokenTime::new(10, 15, 30));
        let local = utc.to_local(120);
        assert!(!local.is_date_plausible());
        assert!(local.is_time_plausible());
        assert_eq!(local.time, BrokenTime::new(12, 15, 30));
    }

    #[test]
    fn calendar_impossible_date_shifts_time_only() {
        // Passes the coarse plausibility check but does not exist
        let utc = BrokenDateTime::new(BrokenDate::new(2023, 2, 30), BrokenTime::new(23, 0, 0));
        let local = utc.to_local(120);
        assert!(!local.is_date_plausible());
        assert_eq!(local.time, BrokenTime::new(1, 0, 0));
    }

    #[test]
    fn invalid_time_yields_invalid_local() {
        let local = BrokenDateTime::invalid().to_local(60);
        assert!(!local.is_time_plausible());
        assert!(!local.is_date_plausible());
    }

    #[test]
    fn second_of_day_wraps() {
        assert_eq!(BrokenTime::from_second_of_day(-60), BrokenTime::new(23, 59, 0));
        assert_eq!(BrokenTime::from_second_of_day(86_400 + 61), BrokenTime::new(0, 1, 1));
    }
}
