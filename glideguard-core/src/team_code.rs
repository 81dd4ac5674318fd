//! Team Codes
//!
//! ## Overview
//!
//! Pilots flying as a team exchange positions over the radio as short codes
//! relative to an agreed reference waypoint. A code is five base-36 digits:
//!
//! ```text
//!   "B7" "0K4"
//!    │     └── range from the reference, 100 m units (3 digits, max ~4666 km)
//!    └──────── bearing from the reference, 1296 steps per revolution
//! ```
//!
//! Reading `"B7"`: B=11, 7 → 11·36 + 7 = 403 steps → 403 · 360/1296 ≈ 111.9°.
//!
//! The codec is lossy: bearing resolves to ~0.28°, range to
//! 100 m. Decoding a code therefore yields a location within ~100 m of the
//! encoded one.
//!
//! ## Usage Example
//!
//! ```rust
//! use glideguard_core::team_code::TeamCode;
//! use glideguard_core::geo::GeoPoint;
//!
//! let code = TeamCode::encode(90.0, 12_300.0);
//! assert_eq!(code.as_str(), "9003F");
//!
//! let parsed: TeamCode = "9003F".parse()?;
//! let reference = GeoPoint::new(46.0, 8.0);
//! let mate = parsed.location(&reference);
//! assert!(mate.longitude > reference.longitude);
//! # Ok::<(), glideguard_core::ComputerError>(())
//! ```

use core::fmt;
use core::str::FromStr;

use heapless::String;

use crate::constants::buffers::TEAM_CODE_LENGTH;
use crate::errors::{ComputerError, ComputerResult};
use crate::geo::{normalize_bearing, GeoPoint};

const BASE: u32 = 36;
const BEARING_DIGITS: usize = 2;
const RANGE_DIGITS: usize = 3;

/// Bearing steps per full revolution (36²)
const BEARING_STEPS: u32 = BASE * BASE;

/// Largest encodable range value (36³ - 1)
const MAX_RANGE_VALUE: u32 = BASE * BASE * BASE - 1;

/// Metres per range step
const RANGE_STEP_M: f64 = 100.0;

/// A five-character team code
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String<TEAM_CODE_LENGTH>", into = "String<TEAM_CODE_LENGTH>")
)]
pub struct TeamCode {
    code: String<TEAM_CODE_LENGTH>,
}

impl TeamCode {
    /// Encode a bearing (degrees) and distance (metres) from the reference
    ///
    /// Distances beyond the code's range are clamped to the largest value.
    pub fn encode(bearing: f64, distance: f64) -> Self {
        let steps = libm::round(normalize_bearing(bearing) * BEARING_STEPS as f64 / 360.0) as u32
            % BEARING_STEPS;
        let range = libm::round(distance.max(0.0) / RANGE_STEP_M).min(MAX_RANGE_VALUE as f64) as u32;

        let mut code = String::new();
        push_digits(&mut code, steps, BEARING_DIGITS);
        push_digits(&mut code, range, RANGE_DIGITS);
        Self { code }
    }

    /// The code as text
    pub fn as_str(&self) -> &str {
        self.code.as_str()
    }

    /// Bearing from the reference in degrees
    pub fn bearing(&self) -> f64 {
        let steps = digits_value(&self.code.as_bytes()[..BEARING_DIGITS]);
        normalize_bearing(steps as f64 * 360.0 / BEARING_STEPS as f64)
    }

    /// Distance from the reference in metres
    pub fn range(&self) -> f64 {
        digits_value(&self.code.as_bytes()[BEARING_DIGITS..]) as f64 * RANGE_STEP_M
    }

    /// Decode into a location relative to `reference`
    pub fn location(&self, reference: &GeoPoint) -> GeoPoint {
        reference.destination(self.bearing(), self.range())
    }
}

fn push_digits(code: &mut String<TEAM_CODE_LENGTH>, value: u32, digits: usize) {
    for i in (0..digits).rev() {
        let digit = (value / BASE.pow(i as u32)) % BASE;
        // Capacity is exactly BEARING_DIGITS + RANGE_DIGITS
        let _ = code.push(digit_char(digit));
    }
}

fn digit_char(digit: u32) -> char {
    match digit {
        0..=9 => (b'0' + digit as u8) as char,
        _ => (b'A' + (digit - 10) as u8) as char,
    }
}

fn char_digit(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as u32),
        b'A'..=b'Z' => Some((c - b'A') as u32 + 10),
        b'a'..=b'z' => Some((c - b'a') as u32 + 10),
        _ => None,
    }
}

fn digits_value(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, &c| acc * BASE + char_digit(c).unwrap_or(0))
}

impl FromStr for TeamCode {
    type Err = ComputerError;

    /// Parse a code typed by the pilot; case-insensitive
    fn from_str(s: &str) -> ComputerResult<Self> {
        let s = s.trim();
        if s.len() != TEAM_CODE_LENGTH {
            return Err(ComputerError::InvalidTeamCode {
                reason: "team code must be 5 characters",
            });
        }

        let mut code = String::new();
        for c in s.bytes() {
            let digit = char_digit(c).ok_or(ComputerError::InvalidTeamCode {
                reason: "team code must be alphanumeric",
            })?;
            let _ = code.push(digit_char(digit));
        }

        Ok(Self { code })
    }
}

impl TryFrom<String<TEAM_CODE_LENGTH>> for TeamCode {
    type Error = ComputerError;

    fn try_from(value: String<TEAM_CODE_LENGTH>) -> ComputerResult<Self> {
        value.as_str().parse()
    }
}

impl From<TeamCode> for String<TEAM_CODE_LENGTH> {
    fn from(value: TeamCode) -> Self {
        value.code
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
