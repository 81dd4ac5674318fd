//! Spherical Earth Geodesy
//!
//! Team-code and team-mate computations only need distance and bearing
//! between two points a few tens of kilometres apart, so a spherical Earth
//! (FAI radius) is accurate to well below the 100 m resolution of a team
//! code.
//!
//! ```text
//! distance:  haversine formula
//! bearing:   initial great-circle course, 0° = north, clockwise
//! ```
//!
//! `libm` provides the trigonometry so the module works without `std`.

/// FAI sphere radius in metres
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A location in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude, positive north
    pub latitude: f64,
    /// Longitude, positive east
    pub longitude: f64,
}

/// Distance and initial bearing from one point to another
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoVector {
    /// Great-circle distance in metres
    pub distance: f64,
    /// Initial bearing in degrees, 0..360
    pub bearing: f64,
}

impl GeoPoint {
    /// Create a point from decimal degrees
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Are both coordinates finite and in range?
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() <= 90.0
            && self.longitude.abs() <= 180.0
    }

    /// Distance and bearing from `self` to `other`
    pub fn distance_bearing(&self, other: &GeoPoint) -> GeoVector {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();

        let sin_dlat = libm::sin(dlat / 2.0);
        let sin_dlon = libm::sin(dlon / 2.0);
        let a = sin_dlat * sin_dlat + libm::cos(lat1) * libm::cos(lat2) * sin_dlon * sin_dlon;
        let c = 2.0 * libm::atan2(libm::sqrt(a), libm::sqrt(1.0 - a));

        let y = libm::sin(dlon) * libm::cos(lat2);
        let x = libm::cos(lat1) * libm::sin(lat2)
            - libm::sin(lat1) * libm::cos(lat2) * libm::cos(dlon);

        GeoVector {
            distance: EARTH_RADIUS_M * c,
            bearing: normalize_bearing(libm::atan2(y, x).to_degrees()),
        }
    }

    /// The point `distance` metres away along initial `bearing` degrees
    pub fn destination(&self, bearing: f64, distance: f64) -> GeoPoint {
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let brg = bearing.to_radians();
        let delta = distance / EARTH_RADIUS_M;

        let lat2 = libm::asin(
            libm::sin(lat1) * libm::cos(delta) + libm::cos(lat1) * libm::sin(delta) * libm::cos(brg),
        );
        let lon2 = lon1
            + libm::atan2(
                libm::sin(brg) * libm::sin(delta) * libm::cos(lat1),
                libm::cos(delta) - libm::sin(lat1) * libm::sin(lat2),
            );

        GeoPoint {
            latitude: lat2.to_degrees(),
            longitude: normalize_longitude(lon2.to_degrees()),
        }
    }
}

/// Map any angle in degrees onto 0..360
pub fn normalize_bearing(degrees: f64) -> f64 {
    let b = degrees % 360.0;
    if b < 0.0 { b + 360.0 } else { b }
}

fn normalize_longitude(degrees: f64) -> f64 {
    let l = (degrees + 540.0) % 360.0 - 180.0;
    if l < -180.0 { l + 360.0 } else { l }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_degree_of_latitude() {
        let a = GeoPoint::new(45.0, 7.0);
        let b = GeoPoint::new(46.0, 7.0);
        let v = a.distance_bearing(&b);
        assert!((v.distance - 111_195.0).abs() < 10.0);
        assert!(v.bearing.abs() < 1e-6 || (v.bearing - 360.0).abs() < 1e-6);
    }

    #[test]
    fn eastward_bearing() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        assert!((a.distance_bearing(&b).bearing - 90.0).abs() < 1e-6);
    }

    #[test]
    fn destination_round_trips_vector() {
        let origin = GeoPoint::new(47.5, 8.2);
        let target = origin.destination(235.0, 42_000.0);
        let v = origin.distance_bearing(&target);
        assert!((v.distance - 42_000.0).abs() < 1.0);
        assert!((v.bearing - 235.0).abs() < 0.01);
    }

    #[test]
    fn bearing_normalisation() {
        assert_eq!(normalize_bearing(-90.0), 270.0);
        assert_eq!(normalize_bearing(720.0), 0.0);
        assert!(!GeoPoint::new(0.0, 181.0).is_valid());
    }
}
