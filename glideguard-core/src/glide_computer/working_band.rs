//! Display-range calculators
//!
//! Working band, vario scale and fuel endurance are derived from flight
//! statistics and the current settings rather than from sensor data, and
//! are cheap enough to recompute on every tick.
//!
//! ```text
//! height_max_working ─┬─  max(stats max, nav altitude)
//!                     │
//!                 ●   │   ← nav altitude, fraction = 0.7
//!                     │
//! height_min_working ─┴─  max(stats min, terrain base + safety height)
//! ```

use core::time::Duration;

use crate::computers::FlightStatsSummary;
use crate::constants::time::SECONDS_PER_HOUR;
use crate::derived::{DerivedState, FuelInfo, VarioScale};
use crate::raw::RawSample;
use crate::settings::{ComputerSettings, PlaneSettings, PolarSettings};
use crate::time::Timestamp;

/// Recompute the working band and where the aircraft sits in it
///
/// `height_max_working >= height_min_working` holds on return.
pub(super) fn calculate_working_band(
    derived: &mut DerivedState,
    raw: &RawSample,
    settings: &ComputerSettings,
    stats: &FlightStatsSummary,
) {
    let mut min = finite_or_zero(stats.min_working_height);
    if derived.terrain.terrain_base_valid {
        let floor = derived.terrain.terrain_base_fallback() + settings.task.safety_height_arrival;
        if floor.is_finite() {
            min = min.max(floor);
        }
    }

    // f64::max ignores a NaN operand
    let mut max = min.max(stats.max_working_height);

    let band = &mut derived.working_band;
    band.height_min_working = min;
    band.height_max_working = max;
    band.height_fraction_working = 1.0;

    if let Some(altitude) = raw.nav_altitude() {
        max = max.max(altitude);
        band.height_max_working = max;
        band.height_fraction_working = band.fraction(altitude);
    }
}

/// Recompute the vario gauge range
pub(super) fn calculate_vario_scale(
    scale: &mut VarioScale,
    polar: &PolarSettings,
    stats: &FlightStatsSummary,
) {
    scale.positive_bound = stats.vario_scale_positive.max(polar.mc);
    scale.negative_bound = stats.vario_scale_negative.min(-polar.sink_at_best_ld);
}

/// Recompute fuel endurance
///
/// Pure gliders (zero consumption) and nonsensical negative rates leave
/// the estimate untouched, to expire on its own.
pub(super) fn calculate_fuel(fuel: &mut FuelInfo, plane: &PlaneSettings, now: Timestamp) {
    let consumption = plane.fuel_consumption;
    if consumption < 0.0 || consumption.abs() <= f64::EPSILON {
        return;
    }

    let seconds = plane.fuel_onboard / consumption * SECONDS_PER_HOUR as f64;
    let Ok(remaining) = Duration::try_from_secs_f64(seconds) else {
        return;
    };

    fuel.burn_time_remaining = remaining;
    fuel.available.update(now);
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(min: f64, max: f64) -> FlightStatsSummary {
        FlightStatsSummary {
            min_working_height: min,
            max_working_height: max,
            ..Default::default()
        }
    }

    #[test]
    fn band_from_statistics() {
        let mut derived = DerivedState::new();
        let raw = RawSample::at(0).with_nav_altitude(1_200.0);
        calculate_working_band(&mut derived, &raw, &ComputerSettings::default(), &stats(400.0, 1_400.0));

        let band = derived.working_band;
        assert_eq!(band.height_min_working, 400.0);
        assert_eq!(band.height_max_working, 1_400.0);
        assert!((band.height_fraction_working - 0.8).abs() < 1e-9);
    }

    #[test]
    fn terrain_raises_floor() {
        let mut derived = DerivedState::new();
        derived.terrain.terrain_base_valid = true;
        derived.terrain.terrain_base = 600.0;
        let settings = ComputerSettings::default();

        calculate_working_band(&mut derived, &RawSample::at(0), &settings, &stats(400.0, 800.0));
        let band = derived.working_band;
        assert_eq!(band.height_min_working, 600.0 + settings.task.safety_height_arrival);
        assert!(band.height_max_working >= band.height_min_working);
        assert_eq!(band.height_fraction_working, 1.0);
    }

    #[test]
    fn altitude_above_band_extends_it() {
        let mut derived = DerivedState::new();
        let raw = RawSample::at(0).with_nav_altitude(2_000.0);
        calculate_working_band(&mut derived, &raw, &ComputerSettings::default(), &stats(500.0, 1_500.0));
        assert_eq!(derived.working_band.height_max_working, 2_000.0);
        assert_eq!(derived.working_band.height_fraction_working, 1.0);
    }

    #[test]
    fn vario_scale_covers_polar() {
        let mut scale = VarioScale::default();
        let polar = PolarSettings { mc: 2.0, sink_at_best_ld: 0.7 };
        let summary = FlightStatsSummary {
            vario_scale_positive: 1.5,
            vario_scale_negative: -3.0,
            ..Default::default()
        };

        calculate_vario_scale(&mut scale, &polar, &summary);
        assert_eq!(scale.positive_bound, 2.0);
        assert_eq!(scale.negative_bound, -3.0);
    }

    #[test]
    fn fuel_guard_skips_degenerate_rates() {
        for consumption in [0.0, -1.0, f64::EPSILON / 2.0] {
            let mut fuel = FuelInfo::default();
            calculate_fuel(&mut fuel, &PlaneSettings::motor_glider(10.0, consumption), 0);
            assert!(fuel.remaining().is_none());
        }
    }

    #[test]
    fn fuel_endurance() {
        let mut fuel = FuelInfo::default();
        calculate_fuel(&mut fuel, &PlaneSettings::motor_glider(10.0, 5.0), 1_000);
        assert_eq!(fuel.remaining(), Some(Duration::from_secs(2 * 3600)));
    }
}
