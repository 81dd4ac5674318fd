//! Flight Replay Example
//!
//! Replays a short synthetic flight through the engine: ground roll,
//! takeoff, a climb, a glide back and the landing.
//!
//! ## What You'll Learn
//!
//! - Wiring a `GlideComputer` with settings, waypoints and collaborators
//! - Plugging in your own flight-phase detector
//! - Scheduling the idle pass from the return value of `process_sample`
//! - Draining transition events
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_replay_flight
//! ```

use glideguard_core::{
    computers::{noop::NoAirData, AirDataComputer, SubComputers},
    derived::DerivedState,
    geo::GeoPoint,
    settings::{PlaneSettings, TeamCodeSettings},
    time::{BrokenDate, BrokenDateTime, BrokenTime},
    waypoint::{Waypoint, WaypointId, Waypoints},
    ComputerSettings, EngineConfig, GlideComputer, RawSample,
};

const HOME: GeoPoint = GeoPoint::new(46.55, 7.98);

/// Calls a flight whenever ground speed exceeds 15 m/s
struct SpeedDetector {
    last: Option<(u64, GeoPoint)>,
    inner: NoAirData,
}

impl AirDataComputer for SpeedDetector {
    fn process_basic(&mut self, raw: &RawSample, derived: &mut DerivedState, settings: &ComputerSettings) {
        self.inner.process_basic(raw, derived, settings);
    }

    fn process_vertical(&mut self, raw: &RawSample, derived: &mut DerivedState, settings: &ComputerSettings) {
        self.inner.process_vertical(raw, derived, settings);
    }

    fn flight_times(&mut self, raw: &RawSample, derived: &mut DerivedState, _: &ComputerSettings) {
        let Some(location) = raw.location else {
            return;
        };

        if let Some((clock, previous)) = self.last {
            let dt = raw.clock.saturating_sub(clock) as f64 / 1_000.0;
            if dt > 0.0 {
                let speed = previous.distance_bearing(&location).distance / dt;
                derived.flight.flying = speed > 15.0;
                derived.flight.on_ground = !derived.flight.flying;
            }
        }
        self.last = Some((raw.clock, location));
    }

    fn reset_flight(&mut self, _: &mut DerivedState, full: bool) {
        if full {
            self.last = None;
        }
    }

    fn reset_stats(&mut self) {}
}

fn main() {
    println!("GlideGuard Flight Replay Example");
    println!("================================\n");

    let mut waypoints = Waypoints::new();
    waypoints
        .insert(Waypoint::new(WaypointId::new(1), "Home", HOME))
        .expect("empty store has room");

    let mut settings = ComputerSettings {
        utc_offset_minutes: 120,
        plane: PlaneSettings::motor_glider(18.0, 6.0),
        team_code: TeamCodeSettings {
            reference_waypoint: Some(WaypointId::new(1)),
            ..Default::default()
        },
        ..Default::default()
    };
    settings
        .team_code
        .set_team_code_text("I0010")
        .expect("valid team code");

    let computers = SubComputers {
        air_data: Box::new(SpeedDetector { last: None, inner: NoAirData }),
        ..SubComputers::noop()
    };

    let mut computer = GlideComputer::new(
        settings,
        EngineConfig::default(),
        Box::new(waypoints),
        computers,
    );

    // (seconds, ground speed m/s, altitude m)
    let legs = [(10, 0.0, 600.0), (60, 30.0, 1_400.0), (60, 25.0, 700.0), (10, 0.0, 600.0)];

    let mut t = 0u64;
    let mut position = HOME;
    let mut altitude = 600.0;
    let mut idle_passes = 0;

    for (seconds, speed, target_altitude) in legs {
        let climb = (target_altitude - altitude) / seconds as f64;
        for _ in 0..seconds {
            t += 1;
            position = position.destination(45.0, speed);
            altitude += climb;

            let clock = 10 * 3_600_000 + t * 1_000;
            let utc = BrokenDateTime::new(
                BrokenDate::new(2024, 7, 14),
                BrokenTime::from_second_of_day((clock / 1_000) as i64),
            );
            let fix = RawSample::at(clock)
                .with_time(clock)
                .with_date_time(utc)
                .with_location(position)
                .with_nav_altitude(altitude)
                .with_vario(climb, climb + 0.7);

            if computer.process_sample(fix, false) {
                computer.process_idle(false);
                idle_passes += 1;
            }

            let events: Vec<_> = computer.drain_events().collect();
            for event in events {
                let local = computer.calculated().date_time_local.time;
                println!(
                    "  {:02}:{:02}:{:02}  {:?}",
                    local.hour, local.minute, local.second, event
                );
            }
        }
    }

    let calculated = computer.calculated();
    println!("\nAfter {} s ({} idle passes):", t, idle_passes);
    println!(
        "  Working band:   {:.0} .. {:.0} m (at {:.0}%)",
        calculated.working_band.height_min_working,
        calculated.working_band.height_max_working,
        calculated.working_band.height_fraction_working * 100.0
    );
    println!(
        "  Vario scale:    {:+.1} .. {:+.1} m/s",
        calculated.vario_scale.negative_bound, calculated.vario_scale.positive_bound
    );
    if let Some(code) = &calculated.team.own_code {
        println!("  Own team code:  {}", code);
    }
    if let Some(v) = calculated.team.teammate_vector {
        println!("  Team mate:      {:.1} km at {:.0}°", v.distance / 1_000.0, v.bearing);
    }
    if let Some(remaining) = calculated.fuel.remaining() {
        println!("  Fuel endurance: {:.1} h", remaining.as_secs_f64() / 3_600.0);
    }
    println!("  Trace entries:  {}", calculated.trace_history.len());
}
