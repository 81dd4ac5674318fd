//! Derived State
//!
//! ## Overview
//!
//! `DerivedState` is everything the engine has worked out from the raw
//! samples so far. It is composed of independent concern groups, each a
//! plain record with its own `clear()`:
//!
//! ```text
//! DerivedState
//! ├── date_time_local          local time from UTC + offset
//! ├── flight                   flying / grounded   (air-data computer)
//! ├── climb, circling          vario and thermal   (air-data computer)
//! ├── wind, atmosphere         slow environment    (air-data computer)
//! ├── terrain                  clearance           (air-data computer)
//! ├── task_stats               active task         (task manager)
//! ├── ordered_task_stats       ordered task        (task manager)
//! ├── working_band, vario_scale                    (orchestrator)
//! ├── team, fuel, trace_history                    (orchestrator)
//! ├── airspace_warnings        summary             (warning computer)
//! └── wave                     wave detection      (air-data computer)
//! ```
//!
//! Sub-computers keep their own accumulators privately; this record is the
//! externally visible projection only. It is produced from one raw sample
//! plus the previous `DerivedState`, so the engine mutates it in place.
//!
//! ## Freshness
//!
//! Fields guarded by a [`Validity`](crate::Validity) are expired by
//! [`DerivedState::expire`] at the start of every tick. A consumer that
//! finds a gate valid may use the value without knowing its maximum age.

mod flight;
mod fuel;
mod sensors;
mod stats;
mod task;
mod team;
mod terrain;
mod trace;

pub use flight::FlyingState;
pub use fuel::FuelInfo;
pub use sensors::{
    AirspaceWarningsInfo, AtmosphereInfo, CirclingInfo, ClimbInfo, WaveInfo, WindInfo, WindVector,
};
pub use stats::{VarioScale, WorkingBand};
pub use task::TaskStats;
pub use team::TeamInfo;
pub use terrain::TerrainInfo;
pub use trace::{TraceEntry, TraceHistory};

use crate::constants::expiry;
use crate::time::{BrokenDateTime, Timestamp};

/// Everything derived from the raw samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedState {
    /// Local date and time of the last sample
    pub date_time_local: BrokenDateTime,
    /// Flight phase
    pub flight: FlyingState,
    /// Vario and climb averages
    pub climb: ClimbInfo,
    /// Circling detection
    pub circling: CirclingInfo,
    /// Wind estimates
    pub wind: WindInfo,
    /// QNH, sun, auto-MC
    pub atmosphere: AtmosphereInfo,
    /// Terrain clearance
    pub terrain: TerrainInfo,
    /// Team-mate tracking
    pub team: TeamInfo,
    /// Statistics of the active task
    pub task_stats: TaskStats,
    /// Statistics of the ordered task
    pub ordered_task_stats: TaskStats,
    /// Altitude band the pilot has been working in
    pub working_band: WorkingBand,
    /// Vario gauge range
    pub vario_scale: VarioScale,
    /// Fuel endurance
    pub fuel: FuelInfo,
    /// Recent samples for trend displays
    pub trace_history: TraceHistory,
    /// Airspace warning summary
    pub airspace_warnings: AirspaceWarningsInfo,
    /// Wave detection
    pub wave: WaveInfo,
}

impl DerivedState {
    /// A fully cleared state
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every concern group
    pub fn reset(&mut self) {
        self.date_time_local = BrokenDateTime::invalid();
        self.flight.clear();
        self.climb.clear();
        self.circling.clear();
        self.wind.clear();
        self.atmosphere.clear();
        self.terrain.clear();
        self.team.clear();
        self.task_stats.clear();
        self.ordered_task_stats.clear();
        self.working_band.clear();
        self.vario_scale.clear();
        self.fuel.clear();
        self.trace_history.clear();
        self.airspace_warnings.clear();
        self.wave.clear();
    }

    /// Clear the groups that describe one flight
    ///
    /// Wind, atmosphere, terrain and team tracking survive: they describe
    /// the environment, not the flight.
    pub fn reset_flight_statistics(&mut self) {
        self.climb.clear();
        self.circling.clear();
        self.wave.clear();
        self.trace_history.clear();
    }

    /// Expire every Validity-guarded field older than its maximum age
    pub fn expire(&mut self, now: Timestamp) {
        sensors::expire_all(
            now,
            &mut self.climb,
            &mut self.wind,
            &mut self.atmosphere,
            &mut self.airspace_warnings,
            &mut self.wave,
        );

        self.fuel
            .available
            .expire_if_stale(now, expiry::FUEL_ESTIMATE_MAX_AGE_MS);

        self.team
            .own_code_available
            .expire_if_stale(now, expiry::OWN_TEAM_CODE_MAX_AGE_MS);
        if !self.team.own_code_available.is_valid() {
            self.team.own_code = None;
        }
    }

    /// Mark the task start in the circling records
    pub fn start_task(&mut self, now: Timestamp) {
        if self.circling.circling {
            self.circling.climb_start_time = Some(now);
        } else {
            self.circling.cruise_start_time = Some(now);
        }
    }
}
