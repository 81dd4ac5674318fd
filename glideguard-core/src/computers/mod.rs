//! Sub-computer interfaces
//!
//! The orchestrator drives a fixed set of specialised computers. Their
//! numerics (polar solving, wind filters, circling classification, airspace
//! intersection, contest scoring, IGC logging) live outside this crate; the
//! traits below are the narrow entry points the orchestrator calls, in the
//! order documented on [`GlideComputer::process_sample`].
//!
//! Keep them simple: one call per tick or per idle slice, synchronous and
//! bounded, no return values. Results go into the `DerivedState` passed in.
//!
//! [`GlideComputer::process_sample`]: crate::GlideComputer::process_sample

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use crate::derived::{AirspaceWarningsInfo, DerivedState};
use crate::geo::GeoPoint;
use crate::raw::RawSample;
use crate::settings::ComputerSettings;

pub mod noop;

/// Primary sensor computations and the flight-phase detector
pub trait AirDataComputer {
    /// Altitude, vertical speed, terrain clearance and basic kinematics
    fn process_basic(
        &mut self,
        raw: &RawSample,
        derived: &mut DerivedState,
        settings: &ComputerSettings,
    );

    /// Wind, energy height and other values built on `process_basic`
    fn process_vertical(
        &mut self,
        raw: &RawSample,
        derived: &mut DerivedState,
        settings: &ComputerSettings,
    );

    /// Flight-phase classification; writes `derived.flight`
    fn flight_times(
        &mut self,
        raw: &RawSample,
        derived: &mut DerivedState,
        settings: &ComputerSettings,
    );

    /// Drop per-flight accumulators; `full` also drops long-term ones
    fn reset_flight(&mut self, derived: &mut DerivedState, full: bool);

    /// Drop accumulated statistics at task start
    fn reset_stats(&mut self);
}

/// Capability onto the task manager
///
/// Task definitions and scoring stay inside the implementation; it only
/// writes the task statistics groups of `DerivedState`.
pub trait TaskComputer {
    /// Progress along the active task
    fn process_basic_task(
        &mut self,
        raw: &RawSample,
        derived: &mut DerivedState,
        settings: &ComputerSettings,
        force: bool,
    );

    /// Task statistics depending on `process_basic_task` and the working band
    fn process_more_task(
        &mut self,
        raw: &RawSample,
        derived: &mut DerivedState,
        settings: &ComputerSettings,
        force: bool,
    );

    /// Automatic turnpoint advance and auto-MacCready
    fn process_auto_task(
        &mut self,
        raw: &RawSample,
        derived: &mut DerivedState,
        settings: &ComputerSettings,
        force: bool,
    );

    /// Expensive work such as contest optimisation
    fn process_idle(
        &mut self,
        raw: &RawSample,
        derived: &mut DerivedState,
        settings: &ComputerSettings,
        exhaustive: bool,
    );

    /// Forget task progress
    fn reset_flight(&mut self, full: bool);
}

/// Flight statistics the orchestrator reads back
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlightStatsSummary {
    /// Lowest altitude worked since takeoff (m)
    pub min_working_height: f64,
    /// Highest altitude worked since takeoff (m)
    pub max_working_height: f64,
    /// Strongest climb seen (m/s)
    pub vario_scale_positive: f64,
    /// Strongest sink seen (m/s, negative)
    pub vario_scale_negative: f64,
}

/// Long-term flight statistics (thermal history, altitude range)
pub trait StatsComputer {
    /// Record climb and thermal events
    fn process_climb_events(&mut self, raw: &RawSample, derived: &DerivedState);

    /// Append to the statistics log
    fn do_logging(&mut self, raw: &RawSample, derived: &DerivedState);

    /// Restart statistics at task start
    fn start_task(&mut self, raw: &RawSample);

    /// Forget statistics
    fn reset_flight(&mut self, full: bool);

    /// Current summary
    fn flight_stats(&self) -> FlightStatsSummary;
}

/// Airspace warning manager
pub trait WarningComputer {
    /// Recompute warnings into `warnings`
    fn update(
        &mut self,
        settings: &ComputerSettings,
        raw: &RawSample,
        derived: &DerivedState,
        warnings: &mut AirspaceWarningsInfo,
        exhaustive: bool,
    );

    /// Drop all warnings
    fn reset(&mut self);
}

/// Threshold-crossing alerts (final glide, thermal band, wind change...)
pub trait ConditionMonitor {
    /// Check conditions for this tick
    fn update(&mut self, raw: &RawSample, derived: &DerivedState, settings: &ComputerSettings);
}

/// Flight recorder
pub trait LogComputer {
    /// Log a fix if due
    fn run(&mut self, raw: &RawSample, derived: &DerivedState, settings: &ComputerSettings);

    /// Mark the task start in the log
    fn start_task(&mut self, raw: &RawSample);

    /// Log at the fast cadence for a while
    fn set_fast_logging(&mut self);

    /// Forget logger state
    fn reset(&mut self);
}

/// Track sampler for retrospective analysis
pub trait Retrospective {
    /// Offer the current location
    fn update_sample(&mut self, location: &GeoPoint);

    /// Drop the sampled track
    fn reset(&mut self);
}

/// Cruise and cross-country computations
pub trait CruiseComputer {
    /// Process one tick
    fn compute(&mut self, raw: &RawSample, derived: &mut DerivedState, settings: &ComputerSettings);

    /// Forget accumulated state
    fn reset(&mut self);
}

/// The full set of collaborators owned by one `GlideComputer`
pub struct SubComputers {
    /// Air data and flight phase
    pub air_data: Box<dyn AirDataComputer>,
    /// Task manager
    pub task: Box<dyn TaskComputer>,
    /// Flight statistics
    pub stats: Box<dyn StatsComputer>,
    /// Airspace warnings
    pub warnings: Box<dyn WarningComputer>,
    /// Condition monitors run every tick
    pub monitors: Box<dyn ConditionMonitor>,
    /// Condition monitors run in the idle pass
    pub idle_monitors: Box<dyn ConditionMonitor>,
    /// Flight recorder
    pub log: Box<dyn LogComputer>,
    /// Retrospective sampler
    pub retrospective: Box<dyn Retrospective>,
    /// Cruise / cross-country computer
    pub cruise: Box<dyn CruiseComputer>,
}

impl SubComputers {
    /// Collaborators that do nothing
    pub fn noop() -> Self {
        Self {
            air_data: Box::new(noop::NoAirData),
            task: Box::new(noop::NoTask),
            stats: Box::new(noop::NoStats),
            warnings: Box::new(noop::NoWarnings),
            monitors: Box::new(noop::NoMonitor),
            idle_monitors: Box::new(noop::NoMonitor),
            log: Box::new(noop::NoLog),
            retrospective: Box::new(noop::NoRetrospective),
            cruise: Box::new(noop::NoCruise),
        }
    }
}

impl Default for SubComputers {
    fn default() -> Self {
        Self::noop()
    }
}
