//! Do-nothing collaborators
//!
//! Let the engine run on empty configuration, e.g. when replaying a flight
//! only for its team-code or trace-history output.

use super::{
    AirDataComputer, ConditionMonitor, CruiseComputer, FlightStatsSummary, LogComputer,
    Retrospective, StatsComputer, TaskComputer, WarningComputer,
};
use crate::derived::{AirspaceWarningsInfo, DerivedState};
use crate::geo::GeoPoint;
use crate::raw::RawSample;
use crate::settings::ComputerSettings;

/// Air-data computer that never reports flight
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAirData;

impl AirDataComputer for NoAirData {
    fn process_basic(&mut self, _: &RawSample, _: &mut DerivedState, _: &ComputerSettings) {}
    fn process_vertical(&mut self, _: &RawSample, _: &mut DerivedState, _: &ComputerSettings) {}
    fn flight_times(&mut self, _: &RawSample, _: &mut DerivedState, _: &ComputerSettings) {}
    fn reset_flight(&mut self, _: &mut DerivedState, _: bool) {}
    fn reset_stats(&mut self) {}
}

/// Task manager without a task
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTask;

impl TaskComputer for NoTask {
    fn process_basic_task(&mut self, _: &RawSample, _: &mut DerivedState, _: &ComputerSettings, _: bool) {}
    fn process_more_task(&mut self, _: &RawSample, _: &mut DerivedState, _: &ComputerSettings, _: bool) {}
    fn process_auto_task(&mut self, _: &RawSample, _: &mut DerivedState, _: &ComputerSettings, _: bool) {}
    fn process_idle(&mut self, _: &RawSample, _: &mut DerivedState, _: &ComputerSettings, _: bool) {}
    fn reset_flight(&mut self, _: bool) {}
}

/// Statistics computer reporting an empty flight
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStats;

impl StatsComputer for NoStats {
    fn process_climb_events(&mut self, _: &RawSample, _: &DerivedState) {}
    fn do_logging(&mut self, _: &RawSample, _: &DerivedState) {}
    fn start_task(&mut self, _: &RawSample) {}
    fn reset_flight(&mut self, _: bool) {}

    fn flight_stats(&self) -> FlightStatsSummary {
        FlightStatsSummary::default()
    }
}

/// No airspace database
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWarnings;

impl WarningComputer for NoWarnings {
    fn update(
        &mut self,
        _: &ComputerSettings,
        _: &RawSample,
        _: &DerivedState,
        _: &mut AirspaceWarningsInfo,
        _: bool,
    ) {
    }

    fn reset(&mut self) {}
}

/// No alerts
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMonitor;

impl ConditionMonitor for NoMonitor {
    fn update(&mut self, _: &RawSample, _: &DerivedState, _: &ComputerSettings) {}
}

/// No flight recorder
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLog;

impl LogComputer for NoLog {
    fn run(&mut self, _: &RawSample, _: &DerivedState, _: &ComputerSettings) {}
    fn start_task(&mut self, _: &RawSample) {}
    fn set_fast_logging(&mut self) {}
    fn reset(&mut self) {}
}

/// No track sampling
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRetrospective;

impl Retrospective for NoRetrospective {
    fn update_sample(&mut self, _: &GeoPoint) {}
    fn reset(&mut self) {}
}

/// No cruise computations
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCruise;

impl CruiseComputer for NoCruise {
    fn compute(&mut self, _: &RawSample, _: &mut DerivedState, _: &ComputerSettings) {}
    fn reset(&mut self) {}
}
