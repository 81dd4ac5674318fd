//! Scripted collaborators
//!
//! Every fake appends its call name to `World::calls` and reads its scripted
//! behaviour from the same `World`, so a test can drive the flight phase or
//! the task state tick by tick and check the order the orchestrator used.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glideguard_core::computers::{
    AirDataComputer, ConditionMonitor, CruiseComputer, FlightStatsSummary, LogComputer,
    Retrospective, StatsComputer, SubComputers, TaskComputer, WarningComputer,
};
use glideguard_core::derived::{AirspaceWarningsInfo, DerivedState};
use glideguard_core::geo::GeoPoint;
use glideguard_core::waypoint::{Waypoint, WaypointId, WaypointStore, Waypoints};
use glideguard_core::{ComputerSettings, RawSample};

/// Shared script and call record
#[derive(Debug, Default)]
pub struct World {
    /// Every collaborator call, in order
    pub calls: Vec<&'static str>,
    /// `full` flag of each air-data `reset_flight` call
    pub air_data_resets: Vec<bool>,
    /// `exhaustive` flag of each warning update
    pub warning_updates: Vec<bool>,
    /// Locations offered to the retrospective sampler
    pub retrospective_samples: Vec<GeoPoint>,

    /// Flight phase reported by successive `flight_times` calls; the last
    /// value repeats once the script runs out
    pub flying_script: Vec<bool>,
    flying_index: usize,
    /// Ordered-task finish flag reported by successive `process_basic_task`
    /// calls; the last value repeats
    pub finished_script: Vec<bool>,
    finished_index: usize,
    /// Working-band top seen by each `process_more_task` call
    pub more_task_band_tops: Vec<f64>,

    /// Statistics returned by the stats computer
    pub stats: FlightStatsSummary,
    /// Terrain base the air-data computer reports, if any
    pub terrain_base: Option<f64>,
}

/// Handle shared between a test and its fakes
pub type Shared = Rc<RefCell<World>>;

impl World {
    /// A fresh shared world
    pub fn shared() -> Shared {
        Rc::new(RefCell::new(World::default()))
    }

    /// Number of recorded calls named `name`
    pub fn count(&self, name: &str) -> usize {
        self.calls.iter().filter(|c| **c == name).count()
    }

    fn next_flying(&mut self) -> bool {
        let value = scripted(&self.flying_script, self.flying_index);
        self.flying_index += 1;
        value
    }

    fn next_finished(&mut self) -> bool {
        let value = scripted(&self.finished_script, self.finished_index);
        self.finished_index += 1;
        value
    }
}

fn scripted(script: &[bool], index: usize) -> bool {
    script
        .get(index)
        .or_else(|| script.last())
        .copied()
        .unwrap_or(false)
}

/// Build a full collaborator set sharing `world`
pub fn sub_computers(world: &Shared) -> SubComputers {
    SubComputers {
        air_data: Box::new(FakeAirData(world.clone())),
        task: Box::new(FakeTask(world.clone())),
        stats: Box::new(FakeStats(world.clone())),
        warnings: Box::new(FakeWarnings(world.clone())),
        monitors: Box::new(FakeMonitor { world: world.clone(), name: "monitors.update" }),
        idle_monitors: Box::new(FakeMonitor { world: world.clone(), name: "idle_monitors.update" }),
        log: Box::new(FakeLog(world.clone())),
        retrospective: Box::new(FakeRetrospective(world.clone())),
        cruise: Box::new(FakeCruise(world.clone())),
    }
}

struct FakeAirData(Shared);

impl AirDataComputer for FakeAirData {
    fn process_basic(&mut self, raw: &RawSample, derived: &mut DerivedState, _: &ComputerSettings) {
        let mut w = self.0.borrow_mut();
        w.calls.push("air_data.process_basic");

        if let Some(base) = w.terrain_base {
            derived.terrain.terrain_base_valid = true;
            derived.terrain.terrain_base = base;
        }
        if raw.brutto_vario.is_some() {
            derived.climb.available.update(raw.clock);
        }
    }

    fn process_vertical(&mut self, _: &RawSample, _: &mut DerivedState, _: &ComputerSettings) {
        self.0.borrow_mut().calls.push("air_data.process_vertical");
    }

    fn flight_times(&mut self, raw: &RawSample, derived: &mut DerivedState, _: &ComputerSettings) {
        let mut w = self.0.borrow_mut();
        w.calls.push("air_data.flight_times");

        let flying = w.next_flying();
        if flying && !derived.flight.flying {
            derived.flight.takeoff_time = Some(raw.clock);
        }
        if !flying && derived.flight.flying {
            derived.flight.landing_time = Some(raw.clock);
        }
        derived.flight.flying = flying;
        derived.flight.on_ground = !flying;
    }

    fn reset_flight(&mut self, _: &mut DerivedState, full: bool) {
        let mut w = self.0.borrow_mut();
        w.calls.push("air_data.reset_flight");
        w.air_data_resets.push(full);
    }

    fn reset_stats(&mut self) {
        self.0.borrow_mut().calls.push("air_data.reset_stats");
    }
}

struct FakeTask(Shared);

impl TaskComputer for FakeTask {
    fn process_basic_task(&mut self, _: &RawSample, derived: &mut DerivedState, _: &ComputerSettings, _: bool) {
        let mut w = self.0.borrow_mut();
        w.calls.push("task.process_basic_task");
        derived.ordered_task_stats.task_finished = w.next_finished();
    }

    fn process_more_task(&mut self, _: &RawSample, derived: &mut DerivedState, _: &ComputerSettings, _: bool) {
        let mut w = self.0.borrow_mut();
        w.calls.push("task.process_more_task");
        w.more_task_band_tops.push(derived.working_band.height_max_working);
    }

    fn process_auto_task(&mut self, _: &RawSample, _: &mut DerivedState, _: &ComputerSettings, _: bool) {
        self.0.borrow_mut().calls.push("task.process_auto_task");
    }

    fn process_idle(&mut self, _: &RawSample, _: &mut DerivedState, _: &ComputerSettings, _: bool) {
        self.0.borrow_mut().calls.push("task.process_idle");
    }

    fn reset_flight(&mut self, _: bool) {
        self.0.borrow_mut().calls.push("task.reset_flight");
    }
}

struct FakeStats(Shared);

impl StatsComputer for FakeStats {
    fn process_climb_events(&mut self, _: &RawSample, _: &DerivedState) {
        self.0.borrow_mut().calls.push("stats.process_climb_events");
    }

    fn do_logging(&mut self, _: &RawSample, _: &DerivedState) {
        self.0.borrow_mut().calls.push("stats.do_logging");
    }

    fn start_task(&mut self, _: &RawSample) {
        self.0.borrow_mut().calls.push("stats.start_task");
    }

    fn reset_flight(&mut self, _: bool) {
        self.0.borrow_mut().calls.push("stats.reset_flight");
    }

    fn flight_stats(&self) -> FlightStatsSummary {
        self.0.borrow().stats
    }
}

struct FakeWarnings(Shared);

impl WarningComputer for FakeWarnings {
    fn update(
        &mut self,
        _: &ComputerSettings,
        raw: &RawSample,
        _: &DerivedState,
        warnings: &mut AirspaceWarningsInfo,
        exhaustive: bool,
    ) {
        let mut w = self.0.borrow_mut();
        w.calls.push("warnings.update");
        w.warning_updates.push(exhaustive);
        warnings.active += 1;
        warnings.latest.update(raw.clock);
    }

    fn reset(&mut self) {
        self.0.borrow_mut().calls.push("warnings.reset");
    }
}

struct FakeMonitor {
    world: Shared,
    name: &'static str,
}

impl ConditionMonitor for FakeMonitor {
    fn update(&mut self, _: &RawSample, _: &DerivedState, _: &ComputerSettings) {
        self.world.borrow_mut().calls.push(self.name);
    }
}

struct FakeLog(Shared);

impl LogComputer for FakeLog {
    fn run(&mut self, _: &RawSample, _: &DerivedState, _: &ComputerSettings) {
        self.0.borrow_mut().calls.push("log.run");
    }

    fn start_task(&mut self, _: &RawSample) {
        self.0.borrow_mut().calls.push("log.start_task");
    }

    fn set_fast_logging(&mut self) {
        self.0.borrow_mut().calls.push("log.set_fast_logging");
    }

    fn reset(&mut self) {
        self.0.borrow_mut().calls.push("log.reset");
    }
}

struct FakeRetrospective(Shared);

impl Retrospective for FakeRetrospective {
    fn update_sample(&mut self, location: &GeoPoint) {
        let mut w = self.0.borrow_mut();
        w.calls.push("retrospective.update_sample");
        w.retrospective_samples.push(*location);
    }

    fn reset(&mut self) {
        self.0.borrow_mut().calls.push("retrospective.reset");
    }
}

struct FakeCruise(Shared);

impl CruiseComputer for FakeCruise {
    fn compute(&mut self, _: &RawSample, _: &mut DerivedState, _: &ComputerSettings) {
        self.0.borrow_mut().calls.push("cruise.compute");
    }

    fn reset(&mut self) {
        self.0.borrow_mut().calls.push("cruise.reset");
    }
}

/// Waypoint store counting lookups
pub struct CountingStore {
    inner: Waypoints,
    lookups: Rc<Cell<usize>>,
}

impl CountingStore {
    /// Wrap `inner`; the returned counter sees every lookup
    pub fn new(inner: Waypoints) -> (Self, Rc<Cell<usize>>) {
        let lookups = Rc::new(Cell::new(0));
        (
            Self {
                inner,
                lookups: lookups.clone(),
            },
            lookups,
        )
    }

    /// An empty store
    pub fn empty() -> (Self, Rc<Cell<usize>>) {
        Self::new(Waypoints::new())
    }

    /// Add a waypoint after construction
    pub fn with(mut self, waypoint: Waypoint) -> Self {
        self.inner.insert(waypoint).expect("store has room");
        self
    }
}

impl WaypointStore for CountingStore {
    fn lookup_id(&self, id: WaypointId) -> Option<&Waypoint> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.lookup_id(id)
    }
}
