//! The Orchestrator
//!
//! ## Overview
//!
//! `GlideComputer` owns the raw/derived state pair and the sub-computers,
//! and decides when and in what order each of them runs. Later steps read
//! what earlier steps wrote in the same tick, so the order below is a
//! correctness requirement:
//!
//! ```text
//! process_sample(raw, force)
//!  1. local time            UTC + offset
//!  2. expire                stale Validity gates
//!  3. air data              altitude, vario, terrain
//!  4. task (basic)          ──► finish edge: TaskFinished, save finish
//!  5. working band          needs 3 + statistics
//!  6. task (more + auto)    needs 3..5
//!  7. air data (vertical)   wind, energy height
//!  8. climb events          needs 7
//!  9. cruise
//! 10. own team code         throttled, 10 s
//! 11. team mate             every tick
//! 12. trace history         ≥ 500 ms GPS time; warp clears
//! 13. vario scale
//! 14. condition monitors
//! 15. fuel                  skipped for zero/negative consumption
//! 16. flight phase          ──► Takeoff / Landing edges
//!  => idle pass due?        every 500 ms of sample clock
//! ```
//!
//! ## Failure Model
//!
//! A tick never fails. Missing inputs leave the dependent fields stale,
//! an unresolvable team reference skips team computations for that tick,
//! and a backward GPS time jump clears the trace history.
//!
//! ## Concurrency
//!
//! `process_sample` and `process_idle` take `&mut self` and are meant to be
//! driven from one execution context. All throttle state is per instance,
//! so several computers (live and replay, say) can coexist.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

mod events;
mod team;
mod working_band;

pub use events::GlideEvent;

use crate::clock::{DeltaTime, PeriodClock, TimeStep};
use crate::computers::SubComputers;
use crate::derived::DerivedState;
use crate::errors::ComputerResult;
use crate::raw::RawSample;
use crate::settings::{ComputerSettings, EngineConfig};
use crate::time::BrokenDateTime;
use crate::waypoint::WaypointStore;

use events::EventQueue;
use team::TeamTracker;

/// Flight-data derivation engine
pub struct GlideComputer {
    settings: ComputerSettings,
    config: EngineConfig,
    waypoints: Box<dyn WaypointStore>,
    computers: SubComputers,

    /// Most recent sample, kept for the idle pass
    basic: RawSample,
    calculated: DerivedState,

    /// Derived state as it was at the finish line
    finish: Option<DerivedState>,

    team: TeamTracker,
    idle_clock: PeriodClock,
    trace_history_time: DeltaTime,
    events: EventQueue,
}

impl GlideComputer {
    /// Create a computer in the fully reset state
    ///
    /// Records [`GlideEvent::ComputerReady`].
    pub fn new(
        settings: ComputerSettings,
        config: EngineConfig,
        waypoints: Box<dyn WaypointStore>,
        computers: SubComputers,
    ) -> Self {
        let mut computer = Self {
            settings,
            config,
            waypoints,
            computers,
            basic: RawSample::default(),
            calculated: DerivedState::new(),
            finish: None,
            team: TeamTracker::default(),
            idle_clock: PeriodClock::new(),
            trace_history_time: DeltaTime::new(),
            events: EventQueue::default(),
        };
        computer.initialise();
        computer.events.push(GlideEvent::ComputerReady);
        computer
    }

    /// Current settings snapshot
    pub fn settings(&self) -> &ComputerSettings {
        &self.settings
    }

    /// Install a new settings snapshot if it validates
    ///
    /// On error the previous snapshot stays in effect.
    pub fn set_settings(&mut self, settings: ComputerSettings) -> ComputerResult<()> {
        if let Err(e) = settings.validate() {
            log_warn!("Settings rejected: {}", e);
            return Err(e);
        }
        self.settings = settings;
        Ok(())
    }

    /// Engine cadence
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the waypoint store
    ///
    /// The team reference is looked up again on the next tick. The own-code
    /// throttle keeps running.
    pub fn set_waypoints(&mut self, waypoints: Box<dyn WaypointStore>) {
        self.waypoints = waypoints;
        self.team.forget_reference();
    }

    /// The last raw sample processed
    pub fn basic(&self) -> &RawSample {
        &self.basic
    }

    /// The derived state after the last completed tick or idle pass
    pub fn calculated(&self) -> &DerivedState {
        &self.calculated
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> impl Iterator<Item = GlideEvent> + '_ {
        core::iter::from_fn(move || self.events.pop())
    }

    /// Process one sample
    ///
    /// `force` is handed to the task manager to bypass its own rate guards,
    /// e.g. while replaying. Returns `true` when the idle interval has
    /// elapsed and the caller should schedule [`process_idle`].
    ///
    /// [`process_idle`]: GlideComputer::process_idle
    pub fn process_sample(&mut self, raw: RawSample, force: bool) -> bool {
        self.basic = raw;

        let last_flying = self.calculated.flight.flying;
        let clock = self.basic.clock;

        let basic = &self.basic;
        let calculated = &mut self.calculated;
        let settings = &self.settings;
        let c = &mut self.computers;

        // 1. Local time; without GPS time it is fully invalid
        calculated.date_time_local = if basic.time_available() {
            basic.date_time_utc.to_local(settings.utc_offset_minutes)
        } else {
            BrokenDateTime::invalid()
        };

        // 2.
        calculated.expire(clock);

        // 3.
        c.air_data.process_basic(basic, calculated, settings);

        // 4.
        let last_finished = calculated.ordered_task_stats.task_finished;
        c.task.process_basic_task(basic, calculated, settings, force);
        let finished_now = !last_finished && calculated.ordered_task_stats.task_finished;

        if finished_now {
            self.on_finish_task();
        }

        let basic = &self.basic;
        let calculated = &mut self.calculated;
        let settings = &self.settings;
        let c = &mut self.computers;

        // 5.
        let stats = c.stats.flight_stats();
        working_band::calculate_working_band(calculated, basic, settings, &stats);

        // 6. Sees this tick's working band
        c.task.process_more_task(basic, calculated, settings, force);
        c.task.process_auto_task(basic, calculated, settings, force);

        // 7.
        c.air_data.process_vertical(basic, calculated, settings);

        // 8.
        c.stats.process_climb_events(basic, calculated);

        // 9.
        c.cruise.compute(basic, calculated, settings);

        // 10. and 11.
        if let Some(reference) =
            self.team
                .resolve_reference(&settings.team_code, self.waypoints.as_ref(), &mut calculated.team)
        {
            self.team.update_own_code(
                clock,
                self.config.team_code_interval_ms,
                basic.location,
                reference,
                &mut calculated.team,
            );
            team::update_teammate(&settings.team_code, basic, reference, &mut calculated.team);
        }

        // 12.
        if let Some(time) = basic.time {
            match self.trace_history_time.update(time, self.config.trace_min_delta_ms) {
                TimeStep::Pending => {}
                TimeStep::Elapsed(_) => calculated.trace_history.append(basic),
                TimeStep::Warp => {
                    log_warn!("GPS time went backwards, clearing trace history");
                    calculated.trace_history.clear();
                }
            }
        }

        // 13.
        let stats = c.stats.flight_stats();
        working_band::calculate_vario_scale(&mut calculated.vario_scale, &settings.polar, &stats);

        // 14.
        c.monitors.update(basic, calculated, settings);

        // 15.
        working_band::calculate_fuel(&mut calculated.fuel, &settings.plane, clock);

        // 16.
        c.air_data.flight_times(basic, calculated, settings);
        self.takeoff_landing(last_flying);

        self.idle_clock.check_advance(clock, self.config.idle_interval_ms)
    }

    /// Run the lower-priority work when spare time is available
    ///
    /// `exhaustive` lets the task and airspace computers do more thorough,
    /// slower work; ordinary passes should use `false`.
    pub fn process_idle(&mut self, exhaustive: bool) {
        let basic = &self.basic;
        let calculated = &mut self.calculated;
        let settings = &self.settings;
        let c = &mut self.computers;

        c.stats.do_logging(basic, calculated);
        c.log.run(basic, calculated, settings);
        c.task.process_idle(basic, calculated, settings, exhaustive);

        let mut warnings = calculated.airspace_warnings;
        c.warnings
            .update(settings, basic, calculated, &mut warnings, exhaustive);
        calculated.airspace_warnings = warnings;

        c.idle_monitors.update(basic, calculated, settings);

        if let Some(location) = &basic.location {
            c.retrospective.update_sample(location);
        }
    }

    /// Reset for a new flight
    ///
    /// `full` also clears what survives between flights (wind, terrain,
    /// team tracking). Sub-computers keep their configuration either way.
    /// Safe to call between any two ticks.
    pub fn reset_flight(&mut self, full: bool) {
        if full {
            self.calculated.reset();
        } else {
            self.calculated.flight.clear();
            self.calculated.task_stats.clear();
            self.calculated.ordered_task_stats.clear();
            self.calculated.fuel.clear();
            self.calculated.reset_flight_statistics();
        }
        self.finish = None;

        let c = &mut self.computers;
        c.air_data.reset_flight(&mut self.calculated, full);
        c.task.reset_flight(full);
        c.stats.reset_flight(full);
        c.log.reset();
        c.retrospective.reset();
        c.cruise.reset();
        c.warnings.reset();

        self.trace_history_time.reset();
        if full {
            self.team.reset_throttle();
        }
    }

    /// Full reset, as at power-up
    pub fn initialise(&mut self) {
        self.reset_flight(true);
    }

    /// The task start was crossed
    ///
    /// Restarts accumulated statistics and switches the logger to its fast
    /// cadence. Records [`GlideEvent::TaskStarted`].
    pub fn on_start_task(&mut self) {
        log_info!("Task started at clock {}", self.basic.clock);

        self.calculated.start_task(self.basic.clock);
        let c = &mut self.computers;
        c.air_data.reset_stats();
        c.stats.start_task(&self.basic);
        c.log.start_task(&self.basic);
        c.log.set_fast_logging();

        self.events.push(GlideEvent::TaskStarted);
    }

    /// A turnpoint observation zone was entered
    pub fn on_transition_enter(&mut self) {
        self.computers.log.set_fast_logging();
    }

    /// Snapshot the derived state as at the finish line
    pub fn save_finish(&mut self) {
        self.finish = Some(self.calculated.clone());
    }

    /// Reinstate the finish-line snapshot, keeping the current flight phase
    pub fn restore_finish(&mut self) {
        if let Some(saved) = &self.finish {
            let flight = self.calculated.flight;
            self.calculated = saved.clone();
            self.calculated.flight = flight;
        }
    }

    fn on_finish_task(&mut self) {
        log_info!("Task finished at clock {}", self.basic.clock);
        self.save_finish();
        self.events.push(GlideEvent::TaskFinished);
    }

    fn takeoff_landing(&mut self, last_flying: bool) {
        let flying = self.calculated.flight.flying;
        if flying && !last_flying {
            self.on_takeoff();
        } else if !flying && last_flying {
            self.on_landing();
        }
    }

    fn on_takeoff(&mut self) {
        log_info!("Takeoff at clock {}", self.basic.clock);

        self.computers
            .air_data
            .reset_flight(&mut self.calculated, false);

        // In case the task is never finished
        self.save_finish();

        self.events.push(GlideEvent::Takeoff);
    }

    fn on_landing(&mut self) {
        log_info!("Landing at clock {}", self.basic.clock);

        if self.calculated.ordered_task_stats.task_finished {
            self.restore_finish();
        }

        self.events.push(GlideEvent::Landing);
    }
}
