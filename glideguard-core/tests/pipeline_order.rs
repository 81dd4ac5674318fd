//! Integration tests for the order in which collaborators run

mod common;

use common::{scripted_computer, FlightScript, World};
use glideguard_core::ComputerSettings;

const TICK_ORDER: &[&str] = &[
    "air_data.process_basic",
    "task.process_basic_task",
    "task.process_more_task",
    "task.process_auto_task",
    "air_data.process_vertical",
    "stats.process_climb_events",
    "cruise.compute",
    "monitors.update",
    "air_data.flight_times",
];

const IDLE_ORDER: &[&str] = &[
    "stats.do_logging",
    "log.run",
    "task.process_idle",
    "warnings.update",
    "idle_monitors.update",
    "retrospective.update_sample",
];

#[test]
fn tick_runs_collaborators_in_dependency_order() {
    let world = World::shared();
    let mut computer = scripted_computer(ComputerSettings::default(), &world);
    world.borrow_mut().calls.clear();

    computer.process_sample(FlightScript::default().fix(0), false);
    assert_eq!(world.borrow().calls, TICK_ORDER);
}

#[test]
fn extended_task_sees_current_working_band() {
    let world = World::shared();
    let mut computer = scripted_computer(ComputerSettings::default(), &world);

    let script = FlightScript::default();
    computer.process_sample(script.fix(0).with_nav_altitude(1_200.0), false);
    computer.process_sample(script.fix(1).with_nav_altitude(1_800.0), false);
    assert_eq!(world.borrow().more_task_band_tops, vec![1_200.0, 1_800.0]);
}

#[test]
fn idle_pass_runs_in_order() {
    let world = World::shared();
    let mut computer = scripted_computer(ComputerSettings::default(), &world);
    computer.process_sample(FlightScript::default().fix(0), false);
    world.borrow_mut().calls.clear();

    computer.process_idle(false);
    assert_eq!(world.borrow().calls, IDLE_ORDER);
}

#[test]
fn idle_pass_without_location_skips_retrospective() {
    let world = World::shared();
    let mut computer = scripted_computer(ComputerSettings::default(), &world);
    computer.process_sample(glideguard_core::RawSample::at(0), false);

    computer.process_idle(false);
    assert_eq!(world.borrow().count("retrospective.update_sample"), 0);
    assert_eq!(world.borrow().count("warnings.update"), 1);
}

#[test]
fn exhaustive_flag_reaches_warnings() {
    let world = World::shared();
    let mut computer = scripted_computer(ComputerSettings::default(), &world);
    computer.process_sample(FlightScript::default().fix(0), false);

    computer.process_idle(false);
    computer.process_idle(true);
    assert_eq!(world.borrow().warning_updates, vec![false, true]);

    let warnings = computer.calculated().airspace_warnings;
    assert_eq!(warnings.active, 2);
    assert!(warnings.latest.is_valid());
}

#[test]
fn idle_due_on_sample_clock() {
    let world = World::shared();
    let mut computer = scripted_computer(ComputerSettings::default(), &world);
    let script = FlightScript {
        step_ms: 200,
        ..Default::default()
    };

    let due: Vec<bool> = script
        .fixes(8)
        .map(|fix| computer.process_sample(fix, false))
        .collect();
    // Clock starts on the first fix, then fires every 500 ms
    assert_eq!(due, vec![false, false, false, true, false, false, true, false]);
}

#[test]
fn full_reset_reaches_every_collaborator() {
    let world = World::shared();
    let mut computer = scripted_computer(ComputerSettings::default(), &world);
    world.borrow_mut().calls.clear();

    computer.reset_flight(true);
    let w = world.borrow();
    for name in [
        "air_data.reset_flight",
        "task.reset_flight",
        "stats.reset_flight",
        "log.reset",
        "retrospective.reset",
        "cruise.reset",
        "warnings.reset",
    ] {
        assert_eq!(w.count(name), 1, "{name}");
    }
    assert_eq!(w.air_data_resets.last(), Some(&true));
}

#[test]
fn task_start_restarts_statistics_and_speeds_up_logging() {
    let world = World::shared();
    let mut computer = scripted_computer(ComputerSettings::default(), &world);
    computer.process_sample(FlightScript::default().fix(0), false);
    world.borrow_mut().calls.clear();

    computer.on_start_task();
    assert_eq!(
        world.borrow().calls,
        vec![
            "air_data.reset_stats",
            "stats.start_task",
            "log.start_task",
            "log.set_fast_logging",
        ]
    );
    assert_eq!(
        computer.drain_events().last(),
        Some(glideguard_core::GlideEvent::TaskStarted)
    );

    world.borrow_mut().calls.clear();
    computer.on_transition_enter();
    assert_eq!(world.borrow().calls, vec!["log.set_fast_logging"]);
}
