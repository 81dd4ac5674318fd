//! Integration tests for trace history and time-warp handling

mod common;

use common::plain_computer;
use glideguard_core::{ComputerSettings, GlideComputer, RawSample};
use proptest::prelude::*;

const T: u64 = 3_600_000;

fn feed(computer: &mut GlideComputer, times: &[u64]) {
    for (i, time) in times.iter().enumerate() {
        computer.process_sample(RawSample::at(i as u64 * 1_000).with_time(*time), false);
    }
}

fn trace_times(computer: &GlideComputer) -> Vec<u64> {
    computer
        .calculated()
        .trace_history
        .iter()
        .map(|e| e.time)
        .collect()
}

#[test]
fn small_step_after_first_fix_appends_once() {
    let mut computer = plain_computer(ComputerSettings::default());
    feed(&mut computer, &[T, T + 600]);
    assert_eq!(trace_times(&computer), vec![T + 600]);
}

#[test]
fn backward_jump_clears_instead_of_appending() {
    let mut computer = plain_computer(ComputerSettings::default());
    feed(&mut computer, &[T - 1_000, T]);
    assert_eq!(trace_times(&computer), vec![T]);

    feed(&mut computer, &[T - 5_000]);
    assert!(computer.calculated().trace_history.is_empty());

    // Tracking restarts from the warped time
    feed(&mut computer, &[T - 4_000]);
    assert_eq!(trace_times(&computer), vec![T - 4_000]);
}

#[test]
fn sub_threshold_steps_accumulate() {
    let mut computer = plain_computer(ComputerSettings::default());
    feed(&mut computer, &[T, T + 200, T + 400, T + 600]);
    assert_eq!(trace_times(&computer), vec![T + 600]);
}

#[test]
fn gps_dropout_keeps_history() {
    let mut computer = plain_computer(ComputerSettings::default());
    feed(&mut computer, &[T, T + 1_000, T + 2_000, T + 3_000, T + 33_500]);
    assert_eq!(
        trace_times(&computer),
        vec![T + 1_000, T + 2_000, T + 3_000, T + 33_500]
    );
}

#[test]
fn samples_without_time_are_ignored() {
    let mut computer = plain_computer(ComputerSettings::default());
    feed(&mut computer, &[T, T + 1_000]);
    computer.process_sample(RawSample::at(10_000), false);
    assert_eq!(trace_times(&computer), vec![T + 1_000]);
}

proptest! {
    #[test]
    fn history_stays_time_ordered(steps in prop::collection::vec(-10_000i64..40_000, 1..80)) {
        let mut computer = plain_computer(ComputerSettings::default());
        let mut time = T as i64;

        for (i, step) in steps.iter().enumerate() {
            time = (time + step).max(0);
            computer.process_sample(RawSample::at(i as u64 * 100).with_time(time as u64), false);

            let times = trace_times(&computer);
            for pair in times.windows(2) {
                prop_assert!(pair[1] > pair[0]);
                prop_assert!(pair[1] - pair[0] >= 500);
            }
            if let Some(last) = times.last() {
                prop_assert!(*last <= time as u64);
            }
        }
    }
}
