//! Test utilities for building runs and timer states
//!
//! Shared by the unit tests and the benchmarks so both exercise the same
//! fixtures.

#![cfg(any(test, feature = "benchmark"))]

use std::time::Duration;

use crate::ONGOING_COMPARISON;
use crate::model::TimerModel;
use crate::state::TimerState;
use crate::types::{Run, Segment, Time, TimeStamp};

/// Slack allowed when comparing a value read from the live clock
pub const CLOCK_TOLERANCE: Duration = Duration::from_millis(500);

/// Shorthand for whole seconds
pub fn secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

/// A run with `count` empty segments named `Split 1..=count`
pub fn run_with_segments(count: usize) -> Run {
    let mut run = Run::new("Game", "Any%");
    for index in 0..count {
        run.push_segment(Segment::new(format!("Split {}", index + 1)));
    }
    run
}

/// A run with one segment per entry, each `Some` stored as the segment's
/// real-time ongoing comparison value
pub fn run_with_ongoing(values: &[Option<Duration>]) -> Run {
    let mut run = run_with_segments(values.len());
    run.add_custom_comparison(ONGOING_COMPARISON);
    for (segment, value) in run.segments.iter_mut().zip(values) {
        if let Some(elapsed) = value {
            segment.set_comparison(ONGOING_COMPARISON, Time::new().with_real_time(Some(*elapsed)));
        }
    }
    run
}

/// A state with an attempt running on `segment_index`, `elapsed` into it
pub fn running_state(segments: usize, segment_index: usize, elapsed: Duration) -> TimerState {
    let mut state = TimerState::new(run_with_segments(segments));
    let model = TimerModel::new();
    model.start(&mut state);
    for _ in 0..segment_index {
        model.skip_split(&mut state);
    }
    state.adjusted_start_time = TimeStamp::now() - elapsed;
    state
}

/// Assert a clock-derived duration is within [`CLOCK_TOLERANCE`] of `expected`
#[track_caller]
pub fn assert_close(actual: Duration, expected: Duration) {
    let difference = actual.abs_diff(expected);
    assert!(
        difference < CLOCK_TOLERANCE,
        "expected {:?} to be within {:?} of {:?}",
        actual,
        CLOCK_TOLERANCE,
        expected
    );
}
