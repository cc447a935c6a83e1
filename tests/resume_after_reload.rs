//! Resume-after-reload tests
//!
//! Drive an attempt through the public API, persist the run the way a host
//! would, load it into a fresh timer state and check the attempt comes back.

use std::time::Duration;

use time_attack_pause::types::{
    LayoutMode, Run, Segment, Time, TimeStamp, TimerPhase, TimingMethod,
};
use time_attack_pause::{
    LogicComponent, ONGOING_COMPARISON, TimeAttackPause, TimerModel, TimerState,
};

const TOLERANCE: Duration = Duration::from_millis(500);

fn secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

fn four_segment_run() -> Run {
    let mut run = Run::new("Super Metroid", "Any%");
    for name in ["Ceres", "Brinstar", "Norfair", "Tourian"] {
        run.push_segment(Segment::new(name));
    }
    run
}

fn tick(component: &mut TimeAttackPause, state: &mut TimerState) {
    component.update(None, state, 250.0, 30.0, LayoutMode::Vertical);
}

/// Host-side save and load of the run
fn reload(run: &Run) -> anyhow::Result<Run> {
    let yaml = serde_yaml_ng::to_string(run)?;
    Ok(serde_yaml_ng::from_str(&yaml)?)
}

#[test]
fn attempt_survives_reload() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt::try_init();
    let model = TimerModel::new();

    // First session: two splits done, paused in the third segment
    let mut state = TimerState::new(four_segment_run());
    let mut component = TimeAttackPause::new(&mut state);
    model.start(&mut state);

    state.adjusted_start_time = TimeStamp::now() - secs(10);
    tick(&mut component, &mut state);
    model.split(&mut state);

    state.adjusted_start_time = TimeStamp::now() - secs(20);
    tick(&mut component, &mut state);
    model.split(&mut state);

    model.pause(&mut state);
    state.time_paused_at = secs(25);
    tick(&mut component, &mut state);
    assert_eq!(state.run.attempt_count, 1);

    let saved = reload(&state.run)?;
    drop(component);
    drop(state);

    // Second session
    let mut state = TimerState::new(saved);
    assert!(state.run.segments.iter().all(|segment| segment.split_time.is_empty()));
    let component = TimeAttackPause::new(&mut state);

    let restored = component.restored_attempt().expect("attempt should resume");
    assert_eq!(restored.completed_splits, 3);
    assert_eq!(restored.elapsed, Some(secs(25)));

    assert_eq!(state.current_phase, TimerPhase::Paused);
    assert_eq!(state.current_split_index, Some(3));
    assert_eq!(state.run.attempt_count, 1);
    assert!(!state.run.has_changed);
    assert!(state.is_game_time_initialized);
    assert_eq!(state.run.custom_comparisons, [ONGOING_COMPARISON]);

    let first_split = state.run.segments[0].split_time.real_time.unwrap_or_default();
    assert!(first_split.abs_diff(secs(10)) < TOLERANCE);
    assert_eq!(state.run.segments[2].split_time.real_time, Some(secs(25)));
    assert!(state.run.segments[3].split_time.is_empty());

    let paused = state.current_time().real_time.unwrap_or_default();
    assert!(paused.abs_diff(secs(25)) < TOLERANCE);
    Ok(())
}

#[test]
fn resumed_attempt_can_continue_and_reset() -> anyhow::Result<()> {
    let mut run = four_segment_run();
    run.attempt_count = 41;
    let ongoing = Time::new().with_real_time(Some(secs(90)));
    run.segments[0].set_comparison(ONGOING_COMPARISON, ongoing);

    let mut state = TimerState::new(reload(&run)?);
    let mut component = TimeAttackPause::new(&mut state);
    let model = TimerModel::new();
    assert_eq!(state.run.attempt_count, 41);

    model.resume(&mut state);
    assert_eq!(state.current_phase, TimerPhase::Running);
    tick(&mut component, &mut state);

    let written = state.run.segments[1]
        .comparison(ONGOING_COMPARISON)
        .and_then(|time| time[TimingMethod::RealTime])
        .unwrap_or_default();
    assert!(written >= secs(90) && written < secs(90) + TOLERANCE);

    model.reset(&mut state);
    assert!(state.run.has_changed);

    let saved = reload(&state.run)?;
    assert!(saved.segments.iter().all(|segment| segment.comparison(ONGOING_COMPARISON).is_none()));

    // Nothing left to resume
    let mut state = TimerState::new(saved);
    let component = TimeAttackPause::new(&mut state);
    assert!(component.restored_attempt().is_none());
    assert_eq!(state.current_phase, TimerPhase::NotRunning);
    Ok(())
}

#[test]
fn game_time_attempt_resumes_under_game_time() {
    let mut run = four_segment_run();
    let first = Time::new().with_real_time(Some(secs(50))).with_game_time(Some(secs(42)));
    let second = Time::new().with_real_time(Some(secs(80)));
    run.segments[0].set_comparison(ONGOING_COMPARISON, first);
    run.segments[1].set_comparison(ONGOING_COMPARISON, second);

    let mut state = TimerState::new(run);
    state.current_timing_method = TimingMethod::GameTime;
    let component = TimeAttackPause::new(&mut state);

    // The second value has no game time: it is copied over but does not
    // count as a completed split under game time.
    assert_eq!(state.current_split_index, Some(1));
    assert_eq!(state.run.segments[1].split_time, second);
    let elapsed = component.restored_attempt().and_then(|restored| restored.elapsed);
    assert_eq!(elapsed, Some(secs(42)));
    assert!(state.time_paused_at.abs_diff(secs(42)) < TOLERANCE);
}
