//! Timer model: the operations that move a [`TimerState`] between phases

use std::time::Duration;

use tracing::debug;

use crate::state::TimerState;
use crate::types::{Time, TimeStamp, TimerPhase};

/// Drives a [`TimerState`] through an attempt.
///
/// The model holds no state of its own; every operation acts on the state it
/// is given and fires the matching notification from `state.events`.
/// Operations that do not apply to the current phase are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimerModel;

impl TimerModel {
    /// Create a timer model
    pub fn new() -> Self {
        Self
    }

    /// Start a new attempt
    pub fn start(&self, state: &mut TimerState) {
        if state.current_phase != TimerPhase::NotRunning {
            return;
        }

        state.current_phase = TimerPhase::Running;
        state.current_split_index = Some(0);
        state.adjusted_start_time = TimeStamp::now();
        state.time_paused_at = Duration::ZERO;
        state.is_game_time_initialized = false;
        state.loading_times = Duration::ZERO;
        state.run.attempt_count += 1;
        state.run.has_changed = true;

        debug!("Attempt {} started", state.run.attempt_count);
        state.events.on_start.emit(&mut state.run, ());
    }

    /// Record the current time on the current segment and advance
    pub fn split(&self, state: &mut TimerState) {
        if state.current_phase != TimerPhase::Running {
            return;
        }

        let current_time = state.current_time();
        if current_time.real_time.is_none_or(|real| real.is_zero()) {
            return;
        }

        let Some(index) = state.current_split_index else {
            return;
        };
        let Some(segment) = state.run.segment_mut(index) else {
            return;
        };
        segment.split_time = current_time;

        state.current_split_index = Some(index + 1);
        if index + 1 >= state.run.len() {
            state.current_phase = TimerPhase::Ended;
            debug!("Attempt finished");
        }
        state.run.has_changed = true;

        state.events.on_split.emit(&mut state.run, ());
    }

    /// Advance past the current segment without recording a time
    pub fn skip_split(&self, state: &mut TimerState) {
        if !state.current_phase.is_in_progress() {
            return;
        }

        let Some(index) = state.current_split_index else {
            return;
        };
        if index + 1 >= state.run.len() {
            return;
        }

        if let Some(segment) = state.run.segment_mut(index) {
            segment.split_time = Time::new();
        }
        state.current_split_index = Some(index + 1);

        state.events.on_skip_split.emit(&mut state.run, ());
    }

    /// Step back to the previous segment, discarding its split time
    pub fn undo_split(&self, state: &mut TimerState) {
        if state.current_phase == TimerPhase::NotRunning {
            return;
        }

        let Some(index) = state.current_split_index.filter(|&index| index > 0) else {
            return;
        };

        if state.current_phase == TimerPhase::Ended {
            state.current_phase = TimerPhase::Running;
        }
        let previous = index - 1;
        state.current_split_index = Some(previous);
        if let Some(segment) = state.run.segment_mut(previous) {
            segment.split_time = Time::new();
        }

        state.events.on_undo_split.emit(&mut state.run, ());
    }

    /// Freeze the clock
    pub fn pause(&self, state: &mut TimerState) {
        if state.current_phase != TimerPhase::Running {
            return;
        }

        state.time_paused_at = state.current_time().real_time.unwrap_or_default();
        state.current_phase = TimerPhase::Paused;

        debug!("Timer paused at {:?}", state.time_paused_at);
        state.events.on_pause.emit(&mut state.run, ());
    }

    /// Continue a paused attempt from the time it was frozen at
    pub fn resume(&self, state: &mut TimerState) {
        if state.current_phase != TimerPhase::Paused {
            return;
        }

        state.adjusted_start_time = TimeStamp::now() - state.time_paused_at;
        state.current_phase = TimerPhase::Running;

        debug!("Timer resumed at {:?}", state.time_paused_at);
        state.events.on_resume.emit(&mut state.run, ());
    }

    /// Pause when running, resume when paused
    pub fn toggle_pause(&self, state: &mut TimerState) {
        match state.current_phase {
            TimerPhase::Running => self.pause(state),
            TimerPhase::Paused => self.resume(state),
            TimerPhase::NotRunning | TimerPhase::Ended => {}
        }
    }

    /// Abandon the attempt and return to idle
    pub fn reset(&self, state: &mut TimerState) {
        let previous_phase = state.current_phase;
        if previous_phase == TimerPhase::NotRunning {
            return;
        }

        state.current_phase = TimerPhase::NotRunning;
        state.current_split_index = None;
        state.time_paused_at = Duration::ZERO;
        state.loading_times = Duration::ZERO;
        state.run.clear_split_times();

        debug!("Attempt reset from {:?}", previous_phase);
        state.events.on_reset.emit(&mut state.run, previous_phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Run, Segment};

    fn state_with_segments(count: usize) -> TimerState {
        let mut run = Run::new("Game", "Any%");
        for index in 0..count {
            run.push_segment(Segment::new(format!("Split {}", index + 1)));
        }
        TimerState::new(run)
    }

    /// Put a started state at a known elapsed time
    fn paused_at(state: &mut TimerState, elapsed: Duration) {
        let model = TimerModel::new();
        model.start(state);
        state.adjusted_start_time = TimeStamp::now() - elapsed;
        model.pause(state);
    }

    #[test]
    fn start_increments_attempts_and_marks_changed() {
        let mut state = state_with_segments(2);
        state.run.attempt_count = 4;

        TimerModel::new().start(&mut state);

        assert_eq!(state.current_phase, TimerPhase::Running);
        assert_eq!(state.current_split_index, Some(0));
        assert_eq!(state.run.attempt_count, 5);
        assert!(state.run.has_changed);
    }

    #[test]
    fn start_is_ignored_while_running() {
        let mut state = state_with_segments(2);
        let model = TimerModel::new();
        model.start(&mut state);
        model.start(&mut state);
        assert_eq!(state.run.attempt_count, 1);
    }

    #[test]
    fn start_fires_notification() {
        let mut state = state_with_segments(1);
        let _subscription = state.events.on_start.subscribe(|run, _| run.game_name.push('!'));

        TimerModel::new().start(&mut state);

        assert_eq!(state.run.game_name, "Game!");
    }

    #[test]
    fn pause_freezes_and_resume_continues() {
        let mut state = state_with_segments(2);
        paused_at(&mut state, Duration::from_secs(12));

        assert_eq!(state.current_phase, TimerPhase::Paused);
        let frozen = state.current_time().real_time.unwrap_or_default();
        assert!(frozen >= Duration::from_secs(12) && frozen < Duration::from_secs(13));

        let model = TimerModel::new();
        model.toggle_pause(&mut state);
        assert_eq!(state.current_phase, TimerPhase::Running);
        let resumed = state.current_time().real_time.unwrap_or_default();
        assert!(resumed >= frozen);
    }

    #[test]
    fn split_through_last_segment_ends_attempt() {
        let mut state = state_with_segments(2);
        let model = TimerModel::new();
        model.start(&mut state);
        state.adjusted_start_time = TimeStamp::now() - Duration::from_secs(5);

        model.split(&mut state);
        assert_eq!(state.current_split_index, Some(1));
        assert!(state.run.segments[0].split_time.real_time.is_some());

        model.split(&mut state);
        assert_eq!(state.current_phase, TimerPhase::Ended);
        assert_eq!(state.current_split_index, Some(2));
    }

    #[test]
    fn skip_and_undo_move_the_split_index() {
        let mut state = state_with_segments(3);
        let model = TimerModel::new();
        model.start(&mut state);

        model.skip_split(&mut state);
        model.skip_split(&mut state);
        assert_eq!(state.current_split_index, Some(2));

        // Cannot skip the final segment
        model.skip_split(&mut state);
        assert_eq!(state.current_split_index, Some(2));

        model.undo_split(&mut state);
        assert_eq!(state.current_split_index, Some(1));
    }

    #[test]
    fn reset_clears_splits_and_reports_previous_phase() {
        let mut state = state_with_segments(2);
        let _subscription = state.events.on_reset.subscribe(|run, phase| {
            run.category_name = format!("{phase:?}");
        });
        paused_at(&mut state, Duration::from_secs(3));
        state.run.segments[0].split_time = Time::new().with_real_time(Some(Duration::from_secs(1)));

        TimerModel::new().reset(&mut state);

        assert_eq!(state.current_phase, TimerPhase::NotRunning);
        assert_eq!(state.current_split_index, None);
        assert!(state.run.segments[0].split_time.is_empty());
        assert_eq!(state.run.category_name, "Paused");
    }

    #[test]
    fn reset_when_idle_does_not_notify() {
        let mut state = state_with_segments(1);
        let _subscription = state.events.on_reset.subscribe(|run, _| run.attempt_count += 100);

        TimerModel::new().reset(&mut state);

        assert_eq!(state.run.attempt_count, 0);
    }
}
