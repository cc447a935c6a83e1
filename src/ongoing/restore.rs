//! Rebuilding a paused attempt from the ongoing comparison

use std::time::Duration;

use tracing::{debug, info};

use super::ONGOING_COMPARISON;
use crate::model::TimerModel;
use crate::state::TimerState;
use crate::types::TimeStamp;

/// What restoring an ongoing attempt reconstructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoredAttempt {
    /// Segments marked as completed in the resumed attempt
    pub completed_splits: usize,

    /// Elapsed time the attempt resumes from, under the active timing method
    pub elapsed: Option<Duration>,
}

/// Resume the attempt recorded in the ongoing comparison, if there is one.
///
/// Nothing happens unless the first segment holds an ongoing value under the
/// current timing method. Otherwise the timer is started, every segment with
/// an ongoing value gets it as its split time, and the timer is left paused
/// at the elapsed time of the last segment that has a split time.
pub(crate) fn restore_ongoing_run(
    model: &TimerModel,
    state: &mut TimerState,
) -> Option<RestoredAttempt> {
    let method = state.current_timing_method;
    let first = state.run.first()?;
    first.comparison(ONGOING_COMPARISON)?[method]?;

    debug!("Ongoing attempt found, restoring under {:?}", method);

    // Fires the start notifications other components rely on; the state is
    // corrected below.
    model.start(state);

    let now = TimeStamp::now();
    let mut restored = RestoredAttempt { completed_splits: 0, elapsed: None };

    for segment in &mut state.run {
        if let Some(ongoing) = segment.comparison(ONGOING_COMPARISON).copied() {
            segment.split_time = ongoing;
        }

        let Some(split_time) = segment.split_time[method] else {
            continue;
        };

        state.current_split_index = Some(state.current_split_index.map_or(0, |index| index + 1));
        state.adjusted_start_time = now - split_time;

        restored.completed_splits += 1;
        restored.elapsed = Some(split_time);
    }

    // Undo the attempt counted by the synthetic start
    state.run.attempt_count = state.run.attempt_count.saturating_sub(1);
    state.is_game_time_initialized = true;
    state.run.has_changed = false;

    model.pause(state);

    info!(
        "Restored ongoing attempt: {} splits completed, resuming at {:?}",
        restored.completed_splits, restored.elapsed
    );
    Some(restored)
}
