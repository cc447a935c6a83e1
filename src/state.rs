//! Timer state shared between the host and its components

use std::time::Duration;

use crate::signal::TimerEvents;
use crate::types::{Run, Segment, Time, TimeStamp, TimerPhase, TimingMethod};

/// Everything the host knows about the current attempt.
///
/// The host hands a mutable reference to this state to each component on
/// every update. Components may read and write its fields directly.
#[derive(Debug)]
pub struct TimerState {
    /// The active run
    pub run: Run,

    /// Current phase of the timer
    pub current_phase: TimerPhase,

    /// Index of the segment being timed; `None` outside of an attempt
    pub current_split_index: Option<usize>,

    /// Timing method comparisons are displayed and recorded under
    pub current_timing_method: TimingMethod,

    /// Instant elapsed real time is measured from while running
    pub adjusted_start_time: TimeStamp,

    /// Real time frozen at the moment the timer was paused
    pub time_paused_at: Duration,

    /// Whether the game has started reporting game time for this attempt
    pub is_game_time_initialized: bool,

    /// Accumulated load time removed from real time to produce game time
    pub loading_times: Duration,

    /// Lifecycle notifications
    pub events: TimerEvents,
}

impl TimerState {
    /// Create an idle state for `run`
    pub fn new(run: Run) -> Self {
        Self {
            run,
            current_phase: TimerPhase::NotRunning,
            current_split_index: None,
            current_timing_method: TimingMethod::RealTime,
            adjusted_start_time: TimeStamp::now(),
            time_paused_at: Duration::ZERO,
            is_game_time_initialized: false,
            loading_times: Duration::ZERO,
            events: TimerEvents::default(),
        }
    }

    /// Elapsed time of the attempt at this instant
    pub fn current_time(&self) -> Time {
        let real_time = match self.current_phase {
            TimerPhase::NotRunning => {
                return Time::new()
                    .with_real_time(Some(Duration::ZERO))
                    .with_game_time(Some(Duration::ZERO));
            }
            TimerPhase::Ended => {
                return self.run.last().map(|segment| segment.split_time).unwrap_or_default();
            }
            TimerPhase::Running => TimeStamp::now() - self.adjusted_start_time,
            TimerPhase::Paused => self.time_paused_at,
        };

        let game_time = self
            .is_game_time_initialized
            .then(|| real_time.saturating_sub(self.loading_times));

        Time::new().with_real_time(Some(real_time)).with_game_time(game_time)
    }

    /// The segment being timed, if an attempt is underway
    pub fn current_split(&self) -> Option<&Segment> {
        self.current_split_index.and_then(|index| self.run.segment(index))
    }

    /// Mutable access to the segment being timed
    pub fn current_split_mut(&mut self) -> Option<&mut Segment> {
        self.current_split_index.and_then(|index| self.run.segment_mut(index))
    }
}
