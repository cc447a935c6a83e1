//! Timer phase state

use serde::{Deserialize, Serialize};

/// Current phase of the host timer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerPhase {
    /// No attempt in progress
    #[default]
    NotRunning,

    /// Attempt in progress, clock ticking
    Running,

    /// Attempt in progress, clock frozen
    Paused,

    /// Final segment split, attempt complete
    Ended,
}

impl TimerPhase {
    /// Whether an attempt is underway and has not finished yet.
    ///
    /// Running and Paused are the only phases in which the current split
    /// points at a live segment.
    pub fn is_in_progress(self) -> bool {
        matches!(self, TimerPhase::Running | TimerPhase::Paused)
    }
}
