//! Durations recorded per timing method

use std::ops::{Index, IndexMut};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Clock source a duration is measured against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimingMethod {
    /// Wall-clock time since the attempt started
    #[default]
    RealTime,

    /// Real time minus load times, as reported by the game
    GameTime,
}

impl TimingMethod {
    /// All timing methods in display order
    pub const ALL: [TimingMethod; 2] = [TimingMethod::RealTime, TimingMethod::GameTime];
}

/// A duration per timing method.
///
/// Either side may be absent: `None` means "no time recorded", which is
/// distinct from a zero duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Time {
    /// Real time component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_time: Option<Duration>,

    /// Game time component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_time: Option<Duration>,
}

impl Time {
    /// Create an empty time with no component set
    pub const fn new() -> Self {
        Self { real_time: None, game_time: None }
    }

    /// Builder setting the real time component
    pub const fn with_real_time(mut self, real_time: Option<Duration>) -> Self {
        self.real_time = real_time;
        self
    }

    /// Builder setting the game time component
    pub const fn with_game_time(mut self, game_time: Option<Duration>) -> Self {
        self.game_time = game_time;
        self
    }

    /// Check if neither component is set
    pub fn is_empty(&self) -> bool {
        self.real_time.is_none() && self.game_time.is_none()
    }
}

impl Index<TimingMethod> for Time {
    type Output = Option<Duration>;

    fn index(&self, method: TimingMethod) -> &Self::Output {
        match method {
            TimingMethod::RealTime => &self.real_time,
            TimingMethod::GameTime => &self.game_time,
        }
    }
}

impl IndexMut<TimingMethod> for Time {
    fn index_mut(&mut self, method: TimingMethod) -> &mut Self::Output {
        match method {
            TimingMethod::RealTime => &mut self.real_time,
            TimingMethod::GameTime => &mut self.game_time,
        }
    }
}
