//! Monotonic instants used as the run epoch

use std::ops::Sub;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static CLOCK_EPOCH: OnceLock<Instant> = OnceLock::new();

/// A point on the monotonic clock.
///
/// The timer measures elapsed time as the distance between now and an
/// adjusted start `TimeStamp`. Shifting the start backwards is how resumed
/// attempts carry over the time they already accumulated, so a `TimeStamp`
/// may lie arbitrarily far in the past, including before the process or the
/// machine started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStamp {
    /// Signed nanoseconds relative to the first clock read in this process
    nanos: i128,
}

impl TimeStamp {
    /// Read the monotonic clock
    pub fn now() -> Self {
        let epoch = *CLOCK_EPOCH.get_or_init(Instant::now);
        Self { nanos: epoch.elapsed().as_nanos() as i128 }
    }

    /// Time elapsed from `earlier` to `self`, zero if `earlier` is later.
    pub fn duration_since(self, earlier: TimeStamp) -> Duration {
        let nanos = self.nanos.saturating_sub(earlier.nanos).clamp(0, u64::MAX as i128);
        Duration::from_nanos(nanos as u64)
    }
}

impl Default for TimeStamp {
    fn default() -> Self {
        Self::now()
    }
}

impl Sub<Duration> for TimeStamp {
    type Output = TimeStamp;

    fn sub(self, rhs: Duration) -> TimeStamp {
        Self { nanos: self.nanos.saturating_sub(rhs.as_nanos() as i128) }
    }
}

impl Sub<TimeStamp> for TimeStamp {
    type Output = Duration;

    fn sub(self, rhs: TimeStamp) -> Duration {
        self.duration_since(rhs)
    }
}
