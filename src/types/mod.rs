//! Host data model the component reads and mutates.
//!
//! These types mirror the structures a speedrun timer host owns:
//! - [`Run`] is the ordered list of [`Segment`]s for one category
//! - [`Segment`] carries the live split time and a map of named comparisons
//! - [`Time`] holds an optional duration per [`TimingMethod`]
//! - [`TimerPhase`] is the timer's run state
//! - [`TimeStamp`] is a monotonic instant used as the attempt epoch
//!
//! ## Usage Example
//!
//! ```rust
//! use std::time::Duration;
//! use time_attack_pause::types::{Run, Segment, Time, TimingMethod};
//!
//! let mut run = Run::new("Celeste", "Any%");
//! run.push_segment(Segment::new("Forsaken City"));
//!
//! let pb = Time::new().with_real_time(Some(Duration::from_secs(95)));
//! run.segments[0].set_comparison("Personal Best", pb);
//!
//! let stored = run.segments[0].comparison("Personal Best").unwrap();
//! assert_eq!(stored[TimingMethod::RealTime], Some(Duration::from_secs(95)));
//! assert_eq!(stored[TimingMethod::GameTime], None);
//! ```

mod layout_mode;
mod phase;
mod run;
mod segment;
mod time;
mod timestamp;

pub use layout_mode::LayoutMode;
pub use phase::TimerPhase;
pub use run::Run;
pub use segment::Segment;
pub use time::{Time, TimingMethod};
pub use timestamp::TimeStamp;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use proptest::prelude::*;

    #[test]
    fn time_indexes_by_method() {
        let mut time = Time::new().with_real_time(Some(Duration::from_secs(10)));
        assert_eq!(time[TimingMethod::RealTime], Some(Duration::from_secs(10)));
        assert_eq!(time[TimingMethod::GameTime], None);

        time[TimingMethod::GameTime] = Some(Duration::from_secs(8));
        assert_eq!(time.game_time, Some(Duration::from_secs(8)));
        assert!(!time.is_empty());
        assert!(Time::new().is_empty());
    }

    #[test]
    fn segment_comparison_overwrite_and_remove() {
        let mut segment = Segment::new("Level 1");
        let first = Time::new().with_real_time(Some(Duration::from_secs(1)));
        let second = Time::new().with_real_time(Some(Duration::from_secs(2)));

        segment.set_comparison("Ongoing", first);
        segment.set_comparison("Ongoing", second);

        assert_eq!(segment.comparisons.len(), 1);
        assert_eq!(segment.comparison("Ongoing"), Some(&second));
        assert_eq!(segment.remove_comparison("Ongoing"), Some(second));
        assert_eq!(segment.remove_comparison("Ongoing"), None);
    }

    #[test]
    fn run_clear_split_times_keeps_comparisons() {
        let mut run = Run::new("Game", "Any%");
        let mut segment = Segment::new("Only");
        segment.split_time = Time::new().with_real_time(Some(Duration::from_secs(4)));
        segment.set_comparison("Best Segments", segment.split_time);
        run.push_segment(segment);

        run.clear_split_times();

        assert!(run.segments[0].split_time.is_empty());
        assert!(run.segments[0].comparison("Best Segments").is_some());
    }

    #[test]
    fn phase_progress_classification() {
        assert!(TimerPhase::Running.is_in_progress());
        assert!(TimerPhase::Paused.is_in_progress());
        assert!(!TimerPhase::NotRunning.is_in_progress());
        assert!(!TimerPhase::Ended.is_in_progress());
        assert_eq!(TimerPhase::default(), TimerPhase::NotRunning);
    }

    proptest! {
        #[test]
        fn prop_custom_comparisons_never_duplicate(
            names in prop::collection::vec("[a-zA-Z_]{1,12}", 0..20)
        ) {
            let mut run = Run::default();
            for name in &names {
                let was_present = run.has_custom_comparison(name);
                prop_assert_eq!(run.add_custom_comparison(name), !was_present);
            }

            let mut seen = std::collections::HashSet::new();
            for name in &run.custom_comparisons {
                prop_assert!(seen.insert(name.clone()), "duplicate comparison {}", name);
            }
            for name in &names {
                prop_assert!(run.has_custom_comparison(name));
            }
        }
    }
}
