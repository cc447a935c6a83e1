//! Resumable ongoing-attempt comparison for speedrun timers.
//!
//! Speedrun timers persist the run (its segments and comparisons) but not the
//! attempt currently in progress. Close the timer mid-attempt and the
//! progress is gone. This crate provides a logic component that keeps the
//! attempt alive inside the run itself:
//!
//! - **Mirror**: every update while running or paused writes the elapsed
//!   time into the current segment's `TimeAttackPause_Ongoing` comparison
//! - **Resume**: when the component is created against a run that still
//!   carries ongoing values, the attempt is rebuilt and left paused
//! - **Forget**: resetting the timer erases the ongoing comparison
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use time_attack_pause::{LogicComponent, TimeAttackPause, TimerState, ONGOING_COMPARISON};
//! use time_attack_pause::types::{Run, Segment, Time, TimerPhase};
//!
//! // A run saved while the first split was done at 1:05
//! let mut run = Run::new("Celeste", "Any%");
//! for name in ["Forsaken City", "Old Site", "Celestial Resort"] {
//!     run.push_segment(Segment::new(name));
//! }
//! let ongoing = Time::new().with_real_time(Some(Duration::from_secs(65)));
//! run.segments[0].set_comparison(ONGOING_COMPARISON, ongoing);
//!
//! let mut state = TimerState::new(run);
//! let component = TimeAttackPause::new(&mut state);
//!
//! assert_eq!(state.current_phase, TimerPhase::Paused);
//! assert_eq!(state.current_split_index, Some(1));
//! assert_eq!(component.component_name(), "TimeAttackPause");
//! ```

// Core types and error handling
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Host model
pub mod component;
pub mod model;
pub mod signal;
pub mod state;

// The component
pub mod ongoing;
pub mod settings;

// Core exports
pub use error::*;

// Host model exports
pub use component::{Invalidator, LogicComponent};
pub use model::TimerModel;
pub use signal::{Signal, Subscription, TimerEvents};
pub use state::TimerState;

// Component exports
pub use ongoing::{COMPONENT_NAME, ONGOING_COMPARISON, RestoredAttempt, TimeAttackPause};
pub use settings::{SETTINGS_VERSION, SettingsNode, TimeAttackPauseSettings};
