//! Ongoing-attempt comparison.
//!
//! The host only persists what lives on the run, and a run has no notion of
//! an attempt in progress. This module stores the attempt inside the run as
//! a custom comparison, [`ONGOING_COMPARISON`], so it survives a restart:
//!
//! - **Update**: while running or paused, the current time is written into
//!   the current segment's ongoing slot
//! - **Reset**: the ongoing comparison is erased from every segment
//! - **Construction**: if the first segment holds an ongoing value, the
//!   attempt is rebuilt from the stored values and left paused
//!
//! # Example
//!
//! ```rust
//! use time_attack_pause::{LogicComponent, TimeAttackPause, TimerModel, TimerState};
//! use time_attack_pause::types::{LayoutMode, Run, Segment, TimerPhase};
//!
//! let mut run = Run::new("Celeste", "Any%");
//! run.push_segment(Segment::new("Forsaken City"));
//! let mut state = TimerState::new(run);
//!
//! let mut component = TimeAttackPause::new(&mut state);
//! TimerModel::new().start(&mut state);
//! component.update(None, &mut state, 0.0, 0.0, LayoutMode::Vertical);
//!
//! let ongoing = state.run.segments[0].comparison(time_attack_pause::ONGOING_COMPARISON);
//! assert!(ongoing.is_some());
//!
//! TimerModel::new().reset(&mut state);
//! assert!(state.run.segments[0].comparisons.is_empty());
//! assert_eq!(state.current_phase, TimerPhase::NotRunning);
//! ```

mod component;
mod restore;

pub use component::{COMPONENT_NAME, TimeAttackPause};
pub use restore::RestoredAttempt;

/// Name of the comparison the ongoing attempt is stored under
pub const ONGOING_COMPARISON: &str = "TimeAttackPause_Ongoing";
