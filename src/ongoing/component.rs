//! The ongoing-attempt logic component

use tracing::{debug, info};

use super::ONGOING_COMPARISON;
use super::restore::{RestoredAttempt, restore_ongoing_run};
use crate::component::{Invalidator, LogicComponent};
use crate::model::TimerModel;
use crate::settings::{SettingsNode, TimeAttackPauseSettings};
use crate::signal::Subscription;
use crate::state::TimerState;
use crate::types::{LayoutMode, Run, TimerPhase};

/// Name the component is listed under in the layout editor
pub const COMPONENT_NAME: &str = "TimeAttackPause";

/// Keeps the current attempt mirrored into the ongoing comparison so it can
/// be resumed after the host restarts.
///
/// Every update while an attempt is in progress writes the current time into
/// the current segment's ongoing slot. A reset erases the ongoing comparison
/// from the whole run. Constructing the component against a run that still
/// carries ongoing values resumes that attempt, paused.
#[derive(Debug)]
pub struct TimeAttackPause {
    settings: TimeAttackPauseSettings,
    model: TimerModel,
    reset_subscription: Option<Subscription>,
    restored: Option<RestoredAttempt>,
}

impl TimeAttackPause {
    /// Attach the component to `state`, resuming any ongoing attempt
    pub fn new(state: &mut TimerState) -> Self {
        if state.run.add_custom_comparison(ONGOING_COMPARISON) {
            debug!("Registered comparison {}", ONGOING_COMPARISON);
        }

        let reset_subscription = state.events.on_reset.subscribe(clear_ongoing_comparison);

        let mut component = Self {
            settings: TimeAttackPauseSettings::new(),
            model: TimerModel::new(),
            reset_subscription: Some(reset_subscription),
            restored: None,
        };
        component.restored = restore_ongoing_run(&component.model, state);
        component
    }

    /// The attempt resumed at construction, if any
    pub fn restored_attempt(&self) -> Option<RestoredAttempt> {
        self.restored
    }

    /// Check if the reset handler is still registered
    pub fn is_subscribed(&self) -> bool {
        self.reset_subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Detach from the host's reset notification.
    ///
    /// Dropping the component has the same effect.
    pub fn dispose(&mut self) {
        if let Some(subscription) = self.reset_subscription.take() {
            subscription.cancel();
            debug!("{} unsubscribed from reset", COMPONENT_NAME);
        }
    }
}

impl LogicComponent for TimeAttackPause {
    type SettingsControl = TimeAttackPauseSettings;

    fn component_name(&self) -> &str {
        COMPONENT_NAME
    }

    fn update(
        &mut self,
        _invalidator: Option<&mut dyn Invalidator>,
        state: &mut TimerState,
        _width: f32,
        _height: f32,
        _mode: LayoutMode,
    ) {
        if state.current_phase.is_in_progress() {
            record_ongoing_time(state);
        }
    }

    fn settings(&self) -> crate::Result<SettingsNode> {
        self.settings.to_node()
    }

    fn set_settings(&mut self, settings: &SettingsNode) -> crate::Result<()> {
        self.settings.apply_node(settings)
    }

    fn settings_control(&mut self, mode: LayoutMode) -> &mut TimeAttackPauseSettings {
        self.settings.mode = mode;
        &mut self.settings
    }
}

/// Copy the current time into the current segment's ongoing slot
fn record_ongoing_time(state: &mut TimerState) {
    let current_time = state.current_time();
    if let Some(segment) = state.current_split_mut() {
        segment.set_comparison(ONGOING_COMPARISON, current_time);
    }
}

fn clear_ongoing_comparison(run: &mut Run, _phase: TimerPhase) {
    for segment in &mut *run {
        segment.remove_comparison(ONGOING_COMPARISON);
    }
    run.has_changed = true;
    info!("Cleared ongoing comparison after reset");
}
