//! Host-facing component traits

use crate::settings::SettingsNode;
use crate::state::TimerState;
use crate::types::LayoutMode;

/// Lets a component request a repaint of part of its area
pub trait Invalidator {
    /// Mark a rectangle of the layout as needing a redraw
    fn invalidate(&mut self, x: f32, y: f32, width: f32, height: f32);
}

/// A layout component without a visual of its own.
///
/// The host constructs the component when it is added to a layout (or a
/// layout containing it is opened), calls [`update`](Self::update) from its
/// render loop, and drops it when the component is removed.
pub trait LogicComponent {
    /// Settings control the host embeds in its layout editor
    type SettingsControl;

    /// Name shown in the layout editor
    fn component_name(&self) -> &str;

    /// Called once per rendered frame.
    ///
    /// This runs hundreds to thousands of times per second. Implementations
    /// must not block and must not panic.
    fn update(
        &mut self,
        invalidator: Option<&mut dyn Invalidator>,
        state: &mut TimerState,
        width: f32,
        height: f32,
        mode: LayoutMode,
    );

    /// Settings node for the host to persist with the layout
    fn settings(&self) -> crate::Result<SettingsNode>;

    /// Restore settings from a node persisted with the layout
    fn set_settings(&mut self, settings: &SettingsNode) -> crate::Result<()>;

    /// Settings control for the given layout mode
    fn settings_control(&mut self, mode: LayoutMode) -> &mut Self::SettingsControl;
}
