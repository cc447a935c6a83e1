//! Layout orientation the host renders components in

use serde::{Deserialize, Serialize};

/// Orientation of the layout hosting a component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Components stacked top to bottom
    #[default]
    Vertical,

    /// Components laid out left to right
    Horizontal,
}

impl LayoutMode {
    /// Check if components are laid out side by side
    pub fn is_horizontal(self) -> bool {
        matches!(self, LayoutMode::Horizontal)
    }
}
