//! Error types for the component.
//!
//! Tick updates, resets and restoring an ongoing attempt are in-memory
//! mutations of host data and cannot fail. The fallible surface is the
//! settings layer, where the host hands back a node it persisted earlier.
//!
//! ## Recovery
//!
//! ```rust
//! use time_attack_pause::ComponentError;
//!
//! let error = ComponentError::settings_parse("Version", "expected a string");
//! if error.is_recoverable() {
//!     for suggestion in error.recovery_suggestions() {
//!         println!("  - {}", suggestion);
//!     }
//! }
//! ```

use thiserror::Error;

/// Result type alias for component operations.
pub type Result<T, E = ComponentError> = std::result::Result<T, E>;

/// Main error type for component operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ComponentError {
    #[error("Settings format error in {context}")]
    SettingsFormat {
        context: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("Settings parse error in {context}: {details}")]
    SettingsParse { context: String, details: String },

    #[error("Settings version mismatch: expected {expected}, found {found}")]
    SettingsVersion { expected: String, found: String },
}

impl ComponentError {
    /// Returns whether the host can carry on with default settings.
    ///
    /// A malformed or unreadable node can be replaced by defaults. A node
    /// written by an incompatible version should not be silently discarded.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ComponentError::SettingsFormat { .. } => true,
            ComponentError::SettingsParse { .. } => true,
            ComponentError::SettingsVersion { .. } => false,
        }
    }

    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            ComponentError::SettingsFormat { .. } => vec![
                "Check the layout file was not edited by hand",
                "Remove and re-add the component to regenerate its settings",
            ],
            ComponentError::SettingsParse { .. } => vec![
                "Check the settings node is not empty",
                "Reset the component settings to defaults",
            ],
            ComponentError::SettingsVersion { .. } => vec![
                "Update the component to the version that saved the layout",
                "Remove and re-add the component to regenerate its settings",
            ],
        }
    }

    /// Helper constructor for YAML (de)serialization failures.
    pub fn settings_format(context: impl Into<String>, source: serde_yaml_ng::Error) -> Self {
        ComponentError::SettingsFormat { context: context.into(), source }
    }

    /// Helper constructor for settings content errors.
    pub fn settings_parse(context: impl Into<String>, details: impl Into<String>) -> Self {
        ComponentError::SettingsParse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for settings version mismatches.
    pub fn settings_version(expected: impl Into<String>, found: impl Into<String>) -> Self {
        ComponentError::SettingsVersion { expected: expected.into(), found: found.into() }
    }
}
