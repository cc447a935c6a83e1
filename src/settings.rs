//! Component settings and their persisted form.
//!
//! The host stores each component's settings as an opaque node inside the
//! layout file and hands it back on load. Here that node is a
//! [`SettingsNode`] (a YAML value); the component never looks inside it
//! beyond what [`TimeAttackPauseSettings`] deserializes.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::LayoutMode;
use crate::{ComponentError, Result};

/// Opaque settings node exchanged with the host
pub type SettingsNode = serde_yaml_ng::Value;

/// Version written into every settings node
pub const SETTINGS_VERSION: &str = "1.0";

/// Settings for the ongoing-attempt component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeAttackPauseSettings {
    /// Version of the component that wrote these settings
    pub version: String,

    /// Layout mode the settings control was last opened for
    #[serde(skip)]
    pub mode: LayoutMode,
}

impl Default for TimeAttackPauseSettings {
    fn default() -> Self {
        Self { version: SETTINGS_VERSION.to_string(), mode: LayoutMode::default() }
    }
}

impl TimeAttackPauseSettings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the node the host persists
    pub fn to_node(&self) -> Result<SettingsNode> {
        serde_yaml_ng::to_value(self)
            .map_err(|e| ComponentError::settings_format("serializing settings", e))
    }

    /// Load settings from a node the host persisted earlier.
    ///
    /// A null node (a layout saved before the component had settings) resets
    /// to defaults. The layout mode is kept, it belongs to the open control
    /// rather than to the saved layout.
    pub fn apply_node(&mut self, node: &SettingsNode) -> Result<()> {
        if node.is_null() {
            debug!("Empty settings node, using defaults");
            *self = Self { mode: self.mode, ..Self::default() };
            return Ok(());
        }

        let loaded: TimeAttackPauseSettings = serde_yaml_ng::from_value(node.clone())
            .map_err(|e| ComponentError::settings_format("settings node", e))?;
        check_version(&loaded.version)?;

        self.version = loaded.version;
        Ok(())
    }

    /// Serialize settings to YAML text
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self)
            .map_err(|e| ComponentError::settings_format("writing settings YAML", e))
    }

    /// Parse settings from YAML text, tolerating stray control characters
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let cleaned = clean_settings_yaml(yaml)?;
        let node: SettingsNode = serde_yaml_ng::from_str(&cleaned)
            .map_err(|e| ComponentError::settings_format("reading settings YAML", e))?;

        let mut settings = Self::default();
        settings.apply_node(&node)?;
        Ok(settings)
    }
}

/// Accept any version sharing our major number
fn check_version(found: &str) -> Result<()> {
    let major = |version: &str| version.split('.').next().map(str::trim).map(str::to_owned);

    match (major(SETTINGS_VERSION), major(found)) {
        (Some(ours), Some(theirs)) if ours == theirs => {
            if found != SETTINGS_VERSION {
                warn!("Loading settings written by version {}", found);
            }
            Ok(())
        }
        _ => Err(ComponentError::settings_version(SETTINGS_VERSION, found)),
    }
}

/// Strip control characters that break YAML parsers.
///
/// Newlines, carriage returns and tabs are kept.
fn clean_settings_yaml(yaml: &str) -> Result<String> {
    let cleaned: String = yaml
        .chars()
        .filter(|ch| !matches!(ch, '\x00'..='\x08' | '\x0B'..='\x0C' | '\x0E'..='\x1F'))
        .collect();

    if cleaned.trim().is_empty() {
        return Err(ComponentError::settings_parse(
            "settings YAML",
            "YAML is empty after preprocessing",
        ));
    }

    Ok(cleaned)
}
