// SPDX-License-Identifier: MIT OR Apache-2.0
//! Studio configuration.
//!
//! Stored as RON. Every section falls back to its defaults, so a config file
//! only needs the values it overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use studio_canvas::CanvasSettings;
use studio_timeline::TimelineSettings;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Errors loading or saving settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed RON
    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// RON serialization failed
    #[error("RON error: {0}")]
    Serialize(#[from] ron::Error),

    /// Written by a newer build
    #[error("Config version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Newest version this build reads
        supported: u32,
    },
}

/// Top-level settings for the `studio` tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Settings format version
    pub version: u32,
    /// Default log filter when `RUST_LOG` is unset
    pub log_filter: String,
    /// Canvas culling and snapping
    pub canvas: CanvasSettings,
    /// Timeline snapping and virtualization
    pub timeline: TimelineSettings,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            log_filter: "studio=info".to_string(),
            canvas: CanvasSettings::default(),
            timeline: TimelineSettings::default(),
        }
    }
}

impl StudioConfig {
    /// Parse from RON
    pub fn from_ron(content: &str) -> Result<Self, SettingsError> {
        let config: Self = ron::from_str(content)?;
        if config.version > CONFIG_FORMAT_VERSION {
            return Err(SettingsError::UnsupportedVersion {
                found: config.version,
                supported: CONFIG_FORMAT_VERSION,
            });
        }
        Ok(config)
    }

    /// Load from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_ron(&content)
    }

    /// Load from `path`, or use defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, SettingsError> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(StudioConfig::from_ron("()").unwrap(), StudioConfig::default());
    }

    #[test]
    fn test_overrides_keep_other_defaults() {
        let config = StudioConfig::from_ron(
            "(canvas: (cull_margin: 0.0, snap: (threshold: 4.0)), timeline: (snap_enabled: false))",
        )
        .unwrap();
        assert_eq!(config.canvas.cull_margin, 0.0);
        assert_eq!(config.canvas.snap.threshold, 4.0);
        assert_eq!(config.canvas.snap.grid_size, 50.0);
        assert!(!config.timeline.snap_enabled);
        assert_eq!(config.log_filter, "studio=info");
    }

    #[test]
    fn test_pretty_output_reads_back() {
        let mut config = StudioConfig::default();
        config.canvas.snap.grid_size = 20.0;
        let text = config.to_ron().unwrap();
        assert_eq!(StudioConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_newer_version() {
        let err = StudioConfig::from_ron("(version: 2)").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::UnsupportedVersion { found: 2, supported: CONFIG_FORMAT_VERSION }
        ));
    }
}
