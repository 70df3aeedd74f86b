// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline settings.

use crate::snapping::TimelineSnapConfig;
use crate::virtualization::DEFAULT_BUFFER_SIZE;
use serde::{Deserialize, Serialize};

/// Timeline behaviour knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    /// Whether dragged clips snap
    pub snap_enabled: bool,
    /// Clip snapping parameters
    pub snap: TimelineSnapConfig,
    /// Extra pixels rendered outside the viewport
    pub buffer_size: f64,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            snap_enabled: true,
            snap: TimelineSnapConfig::default(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_ron_uses_defaults() {
        let settings: TimelineSettings =
            ron::from_str("(snap: (grid_size: 250.0, threshold: Some(80.0)))").unwrap();
        assert!(settings.snap_enabled);
        assert!(settings.snap.snap_to_grid);
        assert_eq!(settings.snap.grid_size, 250.0);
        assert_eq!(settings.snap.threshold, Some(80.0));
        assert_eq!(settings.buffer_size, DEFAULT_BUFFER_SIZE);
    }
}
