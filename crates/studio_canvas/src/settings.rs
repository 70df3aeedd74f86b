// SPDX-License-Identifier: MIT OR Apache-2.0
//! Canvas settings.

use crate::culling::DEFAULT_CULL_MARGIN;
use crate::snap::SnapConfig;
use serde::{Deserialize, Serialize};

/// Canvas behaviour knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// World-unit margin kept around the viewport when culling
    pub cull_margin: f64,
    /// Whether dragged nodes snap
    pub snap_enabled: bool,
    /// Snapping parameters
    pub snap: SnapConfig,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            cull_margin: DEFAULT_CULL_MARGIN,
            snap_enabled: true,
            snap: SnapConfig::default(),
        }
    }
}
