// SPDX-License-Identifier: MIT OR Apache-2.0
//! Saved canvas scenes.

use crate::object::CanvasObject;
use crate::viewport::Viewport;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current canvas document format version
pub const CANVAS_FORMAT_VERSION: u32 = 1;

/// Errors loading a canvas document
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed RON
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// Written by a newer editor
    #[error("Canvas version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Newest version this build reads
        supported: u32,
    },
}

/// Objects on a canvas together with the saved camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasDocument {
    /// Format version
    #[serde(default = "current_version")]
    pub version: u32,
    /// Saved camera
    #[serde(default)]
    pub viewport: Viewport,
    /// Objects in draw order
    #[serde(default)]
    pub objects: Vec<CanvasObject>,
}

fn current_version() -> u32 {
    CANVAS_FORMAT_VERSION
}

impl CanvasDocument {
    /// Parse from JSON
    pub fn from_json(content: &str) -> Result<Self, CanvasError> {
        let document: Self = serde_json::from_str(content)?;
        document.check_version()
    }

    /// Parse from RON
    pub fn from_ron(content: &str) -> Result<Self, CanvasError> {
        let document: Self = ron::from_str(content)?;
        document.check_version()
    }

    /// Load a document; `.ron` files are RON, anything else JSON
    pub fn load(path: &Path) -> Result<Self, CanvasError> {
        let content = std::fs::read_to_string(path)?;
        let document = match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => Self::from_ron(&content)?,
            _ => Self::from_json(&content)?,
        };
        tracing::debug!(path = %path.display(), objects = document.objects.len(), "Loaded canvas");
        Ok(document)
    }

    fn check_version(self) -> Result<Self, CanvasError> {
        if self.version > CANVAS_FORMAT_VERSION {
            return Err(CanvasError::UnsupportedVersion {
                found: self.version,
                supported: CANVAS_FORMAT_VERSION,
            });
        }
        Ok(self)
    }
}
