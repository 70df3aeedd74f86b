// SPDX-License-Identifier: MIT OR Apache-2.0
//! Items placed on the timeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a timeline item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create an item ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Type of timeline item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Video or image clip
    #[default]
    Clip,
    /// Audio track segment
    Audio,
}

/// A clip or audio segment; times are in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    /// Unique item ID
    pub id: ItemId,
    /// Item type
    #[serde(default)]
    pub kind: ItemKind,
    /// Start time
    #[serde(default)]
    pub start_time: f64,
    /// Length, when known
    #[serde(default)]
    pub duration: Option<f64>,
    /// Explicit end time; takes precedence over `duration`
    #[serde(default)]
    pub end_time: Option<f64>,
    /// Track (row) the item sits on
    #[serde(default)]
    pub track_index: u32,
}

impl TimelineItem {
    /// Create a clip
    pub fn clip(id: impl Into<ItemId>, start_time: f64, duration: f64) -> Self {
        Self {
            id: id.into(),
            kind: ItemKind::Clip,
            start_time,
            duration: Some(duration),
            end_time: None,
            track_index: 0,
        }
    }

    /// Create an audio segment
    pub fn audio(id: impl Into<ItemId>, start_time: f64, duration: f64) -> Self {
        Self {
            kind: ItemKind::Audio,
            ..Self::clip(id, start_time, duration)
        }
    }

    /// Set the track
    pub fn on_track(mut self, track_index: u32) -> Self {
        self.track_index = track_index;
        self
    }

    /// End time: explicit end, else start plus duration, else start
    pub fn end(&self) -> f64 {
        match (self.end_time, self.duration) {
            (Some(end), _) => end,
            (None, Some(duration)) => self.start_time + duration,
            (None, None) => self.start_time,
        }
    }
}
