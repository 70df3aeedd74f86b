// SPDX-License-Identifier: MIT OR Apache-2.0
//! Snapping for clip drags.
//!
//! While a clip is dragged its edges lock onto the start and end times of
//! every other item, falling back to the time grid.

use crate::item::{ItemId, TimelineItem};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Lower bound for the effective snap distance, in milliseconds
pub const MIN_SNAP_THRESHOLD: f64 = 50.0;

/// Snapping parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSnapConfig {
    /// Round to the time grid before looking for points
    pub snap_to_grid: bool,
    /// Grid pitch in milliseconds; zero or negative disables the grid
    pub grid_size: f64,
    /// Requested snap distance; raised to the grid size and the minimum
    pub threshold: Option<f64>,
}

impl TimelineSnapConfig {
    /// Grid snapping with the given pitch
    pub fn grid(grid_size: f64) -> Self {
        Self {
            snap_to_grid: true,
            grid_size,
            threshold: None,
        }
    }

    /// Distance within which a point captures the value (inclusive)
    pub fn effective_threshold(&self) -> f64 {
        let grid = if self.grid_size.is_nan() { 0.0 } else { self.grid_size };
        self.threshold
            .unwrap_or(0.0)
            .max(grid)
            .max(MIN_SNAP_THRESHOLD)
    }
}

impl Default for TimelineSnapConfig {
    fn default() -> Self {
        Self::grid(100.0)
    }
}

/// Sorted, de-duplicated start and end times of every item except `exclude`.
///
/// Times are rounded to whole milliseconds and clamped at zero; NaN and
/// infinite times are skipped.
pub fn collect_snap_points(items: &[TimelineItem], exclude: Option<&ItemId>) -> Vec<u64> {
    let mut points = BTreeSet::new();
    for item in items.iter().filter(|item| Some(&item.id) != exclude) {
        add_point(&mut points, item.start_time);
        add_point(&mut points, item.end());
    }
    points.into_iter().collect()
}

fn add_point(points: &mut BTreeSet<u64>, value: f64) {
    if value.is_finite() {
        points.insert(value.round().max(0.0) as u64);
    }
}

/// Nearest point to `target` in a sorted slice
fn nearest_point(points: &[u64], target: f64) -> Option<u64> {
    // First index whose point is >= target; it wins ties with its predecessor
    let index = points.partition_point(|&point| (point as f64) < target);
    let candidates = [Some(index), index.checked_sub(1)];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|i| points.get(i).copied())
        .min_by(|a, b| {
            let da = (*a as f64 - target).abs();
            let db = (*b as f64 - target).abs();
            da.total_cmp(&db)
        })
}

/// Snap a dragged time.
///
/// The value is clamped at zero and optionally rounded to the grid; if the
/// nearest snap point is within [`TimelineSnapConfig::effective_threshold`]
/// (inclusive) the point wins, otherwise the grid value is returned.
pub fn snap_value(value: f64, points: &[u64], config: &TimelineSnapConfig) -> f64 {
    let raw = value.max(0.0);
    let on_grid = if config.snap_to_grid && config.grid_size > 0.0 {
        (raw / config.grid_size).round() * config.grid_size
    } else {
        raw
    };

    match nearest_point(points, on_grid) {
        Some(point) if (point as f64 - on_grid).abs() <= config.effective_threshold() => {
            tracing::trace!(value, point, "Snapped to timeline point");
            point as f64
        }
        _ => on_grid.max(0.0),
    }
}
