// SPDX-License-Identifier: MIT OR Apache-2.0
//! Virtualized rendering of long timelines.
//!
//! Only items overlapping the scrolled window, padded by a pixel buffer on
//! both sides, are handed to the renderer.

use crate::item::TimelineItem;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Default padding, in pixels, rendered beyond each side of the viewport
pub const DEFAULT_BUFFER_SIZE: f64 = 5000.0;

/// Scroll state of the timeline panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VirtualizationOptions {
    /// Horizontal scroll position in pixels
    pub scroll_offset: f64,
    /// Visible panel width in pixels
    pub viewport_width: f64,
    /// Zoom: pixels per second of timeline
    pub pixels_per_second: f64,
    /// Extra pixels rendered outside the viewport
    #[serde(default = "default_buffer_size")]
    pub buffer_size: f64,
}

fn default_buffer_size() -> f64 {
    DEFAULT_BUFFER_SIZE
}

impl VirtualizationOptions {
    /// Options with the default buffer
    pub fn new(scroll_offset: f64, viewport_width: f64, pixels_per_second: f64) -> Self {
        Self {
            scroll_offset,
            viewport_width,
            pixels_per_second,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Visible window and the slice of items to render
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisibleRange {
    /// Window start in milliseconds, never negative
    pub start_time: u64,
    /// Window end in milliseconds
    pub end_time: u64,
    /// Indices of items to render
    pub items: Range<usize>,
}

/// Compute the visible window for items sorted by start time.
///
/// Items ending before the window are skipped from the front; scanning stops
/// at the first item starting after it.
pub fn visible_range(items: &[TimelineItem], options: &VirtualizationOptions) -> VisibleRange {
    let pps = options.pixels_per_second;
    let start_secs = ((options.scroll_offset - options.buffer_size) / pps).max(0.0);
    let end_secs = (options.scroll_offset + options.viewport_width + options.buffer_size) / pps;
    let start_time = seconds_to_ms(start_secs);
    let end_time = seconds_to_ms(end_secs);

    let mut first = 0;
    let mut last = items.len();
    for (index, item) in items.iter().enumerate() {
        if item.end() < start_time as f64 {
            first = index + 1;
        }
        if item.start_time > end_time as f64 {
            last = index;
            break;
        }
    }

    VisibleRange {
        start_time,
        end_time,
        items: first.min(last)..last,
    }
}

/// Items to render for the given scroll state
pub fn visible_items<'a>(items: &'a [TimelineItem], options: &VirtualizationOptions) -> &'a [TimelineItem] {
    let range = visible_range(items, options);
    &items[range.items]
}

fn seconds_to_ms(seconds: f64) -> u64 {
    (seconds * 1000.0).round().max(0.0) as u64
}

/// Thumbnail resolution for a timeline zoom level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailQuality {
    /// Zoomed out
    Low,
    /// Intermediate zoom
    Medium,
    /// Zoomed in
    High,
}

/// Pick thumbnail quality from pixels per second
pub fn thumbnail_quality(pixels_per_second: f64) -> ThumbnailQuality {
    if pixels_per_second > 100.0 {
        ThumbnailQuality::High
    } else if pixels_per_second > 50.0 {
        ThumbnailQuality::Medium
    } else {
        ThumbnailQuality::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clips(count: usize, spacing_ms: f64, length_ms: f64) -> Vec<TimelineItem> {
        (0..count)
            .map(|i| TimelineItem::clip(format!("c{i}").as_str(), i as f64 * spacing_ms, length_ms))
            .collect()
    }

    #[test]
    fn test_window_in_milliseconds() {
        let options = VirtualizationOptions {
            scroll_offset: 2000.0,
            viewport_width: 1000.0,
            pixels_per_second: 100.0,
            buffer_size: 500.0,
        };
        let range = visible_range(&[], &options);
        assert_eq!(range.start_time, 15_000);
        assert_eq!(range.end_time, 35_000);
        assert_eq!(range.items, 0..0);
    }

    #[test]
    fn test_window_clamped_at_zero() {
        let range = visible_range(&[], &VirtualizationOptions::new(0.0, 800.0, 100.0));
        assert_eq!(range.start_time, 0);
        assert_eq!(range.end_time, 58_000);
    }

    #[test]
    fn test_slices_sorted_items() {
        // One 1s clip every 10s
        let items = clips(100, 10_000.0, 1000.0);
        let options = VirtualizationOptions {
            scroll_offset: 30_000.0,
            viewport_width: 2000.0,
            pixels_per_second: 100.0,
            buffer_size: 1000.0,
        };
        // Window is 290s..330s
        let range = visible_range(&items, &options);
        assert_eq!(range.items, 29..34);

        let visible = visible_items(&items, &options);
        assert_eq!(visible.first().map(|i| i.id.0.as_str()), Some("c29"));
        assert_eq!(visible.last().map(|i| i.id.0.as_str()), Some("c33"));
    }

    #[test]
    fn test_thumbnail_quality() {
        assert_eq!(thumbnail_quality(150.0), ThumbnailQuality::High);
        assert_eq!(thumbnail_quality(100.0), ThumbnailQuality::Medium);
        assert_eq!(thumbnail_quality(50.0), ThumbnailQuality::Low);
    }
}
