// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline helpers for the creative studio.
//!
//! This crate provides:
//! - Clip and audio items with millisecond timing
//! - Snap points and value snapping for clip drags
//! - Visible-range virtualization for long timelines
//!
//! The editing UI owns the item lists; everything here is a pure query.

pub mod item;
pub mod snapping;
pub mod virtualization;
pub mod settings;

pub use item::{ItemId, ItemKind, TimelineItem};
pub use snapping::{collect_snap_points, snap_value, TimelineSnapConfig, MIN_SNAP_THRESHOLD};
pub use virtualization::{
    thumbnail_quality, visible_items, visible_range, ThumbnailQuality, VirtualizationOptions,
    VisibleRange, DEFAULT_BUFFER_SIZE,
};
pub use settings::TimelineSettings;
