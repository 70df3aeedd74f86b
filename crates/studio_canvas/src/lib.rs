// SPDX-License-Identifier: MIT OR Apache-2.0
//! Infinite canvas spatial queries for the creative studio.
//!
//! This crate provides:
//! - World-space bounds of canvas objects
//! - Viewport transform with pan and cursor-anchored zoom
//! - Viewport culling with a configurable margin
//! - Selection bounds and hit testing
//! - Grid snapping with alignment guides
//!
//! All functions are pure over the caller's object list.

pub mod geometry;
pub mod object;
pub mod viewport;
pub mod culling;
pub mod selection;
pub mod snap;
pub mod settings;
pub mod document;

pub use geometry::{BoundingBox, Point};
pub use object::{object_bounds, CanvasObject, ObjectData, ObjectId, ObjectKind, ShapeKind, Transform};
pub use viewport::{viewport_bounds, Viewport};
pub use culling::{cull, cull_counted, cull_with_margin, is_visible, CullStats, DEFAULT_CULL_MARGIN};
pub use selection::{hit_test, selection_bounds};
pub use snap::{snap_to_grid, SnapConfig, SnapGuides, SnapNode, SnapResult};
pub use settings::CanvasSettings;
pub use document::{CanvasDocument, CanvasError};
