// SPDX-License-Identifier: MIT OR Apache-2.0
//! Selection overlay and pointer picking.

use crate::geometry::{BoundingBox, Point};
use crate::object::{CanvasObject, ObjectId};
use crate::viewport::Viewport;

/// Screen-space box around every selected object.
///
/// Ids that match no object are ignored; `None` when nothing resolves.
pub fn selection_bounds(
    objects: &[CanvasObject],
    selected: &[ObjectId],
    viewport: &Viewport,
) -> Option<BoundingBox> {
    let world = objects
        .iter()
        .filter(|object| selected.contains(&object.id))
        .map(CanvasObject::bounds)
        .reduce(|acc, bounds| acc.union(&bounds))?;
    Some(viewport.box_to_screen(&world))
}

/// Top-most visible object under a world-space point.
///
/// Higher layer index wins; among equal layers the later object wins.
pub fn hit_test(objects: &[CanvasObject], point: Point) -> Option<&CanvasObject> {
    objects
        .iter()
        .filter(|object| object.visible && object.bounds().contains(point))
        .max_by_key(|object| object.layer_index)
}
