// SPDX-License-Identifier: MIT OR Apache-2.0
//! Viewport culling.
//!
//! Objects whose bounds are strictly outside the viewport (grown by a
//! margin) are dropped before rendering. The margin keeps objects that are
//! about to scroll into view alive so they don't pop in.

use crate::geometry::BoundingBox;
use crate::object::CanvasObject;
use crate::viewport::Viewport;

/// World-unit margin added around the viewport by [`cull`]
pub const DEFAULT_CULL_MARGIN: f64 = 200.0;

/// Whether an object box overlaps the viewport box grown by `margin`.
///
/// Touching edges count as visible.
pub fn is_visible(object_bounds: &BoundingBox, viewport_bounds: &BoundingBox, margin: f64) -> bool {
    !object_bounds.is_separated_from(&viewport_bounds.expand(margin))
}

/// Summary of a culling pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullStats {
    /// Objects examined
    pub total: usize,
    /// Objects kept
    pub visible: usize,
}

impl CullStats {
    /// Objects dropped
    pub fn culled(&self) -> usize {
        self.total - self.visible
    }
}

/// Objects visible on a screen of the given size, using [`DEFAULT_CULL_MARGIN`]
pub fn cull<'a>(
    objects: &'a [CanvasObject],
    viewport: &Viewport,
    screen_width: f64,
    screen_height: f64,
) -> Vec<&'a CanvasObject> {
    cull_with_margin(objects, viewport, screen_width, screen_height, DEFAULT_CULL_MARGIN)
}

/// Objects visible on a screen of the given size with an explicit margin.
///
/// Input order is preserved. An infinite margin keeps everything.
pub fn cull_with_margin<'a>(
    objects: &'a [CanvasObject],
    viewport: &Viewport,
    screen_width: f64,
    screen_height: f64,
    margin: f64,
) -> Vec<&'a CanvasObject> {
    let (visible, stats) = cull_counted(objects, viewport, screen_width, screen_height, margin);
    tracing::trace!(
        total = stats.total,
        visible = stats.visible,
        culled = stats.culled(),
        "Culled canvas objects"
    );
    visible
}

/// Like [`cull_with_margin`], also returning the pass summary
pub fn cull_counted<'a>(
    objects: &'a [CanvasObject],
    viewport: &Viewport,
    screen_width: f64,
    screen_height: f64,
    margin: f64,
) -> (Vec<&'a CanvasObject>, CullStats) {
    let view = viewport.world_bounds(screen_width, screen_height);
    let visible: Vec<&CanvasObject> = objects
        .iter()
        .filter(|object| is_visible(&object.bounds(), &view, margin))
        .collect();
    let stats = CullStats {
        total: objects.len(),
        visible: visible.len(),
    };
    (visible, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(objects: &[&CanvasObject]) -> Vec<String> {
        objects.iter().map(|o| o.id.to_string()).collect()
    }

    #[test]
    fn test_far_object_excluded() {
        let objects = vec![
            CanvasObject::image("near", 100.0, 100.0, 100.0, 100.0),
            CanvasObject::image("far", 2000.0, 2000.0, 100.0, 100.0),
        ];
        let visible = cull(&objects, &Viewport::default(), 800.0, 600.0);
        assert_eq!(ids(&visible), vec!["near"]);
    }

    #[test]
    fn test_margin_keeps_nearby_objects() {
        // Right edge of the screen is at 800; object starts 150 past it
        let objects = vec![CanvasObject::image("edge", 950.0, 0.0, 50.0, 50.0)];
        assert_eq!(cull(&objects, &Viewport::default(), 800.0, 600.0).len(), 1);
        assert!(cull_with_margin(&objects, &Viewport::default(), 800.0, 600.0, 0.0).is_empty());
    }

    #[test]
    fn test_infinite_margin_keeps_all() {
        let objects: Vec<CanvasObject> = (0..10)
            .map(|i| CanvasObject::image(format!("o{i}"), i as f64 * 1e6, -1e6, 10.0, 10.0))
            .collect();
        let visible =
            cull_with_margin(&objects, &Viewport::default(), 800.0, 600.0, f64::INFINITY);
        assert_eq!(visible.len(), objects.len());
    }

    #[test]
    fn test_stats() {
        let objects = vec![
            CanvasObject::image("a", 0.0, 0.0, 10.0, 10.0),
            CanvasObject::image("b", 5000.0, 0.0, 10.0, 10.0),
            CanvasObject::image("c", 10.0, 10.0, 10.0, 10.0),
        ];
        let (visible, stats) = cull_counted(&objects, &Viewport::default(), 800.0, 600.0, 200.0);
        assert_eq!(ids(&visible), vec!["a", "c"]);
        assert_eq!(stats, CullStats { total: 3, visible: 2 });
        assert_eq!(stats.culled(), 1);
    }
}
