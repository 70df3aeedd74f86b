// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera transform between world and screen space.

use crate::geometry::{BoundingBox, Point};
use serde::{Deserialize, Serialize};

/// Smallest zoom reachable with the wheel
pub const MIN_ZOOM: f64 = 0.1;
/// Largest zoom reachable with the wheel
pub const MAX_ZOOM: f64 = 10.0;
/// Per-unit wheel zoom factor; `scale *= WHEEL_ZOOM_BASE.powf(delta)`
pub const WHEEL_ZOOM_BASE: f64 = 0.999;

/// Pan and uniform zoom: `screen = world * scale + (x, y)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Horizontal screen offset of the world origin
    pub x: f64,
    /// Vertical screen offset of the world origin
    pub y: f64,
    /// Zoom factor
    pub scale: f64,
}

impl Viewport {
    /// Create a viewport
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    /// Convert world position to screen position
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(world.x * self.scale + self.x, world.y * self.scale + self.y)
    }

    /// Convert screen position to world position
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new((screen.x - self.x) / self.scale, (screen.y - self.y) / self.scale)
    }

    /// Map a world box to screen space
    pub fn box_to_screen(&self, world: &BoundingBox) -> BoundingBox {
        BoundingBox::from_corners(self.world_to_screen(world.min()), self.world_to_screen(world.max()))
    }

    /// World-space rectangle covered by a screen of the given size
    pub fn world_bounds(&self, screen_width: f64, screen_height: f64) -> BoundingBox {
        BoundingBox::from_corners(
            self.screen_to_world(Point::new(0.0, 0.0)),
            self.screen_to_world(Point::new(screen_width, screen_height)),
        )
    }

    /// Move the camera by a screen-space delta
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Set the zoom, keeping the world point under `anchor` (screen space) fixed
    pub fn zoom_at(&mut self, scale: f64, anchor: Point) {
        let world = self.screen_to_world(anchor);
        self.scale = scale;
        self.x = anchor.x - world.x * scale;
        self.y = anchor.y - world.y * scale;
    }

    /// Apply a mouse-wheel step at the cursor, clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`]
    pub fn zoom_to_point(&mut self, wheel_delta: f64, cursor: Point) {
        let scale = (self.scale * WHEEL_ZOOM_BASE.powf(wheel_delta)).clamp(MIN_ZOOM, MAX_ZOOM);
        self.zoom_at(scale, cursor);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Free-function form of [`Viewport::world_bounds`]
pub fn viewport_bounds(viewport: &Viewport, screen_width: f64, screen_height: f64) -> BoundingBox {
    viewport.world_bounds(screen_width, screen_height)
}
