// SPDX-License-Identifier: MIT OR Apache-2.0
//! Grid snapping and alignment guides for dragged nodes.

use crate::geometry::Point;
use crate::object::CanvasObject;
use serde::{Deserialize, Serialize};

/// Snapping parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Grid pitch in world units
    pub grid_size: f64,
    /// Distance below which a coordinate snaps (exclusive)
    pub threshold: f64,
    /// Size assumed for nodes without one
    pub default_node_size: (f64, f64),
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            grid_size: 50.0,
            threshold: 10.0,
            default_node_size: (200.0, 100.0),
        }
    }
}

/// A node taking part in alignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapNode {
    /// Node id
    pub id: String,
    /// Top-left corner
    pub position: Point,
    /// Width, if measured
    #[serde(default)]
    pub width: Option<f64>,
    /// Height, if measured
    #[serde(default)]
    pub height: Option<f64>,
}

impl SnapNode {
    /// Create an unmeasured node
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            position: Point::new(x, y),
            width: None,
            height: None,
        }
    }

    /// Set the measured size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Size with missing or zero dimensions replaced by the default
    fn size(&self, config: &SnapConfig) -> (f64, f64) {
        let (default_width, default_height) = config.default_node_size;
        (
            measured_or(self.width, default_width),
            measured_or(self.height, default_height),
        )
    }
}

impl From<&CanvasObject> for SnapNode {
    fn from(object: &CanvasObject) -> Self {
        let bounds = object.bounds();
        Self {
            id: object.id.to_string(),
            position: bounds.min(),
            width: Some(bounds.width()),
            height: Some(bounds.height()),
        }
    }
}

fn measured_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => default,
    }
}

/// Alignment lines to draw while dragging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapGuides {
    /// Y coordinates of horizontal lines
    pub horizontal: Vec<f64>,
    /// X coordinates of vertical lines
    pub vertical: Vec<f64>,
}

impl SnapGuides {
    /// No guides at all
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }
}

/// Outcome of [`snap_to_grid`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapResult {
    /// Adjusted top-left corner
    pub position: Point,
    /// Guides for every alignment that matched
    pub guides: SnapGuides,
}

/// Snap a dragged node to the grid, then to edges and centres of the others.
///
/// Every comparison uses the unsnapped `position`, so an alignment match
/// overrides the grid result and later matches override earlier ones. Each
/// match also pushes a guide, duplicates included.
pub fn snap_to_grid(
    position: Point,
    node_id: &str,
    nodes: &[SnapNode],
    enabled: bool,
    config: &SnapConfig,
) -> SnapResult {
    if !enabled {
        return SnapResult {
            position,
            guides: SnapGuides::default(),
        };
    }

    let threshold = config.threshold;
    let near = |a: f64, b: f64| (a - b).abs() < threshold;
    let mut snapped = position;
    let mut guides = SnapGuides::default();

    let grid_x = (position.x / config.grid_size).round() * config.grid_size;
    let grid_y = (position.y / config.grid_size).round() * config.grid_size;
    if near(position.x, grid_x) {
        snapped.x = grid_x;
    }
    if near(position.y, grid_y) {
        snapped.y = grid_y;
    }

    let (width, height) = nodes
        .iter()
        .find(|node| node.id == node_id)
        .map_or(config.default_node_size, |node| node.size(config));

    for other in nodes.iter().filter(|node| node.id != node_id) {
        let Point { x: ox, y: oy } = other.position;
        let (other_width, other_height) = other.size(config);

        if near(position.x, ox) {
            snapped.x = ox;
            guides.vertical.push(ox);
        }
        if near(position.x + width, ox + other_width) {
            snapped.x = ox + other_width - width;
            guides.vertical.push(ox + other_width);
        }
        let center_x = ox + other_width / 2.0;
        if near(position.x + width / 2.0, center_x) {
            snapped.x = center_x - width / 2.0;
            guides.vertical.push(center_x);
        }

        if near(position.y, oy) {
            snapped.y = oy;
            guides.horizontal.push(oy);
        }
        if near(position.y + height, oy + other_height) {
            snapped.y = oy + other_height - height;
            guides.horizontal.push(oy + other_height);
        }
        let center_y = oy + other_height / 2.0;
        if near(position.y + height / 2.0, center_y) {
            snapped.y = center_y - height / 2.0;
            guides.horizontal.push(center_y);
        }
    }

    SnapResult {
        position: snapped,
        guides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_disabled_is_identity() {
        let nodes = vec![SnapNode::new("a", 0.0, 0.0), SnapNode::new("b", 3.0, 3.0)];
        let result = snap_to_grid(Point::new(3.0, 3.0), "b", &nodes, false, &SnapConfig::default());
        assert_eq!(result.position, Point::new(3.0, 3.0));
        assert!(result.guides.is_empty());
    }

    #[test]
    fn test_grid_snap() {
        let nodes = vec![SnapNode::new("a", 48.0, 48.0)];
        let result = snap_to_grid(Point::new(48.0, 48.0), "a", &nodes, true, &SnapConfig::default());
        assert_eq!(result.position, Point::new(50.0, 50.0));
        assert!(result.guides.is_empty());
    }

    #[test]
    fn test_grid_threshold_is_exclusive() {
        let result = snap_to_grid(Point::new(60.0, 140.0), "a", &[], true, &SnapConfig::default());
        assert_eq!(result.position, Point::new(60.0, 140.0));
    }

    #[test]
    fn test_left_edge_alignment() {
        // Same size nodes: left, right and centre all match at once
        let nodes = vec![
            SnapNode::new("drag", 0.0, 0.0),
            SnapNode::new("other", 123.0, 400.0),
        ];
        let result = snap_to_grid(Point::new(127.0, 0.0), "drag", &nodes, true, &SnapConfig::default());
        assert_eq!(result.position, Point::new(123.0, 0.0));
        assert_eq!(result.guides.vertical, vec![123.0, 323.0, 223.0]);
        assert!(result.guides.horizontal.is_empty());
    }

    #[test]
    fn test_alignment_overrides_grid() {
        let nodes = vec![
            SnapNode::new("drag", 0.0, 0.0),
            SnapNode::new("other", 500.0, 44.0).with_size(300.0, 80.0),
        ];
        // Grid pulls y to 50; top-top alignment with 44 wins
        let result = snap_to_grid(Point::new(900.0, 48.0), "drag", &nodes, true, &SnapConfig::default());
        assert_eq!(result.position, Point::new(900.0, 44.0));
        assert_eq!(result.guides.horizontal, vec![44.0]);
    }

    #[test]
    fn test_centre_alignment_with_sizes() {
        let nodes = vec![
            SnapNode::new("drag", 0.0, 0.0).with_size(100.0, 40.0),
            SnapNode::new("other", 1000.0, 1000.0).with_size(300.0, 200.0),
        ];
        // Other centre is (1150, 1100); dragged centre is (1147, 1096)
        let result =
            snap_to_grid(Point::new(1097.0, 1076.0), "drag", &nodes, true, &SnapConfig::default());
        assert_eq!(result.position, Point::new(1100.0, 1080.0));
        assert_eq!(result.guides.vertical, vec![1150.0]);
        assert_eq!(result.guides.horizontal, vec![1100.0]);
    }
}
