// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{bail, Result};
use std::path::Path;
use std::process::ExitCode;
use studio_canvas::{snap_to_grid, CanvasSettings, Point, SnapNode};
use studio_graph::Node;

/// Print the snapped position and alignment guides for a dragged node.
pub fn run(workflow: &Path, node_id: &str, x: f64, y: f64, settings: &CanvasSettings) -> Result<ExitCode> {
    let document = super::load_workflow(workflow)?;
    if !document.nodes.iter().any(|node| node.id.as_str() == node_id) {
        bail!("Node {node_id} not found in {}", workflow.display());
    }

    let nodes: Vec<SnapNode> = document.nodes.iter().map(snap_node).collect();
    let result = snap_to_grid(Point::new(x, y), node_id, &nodes, settings.snap_enabled, &settings.snap);

    println!("position: {} {}", result.position.x, result.position.y);
    println!("vertical guides: {:?}", result.guides.vertical);
    println!("horizontal guides: {:?}", result.guides.horizontal);
    Ok(ExitCode::SUCCESS)
}

fn snap_node(node: &Node) -> SnapNode {
    let snap = SnapNode::new(node.id.as_str(), node.position.x, node.position.y);
    match node.size {
        Some(size) => snap.with_size(size.width, size.height),
        None => snap,
    }
}
