// SPDX-License-Identifier: MIT OR Apache-2.0
//! Culling and selection over generated scenes.

use studio_canvas::{
    cull, cull_with_margin, is_visible, object_bounds, selection_bounds, BoundingBox,
    CanvasObject, ObjectId, Viewport,
};

/// A 20x20 grid of 100x100 images spaced 300 apart
fn grid_scene() -> Vec<CanvasObject> {
    let mut objects = Vec::new();
    for row in 0..20 {
        for col in 0..20 {
            objects.push(CanvasObject::image(
                format!("r{row}c{col}"),
                col as f64 * 300.0 - 3000.0,
                row as f64 * 300.0 - 3000.0,
                100.0,
                100.0,
            ));
        }
    }
    objects
}

#[test]
fn test_cull_is_idempotent() {
    let objects = grid_scene();
    let viewport = Viewport::new(120.0, -40.0, 0.75);

    let once: Vec<CanvasObject> = cull(&objects, &viewport, 1280.0, 720.0)
        .into_iter()
        .cloned()
        .collect();
    let twice = cull(&once, &viewport, 1280.0, 720.0);

    assert!(!once.is_empty());
    assert!(once.len() < objects.len());
    assert_eq!(twice.len(), once.len());
    assert!(twice.iter().zip(&once).all(|(a, b)| a.id == b.id));
}

#[test]
fn test_cull_matches_visibility_predicate() {
    let objects = grid_scene();
    let viewport = Viewport::new(-500.0, 300.0, 1.3);
    let view = viewport.world_bounds(800.0, 600.0);

    let visible = cull_with_margin(&objects, &viewport, 800.0, 600.0, 50.0);
    let expected: Vec<&CanvasObject> = objects
        .iter()
        .filter(|o| is_visible(&object_bounds(o), &view, 50.0))
        .collect();
    assert_eq!(visible, expected);
}

#[test]
fn test_disjoint_scene_is_empty() {
    let objects = grid_scene();
    let viewport = Viewport::new(1.0e7, 1.0e7, 1.0);
    assert!(cull(&objects, &viewport, 800.0, 600.0).is_empty());
}

#[test]
fn test_infinite_margin_returns_everything() {
    let objects = grid_scene();
    let viewport = Viewport::new(1.0e7, 1.0e7, 1.0);
    let visible = cull_with_margin(&objects, &viewport, 800.0, 600.0, f64::INFINITY);
    assert_eq!(visible.len(), objects.len());
}

#[test]
fn test_reference_scene() {
    let objects = vec![
        CanvasObject::image("far", 2000.0, 2000.0, 100.0, 100.0),
        CanvasObject::image("near", 100.0, 100.0, 100.0, 100.0),
    ];
    let visible = cull(&objects, &Viewport::default(), 800.0, 600.0);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id.as_str(), "near");
}

#[test]
fn test_selection_bounds_follow_viewport() {
    let objects = grid_scene();
    let selected = [ObjectId::new("r0c0"), ObjectId::new("r1c1")];

    let world = selection_bounds(&objects, &selected, &Viewport::default());
    assert_eq!(world, Some(BoundingBox::new(-3000.0, -3000.0, -2600.0, -2600.0)));

    let zoomed = selection_bounds(&objects, &selected, &Viewport::new(3000.0, 3000.0, 0.5));
    assert_eq!(zoomed, Some(BoundingBox::new(1500.0, 1500.0, 1700.0, 1700.0)));
}
