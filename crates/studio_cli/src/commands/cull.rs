// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use studio_canvas::{cull_counted, CanvasDocument};

/// Print the ids of objects visible on a screen of the given size.
pub fn run(canvas: &Path, width: f64, height: f64, margin: f64) -> Result<ExitCode> {
    let document = CanvasDocument::load(canvas)
        .with_context(|| format!("Failed to load canvas {}", canvas.display()))?;

    let (visible, stats) = cull_counted(&document.objects, &document.viewport, width, height, margin);
    tracing::debug!(total = stats.total, visible = stats.visible, margin, "Culled canvas");

    for object in visible {
        println!("{}", object.id);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCENE: &str = r#"{
        "viewport": { "x": 0, "y": 0, "scale": 1 },
        "objects": [
            {
                "id": "near",
                "type": "image",
                "transform": { "x": 100, "y": 100, "scaleX": 1, "scaleY": 1 },
                "data": { "url": "near.png", "width": 100, "height": 100 }
            },
            {
                "id": "far",
                "type": "image",
                "transform": { "x": 2000, "y": 2000, "scaleX": 1, "scaleY": 1 },
                "data": { "url": "far.png", "width": 100, "height": 100 }
            }
        ]
    }"#;

    #[test]
    fn test_reference_scene_culls() {
        let path = super::super::write_temp("cull-scene.json", SCENE);
        let code = run(&path, 800.0, 600.0, 200.0).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_malformed_canvas_is_an_error() {
        let path = super::super::write_temp("cull-broken.json", "{ \"objects\": 3 }");
        let result = run(&path, 800.0, 600.0, 200.0);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
