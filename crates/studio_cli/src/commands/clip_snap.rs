// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use studio_timeline::{collect_snap_points, snap_value, ItemId, TimelineItem, TimelineSettings};

/// Print the snapped time for a dragged clip edge.
pub fn run(timeline: &Path, time: f64, exclude: Option<&str>, settings: &TimelineSettings) -> Result<ExitCode> {
    let content = std::fs::read_to_string(timeline)
        .with_context(|| format!("Failed to read timeline {}", timeline.display()))?;
    let items: Vec<TimelineItem> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse timeline {}", timeline.display()))?;

    let snapped = if settings.snap_enabled {
        let exclude = exclude.map(ItemId::new);
        let points = collect_snap_points(&items, exclude.as_ref());
        tracing::debug!(points = points.len(), "Collected snap points");
        snap_value(time, &points, &settings.snap)
    } else {
        time.max(0.0)
    };

    println!("{snapped}");
    Ok(ExitCode::SUCCESS)
}
