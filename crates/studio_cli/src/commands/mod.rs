// SPDX-License-Identifier: MIT OR Apache-2.0
//! Subcommand implementations.

pub mod validate;
pub mod plan;
pub mod cull;
pub mod snap;
pub mod clip_snap;

use anyhow::{Context, Result};
use std::path::Path;
use studio_graph::WorkflowDocument;

/// Load a workflow document with path context on failure
pub fn load_workflow(path: &Path) -> Result<WorkflowDocument> {
    WorkflowDocument::load(path).with_context(|| format!("Failed to load workflow {}", path.display()))
}

/// Write `content` to a per-process file in the temp directory
#[cfg(test)]
pub(crate) fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("studio-cli-{}-{name}", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}
