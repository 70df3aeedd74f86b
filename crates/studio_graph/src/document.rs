// SPDX-License-Identifier: MIT OR Apache-2.0
//! Workflow documents on disk.
//!
//! Documents are stored as RON (`.ron`, `.workflow`) or JSON (`.json`);
//! the format is chosen by file extension.

use crate::connection::Connection;
use crate::graph::Graph;
use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current workflow document format version
pub const DOCUMENT_FORMAT_VERSION: u32 = 1;

/// Errors reading or writing workflow documents
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed RON
    #[error("RON parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),

    /// RON serialization failed
    #[error("RON error: {0}")]
    Ron(#[from] ron::Error),

    /// Written by a newer editor
    #[error("Document version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Newest version this build reads
        supported: u32,
    },

    /// Extension is neither RON nor JSON
    #[error("Unknown document format: {0}")]
    UnknownFormat(PathBuf),
}

/// Saved editor camera for the graph view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Zoom factor
    pub zoom: f64,
    /// Graph-space point at the centre of the view
    pub center: [f64; 2],
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            center: [0.0, 0.0],
        }
    }
}

/// Serialized workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDocument {
    /// Format version
    pub version: u32,
    /// Workflow title
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Nodes in insertion order
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Connections in insertion order
    #[serde(default)]
    pub connections: Vec<Connection>,
    /// Editor camera
    #[serde(default)]
    pub view: ViewState,
}

impl WorkflowDocument {
    /// Snapshot a graph into a document
    pub fn from_graph(title: impl Into<String>, graph: &Graph) -> Self {
        Self {
            version: DOCUMENT_FORMAT_VERSION,
            title: title.into(),
            description: None,
            nodes: graph.nodes().cloned().collect(),
            connections: graph.connections().cloned().collect(),
            view: ViewState::default(),
        }
    }

    /// Rebuild the graph.
    ///
    /// Connections are inserted as stored, without re-validation.
    pub fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();
        for node in &self.nodes {
            graph.add_node(node.clone());
        }
        for connection in &self.connections {
            graph.insert_connection(connection.clone());
        }
        graph
    }

    /// Parse from JSON
    pub fn from_json(content: &str) -> Result<Self, DocumentError> {
        let document: Self = serde_json::from_str(content)?;
        document.check_version()
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from RON
    pub fn from_ron(content: &str) -> Result<Self, DocumentError> {
        let document: Self = ron::from_str(content)?;
        document.check_version()
    }

    /// Serialize to pretty RON
    pub fn to_ron(&self) -> Result<String, DocumentError> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    /// Load a document, picking the format from the extension
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let document = match format {
            Format::Ron => Self::from_ron(&content)?,
            Format::Json => Self::from_json(&content)?,
        };
        tracing::debug!(
            path = %path.display(),
            nodes = document.nodes.len(),
            connections = document.connections.len(),
            "Loaded workflow document"
        );
        Ok(document)
    }

    /// Save a document, picking the format from the extension
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let content = match Format::from_path(path)? {
            Format::Ron => self.to_ron()?,
            Format::Json => self.to_json()?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    fn check_version(self) -> Result<Self, DocumentError> {
        if self.version > DOCUMENT_FORMAT_VERSION {
            return Err(DocumentError::UnsupportedVersion {
                found: self.version,
                supported: DOCUMENT_FORMAT_VERSION,
            });
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Ron,
    Json,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, DocumentError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron" | "workflow") => Ok(Self::Ron),
            Some("json") => Ok(Self::Json),
            _ => Err(DocumentError::UnknownFormat(path.to_path_buf())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionRequest;
    use crate::node::{NodeKind, NodeRegistry};

    fn sample_graph() -> Graph {
        let registry = NodeRegistry::builtin();
        let mut graph = Graph::new();
        let prompt = graph.add_node(registry.create_node(NodeKind::Prompt).unwrap());
        let image = graph.add_node(
            registry.create_node(NodeKind::Image).unwrap().with_position(300.0, 40.0),
        );
        graph
            .connect(&ConnectionRequest::new(&prompt, "text-output", &image, "prompt-text-input"))
            .unwrap();
        graph
    }

    #[test]
    fn test_json_preserves_graph() {
        let graph = sample_graph();
        let json = WorkflowDocument::from_graph("Poster", &graph).to_json().unwrap();
        let loaded = WorkflowDocument::from_json(&json).unwrap();
        assert_eq!(loaded.title, "Poster");
        assert_eq!(loaded.to_graph(), graph);
    }

    #[test]
    fn test_ron_preserves_graph() {
        let graph = sample_graph();
        let ron = WorkflowDocument::from_graph("Poster", &graph).to_ron().unwrap();
        let loaded = WorkflowDocument::from_ron(&ron).unwrap();
        assert_eq!(loaded.to_graph(), graph);
    }

    #[test]
    fn test_rejects_newer_version() {
        let json = r#"{ "version": 99, "title": "Future" }"#;
        match WorkflowDocument::from_json(json) {
            Err(DocumentError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, 99);
                assert_eq!(supported, DOCUMENT_FORMAT_VERSION);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_save_and_load_by_extension() {
        let graph = sample_graph();
        let document = WorkflowDocument::from_graph("Poster", &graph);
        let dir = std::env::temp_dir();

        for name in ["studio_graph_save.workflow", "studio_graph_save.json"] {
            let path = dir.join(format!("{}-{name}", std::process::id()));
            document.save(&path).unwrap();
            let loaded = WorkflowDocument::load(&path).unwrap();
            std::fs::remove_file(&path).unwrap();
            assert_eq!(loaded.to_graph(), graph);
        }
    }

    #[test]
    fn test_unknown_extension() {
        let err = WorkflowDocument::load(Path::new("workflow.txt")).unwrap_err();
        assert!(matches!(err, DocumentError::UnknownFormat(_)));
    }
}
