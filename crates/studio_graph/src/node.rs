// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the workflow graph.

use crate::port::{Cardinality, Port, PortId, PortType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a node ID from an existing string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a new random node ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&NodeId> for NodeId {
    fn from(value: &NodeId) -> Self {
        value.clone()
    }
}

/// Node position in graph space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
}

impl Position {
    /// Create a position
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Measured node size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in graph units
    pub width: f64,
    /// Height in graph units
    pub height: f64,
}

impl Size {
    /// Create a size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Studio node kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Image generation
    Image,
    /// Prompt source
    Prompt,
    /// Model invocation
    Model,
    /// Generic transform
    Transform,
    /// Workflow sink
    Output,
    /// Fan-in/fan-out routing
    Gateway,
    /// Text generation
    Text,
    /// Video generation
    Video,
}

impl NodeKind {
    /// All built-in kinds
    pub fn all() -> &'static [NodeKind] {
        &[
            NodeKind::Image,
            NodeKind::Prompt,
            NodeKind::Model,
            NodeKind::Transform,
            NodeKind::Output,
            NodeKind::Gateway,
            NodeKind::Text,
            NodeKind::Video,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Prompt => "Prompt",
            Self::Model => "Model",
            Self::Transform => "Transform",
            Self::Output => "Output",
            Self::Gateway => "Gateway",
            Self::Text => "Text",
            Self::Video => "Video",
        }
    }
}

/// Node type definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeTemplate {
    /// Kind of node produced
    pub kind: NodeKind,
    /// Description
    pub description: String,
    /// Default input ports
    pub inputs: Vec<Port>,
    /// Default output ports
    pub outputs: Vec<Port>,
}

/// A node instance in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance ID
    pub id: NodeId,
    /// Node kind
    pub kind: NodeKind,
    /// Display label
    pub label: String,
    /// Position in the graph UI
    pub position: Position,
    /// Measured size, if the UI has laid the node out
    #[serde(default)]
    pub size: Option<Size>,
    /// Input ports
    #[serde(default)]
    pub inputs: Vec<Port>,
    /// Output ports
    #[serde(default)]
    pub outputs: Vec<Port>,
}

impl Node {
    /// Create a bare node with no ports
    pub fn new(id: impl Into<NodeId>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: kind.name().to_string(),
            position: Position::default(),
            size: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Create a node from a template with a fresh ID
    pub fn from_template(template: &NodeTemplate) -> Self {
        Self {
            inputs: template.inputs.clone(),
            outputs: template.outputs.clone(),
            ..Self::new(NodeId::generate(), template.kind)
        }
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the position
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    /// Set the measured size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some(Size::new(width, height));
        self
    }

    /// Add an input port
    pub fn with_input(mut self, port: Port) -> Self {
        self.inputs.push(port);
        self
    }

    /// Add an output port
    pub fn with_output(mut self, port: Port) -> Self {
        self.outputs.push(port);
        self
    }

    /// Get a port by ID
    pub fn port(&self, port_id: &PortId) -> Option<&Port> {
        self.inputs.iter().find(|p| p.id == *port_id)
            .or_else(|| self.outputs.iter().find(|p| p.id == *port_id))
    }
}

/// Registry of available node templates
pub struct NodeRegistry {
    templates: IndexMap<NodeKind, NodeTemplate>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            templates: IndexMap::new(),
        }
    }

    /// Registry with the studio's built-in node kinds
    pub fn builtin() -> Self {
        use PortType::{Any, Image, Text, Video};

        let mut registry = Self::new();
        registry.register(NodeTemplate {
            kind: NodeKind::Image,
            description: "Generate or edit an image".to_string(),
            inputs: vec![
                Port::input("prompt", Text).optional(),
                Port::input("reference", Image).optional(),
            ],
            outputs: vec![
                Port::output("image", Image),
                Port::output("metadata", Any),
            ],
        });
        registry.register(NodeTemplate {
            kind: NodeKind::Prompt,
            description: "Static prompt text".to_string(),
            inputs: Vec::new(),
            outputs: vec![Port::output("text", Text)],
        });
        registry.register(NodeTemplate {
            kind: NodeKind::Text,
            description: "Generate text".to_string(),
            inputs: vec![
                Port::input("input", Text).optional(),
                Port::input("context", Any)
                    .with_cardinality(Cardinality::Multiple)
                    .optional(),
            ],
            outputs: vec![Port::output("text", Text)],
        });
        registry.register(NodeTemplate {
            kind: NodeKind::Video,
            description: "Generate a video clip".to_string(),
            inputs: vec![
                Port::input("prompt", Text).optional(),
                Port::input("image", Image).optional(),
            ],
            outputs: vec![Port::output("video", Video)],
        });
        registry.register(NodeTemplate {
            kind: NodeKind::Transform,
            description: "Transform any input".to_string(),
            inputs: vec![Port::input("input", Any).with_cardinality(Cardinality::Multiple)],
            outputs: vec![Port::output("output", Any)],
        });
        registry.register(NodeTemplate {
            kind: NodeKind::Model,
            description: "Invoke a model".to_string(),
            inputs: vec![
                Port::input("prompt", Text),
                Port::input("input", Any).optional(),
            ],
            outputs: vec![Port::output("output", Any)],
        });
        registry.register(NodeTemplate {
            kind: NodeKind::Output,
            description: "Collect workflow results".to_string(),
            inputs: vec![Port::input("input", Any).with_cardinality(Cardinality::Multiple)],
            outputs: Vec::new(),
        });
        registry.register(NodeTemplate {
            kind: NodeKind::Gateway,
            description: "Route inputs to several consumers".to_string(),
            inputs: vec![Port::input("input", Any).with_cardinality(Cardinality::Multiple)],
            outputs: vec![Port::output("output", Any)],
        });
        registry
    }

    /// Register a node template
    pub fn register(&mut self, template: NodeTemplate) {
        self.templates.insert(template.kind, template);
    }

    /// Get a template by kind
    pub fn get(&self, kind: NodeKind) -> Option<&NodeTemplate> {
        self.templates.get(&kind)
    }

    /// Create a node from a kind
    pub fn create_node(&self, kind: NodeKind) -> Option<Node> {
        self.get(kind).map(Node::from_template)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
