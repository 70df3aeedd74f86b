// SPDX-License-Identifier: MIT OR Apache-2.0
//! Port definitions for node inputs/outputs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a port (a "handle" in the editor)
///
/// Handle ids follow a naming convention such as `"image-output"` or
/// `"prompt-text-input"`; [`PortType::from_handle_id`] reads the data type
/// back out of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortId(pub String);

impl PortId {
    /// Create a port ID from a handle string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw handle string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PortId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PortId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&PortId> for PortId {
    fn from(value: &PortId) -> Self {
        value.clone()
    }
}

/// Port direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// Input port
    Input,
    /// Output port
    Output,
}

/// How many connections a port accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// At most one connection
    Single,
    /// Any number of connections
    #[default]
    Multiple,
}

/// Data type that can flow through ports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortType {
    /// Prompt text or metadata
    Text,
    /// Still image
    Image,
    /// Video clip
    Video,
    /// Any type (for generic nodes)
    Any,
}

impl PortType {
    /// Substring tokens checked by [`PortType::from_handle_id`], in match order.
    pub const HANDLE_TOKENS: [(&'static str, PortType); 3] = [
        ("text", PortType::Text),
        ("image", PortType::Image),
        ("video", PortType::Video),
    ];

    /// Infer the data type from a handle id.
    ///
    /// Tokens are tested in the fixed order `text`, `image`, `video` and the
    /// first one contained in the id wins, so `"text-to-image"` is
    /// [`PortType::Text`]. Ids without any token are [`PortType::Any`].
    pub fn from_handle_id(handle_id: &str) -> Self {
        Self::HANDLE_TOKENS
            .iter()
            .find(|(token, _)| handle_id.contains(token))
            .map_or(PortType::Any, |(_, port_type)| *port_type)
    }

    /// Lowercase name used in messages and documents
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Any => "any",
        }
    }

    /// Check if this type can connect to another type
    pub fn can_connect_to(&self, other: &PortType) -> bool {
        // Any type can connect to anything
        if matches!(self, Self::Any) || matches!(other, Self::Any) {
            return true;
        }

        // Text passes through to every type as prompt/metadata
        if matches!(self, Self::Text) || matches!(other, Self::Text) {
            return true;
        }

        self == other
    }
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A port on a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// Port (handle) ID, unique within its node
    pub id: PortId,
    /// Port name
    pub name: String,
    /// Port direction
    pub direction: PortDirection,
    /// Data type
    pub port_type: PortType,
    /// Connection cardinality
    #[serde(default)]
    pub cardinality: Cardinality,
    /// Whether the node can run without this input connected
    #[serde(default)]
    pub optional: bool,
}

impl Port {
    /// Create a new input port with a conventional handle id.
    pub fn input(name: impl Into<String>, port_type: PortType) -> Self {
        let name = name.into();
        Self {
            id: handle_id(&name, port_type, PortDirection::Input),
            name,
            direction: PortDirection::Input,
            port_type,
            cardinality: Cardinality::Single,
            optional: false,
        }
    }

    /// Create a new output port with a conventional handle id.
    pub fn output(name: impl Into<String>, port_type: PortType) -> Self {
        let name = name.into();
        Self {
            id: handle_id(&name, port_type, PortDirection::Output),
            name,
            direction: PortDirection::Output,
            port_type,
            cardinality: Cardinality::Multiple, // Outputs fan out by default
            optional: false,
        }
    }

    /// Set the cardinality
    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    /// Mark as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Check if a connection to another port is valid
    pub fn can_connect(&self, other: &Port) -> bool {
        // Must be opposite directions
        if self.direction == other.direction {
            return false;
        }

        self.port_type.can_connect_to(&other.port_type)
    }
}

/// Build `"{name}-{type}-{direction}"`, dropping the type when the name
/// already is the type, so the id round-trips through
/// [`PortType::from_handle_id`].
fn handle_id(name: &str, port_type: PortType, direction: PortDirection) -> PortId {
    let direction = match direction {
        PortDirection::Input => "input",
        PortDirection::Output => "output",
    };
    if name == port_type.name() {
        PortId(format!("{name}-{direction}"))
    } else {
        PortId(format!("{name}-{port_type}-{direction}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_type_inference() {
        assert_eq!(PortType::from_handle_id("text-output"), PortType::Text);
        assert_eq!(PortType::from_handle_id("image-input"), PortType::Image);
        assert_eq!(PortType::from_handle_id("video"), PortType::Video);
        assert_eq!(PortType::from_handle_id("output"), PortType::Any);
        assert_eq!(PortType::from_handle_id(""), PortType::Any);
    }

    #[test]
    fn test_handle_token_order() {
        assert_eq!(PortType::from_handle_id("image-from-text"), PortType::Text);
        assert_eq!(PortType::from_handle_id("video-from-image"), PortType::Image);
    }

    #[test]
    fn test_type_policy() {
        use PortType::*;
        for other in [Text, Image, Video, Any] {
            assert!(Text.can_connect_to(&other));
            assert!(other.can_connect_to(&Text));
            assert!(Any.can_connect_to(&other));
            assert!(other.can_connect_to(&Any));
        }
        assert!(Image.can_connect_to(&Image));
        assert!(Video.can_connect_to(&Video));
        assert!(!Image.can_connect_to(&Video));
        assert!(!Video.can_connect_to(&Image));
    }

    #[test]
    fn test_port_direction_rules() {
        let out = Port::output("image", PortType::Image);
        let inp = Port::input("reference", PortType::Image);
        assert_eq!(out.id.as_str(), "image-output");
        assert!(out.can_connect(&inp));
        assert_eq!(inp.id.as_str(), "reference-image-input");
        assert_eq!(PortType::from_handle_id(inp.id.as_str()), PortType::Image);
        assert!(!out.can_connect(&out.clone()));
        assert_eq!(inp.cardinality, Cardinality::Single);
        assert_eq!(out.cardinality, Cardinality::Multiple);
    }
}
