// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection (edge) definitions for the graph.

use crate::node::NodeId;
use crate::port::{PortId, PortType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(pub Uuid);

impl ConnectionId {
    /// Create a new random connection ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// A user-drawn edge that has not been committed yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRequest {
    /// Source node ID
    pub source: NodeId,
    /// Source handle, if the editor reported one
    pub source_handle: Option<PortId>,
    /// Target node ID
    pub target: NodeId,
    /// Target handle, if the editor reported one
    pub target_handle: Option<PortId>,
}

impl ConnectionRequest {
    /// Request an edge between two handles
    pub fn new(
        source: impl Into<NodeId>,
        source_handle: impl Into<PortId>,
        target: impl Into<NodeId>,
        target_handle: impl Into<PortId>,
    ) -> Self {
        Self {
            source: source.into(),
            source_handle: Some(source_handle.into()),
            target: target.into(),
            target_handle: Some(target_handle.into()),
        }
    }

    /// Request an edge between two nodes without handle information
    pub fn between(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            source_handle: None,
            target: target.into(),
            target_handle: None,
        }
    }

    /// Whether the edge starts and ends on the same node
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A connection between two ports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Unique connection ID
    pub id: ConnectionId,
    /// Source node ID
    pub source: NodeId,
    /// Source port ID
    pub source_port: PortId,
    /// Target node ID
    pub target: NodeId,
    /// Target port ID
    pub target_port: PortId,
    /// Data type carried, inferred from the source handle
    pub data_type: PortType,
}

impl Connection {
    /// Create a new connection
    pub fn new(
        source: impl Into<NodeId>,
        source_port: impl Into<PortId>,
        target: impl Into<NodeId>,
        target_port: impl Into<PortId>,
    ) -> Self {
        let source_port = source_port.into();
        Self {
            id: ConnectionId::new(),
            data_type: PortType::from_handle_id(source_port.as_str()),
            source: source.into(),
            source_port,
            target: target.into(),
            target_port: target_port.into(),
        }
    }

    /// Check if this connection involves a specific node
    pub fn involves_node(&self, node_id: &NodeId) -> bool {
        self.source == *node_id || self.target == *node_id
    }

    /// Check if this connection ends on a specific port of a node
    pub fn targets_port(&self, node_id: &NodeId, port_id: &PortId) -> bool {
        self.target == *node_id && self.target_port == *port_id
    }

    /// Check if this connection starts on a specific port of a node
    pub fn sources_port(&self, node_id: &NodeId, port_id: &PortId) -> bool {
        self.source == *node_id && self.source_port == *port_id
    }
}
