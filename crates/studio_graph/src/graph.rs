// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data structure containing nodes and connections.

use crate::connection::{Connection, ConnectionId, ConnectionRequest};
use crate::node::{Node, NodeId};
use crate::port::{Cardinality, PortDirection, PortId};
use crate::validation::{self, RejectReason};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A workflow node graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes in the graph
    nodes: IndexMap<NodeId, Node>,
    /// Connections between nodes
    connections: IndexMap<ConnectionId, Connection>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph, replacing any node with the same ID
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id.clone();
        self.nodes.insert(id.clone(), node);
        id
    }

    /// Remove a node and its connections
    pub fn remove_node(&mut self, node_id: &NodeId) -> Option<Node> {
        self.connections.retain(|_, c| !c.involves_node(node_id));
        self.nodes.shift_remove(node_id)
    }

    /// Get a node by ID
    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    /// Get all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node IDs
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Connect two declared ports.
    ///
    /// Unlike [`validation::validate_connection`], which infers types from
    /// handle ids, this resolves both ports on their nodes and uses the
    /// declared direction, type and cardinality.
    ///
    /// Text is compatible in both directions (`image -> text` is accepted),
    /// and cardinality is checked after the self-loop and cycle checks, so a
    /// cyclic edge onto an occupied port reports [`RejectReason::Cycle`].
    pub fn connect(&mut self, request: &ConnectionRequest) -> Result<ConnectionId, ConnectionError> {
        let source_node = self.nodes.get(&request.source)
            .ok_or_else(|| ConnectionError::NodeNotFound(request.source.clone()))?;
        let target_node = self.nodes.get(&request.target)
            .ok_or_else(|| ConnectionError::NodeNotFound(request.target.clone()))?;

        let source_port_id = request.source_handle.as_ref()
            .ok_or(ConnectionError::MissingHandle)?;
        let target_port_id = request.target_handle.as_ref()
            .ok_or(ConnectionError::MissingHandle)?;

        let source_port = source_node.port(source_port_id)
            .ok_or_else(|| ConnectionError::PortNotFound(source_port_id.clone()))?;
        let target_port = target_node.port(target_port_id)
            .ok_or_else(|| ConnectionError::PortNotFound(target_port_id.clone()))?;

        if source_port.direction != PortDirection::Output
            || target_port.direction != PortDirection::Input
        {
            return Err(ConnectionError::WrongDirection);
        }

        if request.is_self_loop() {
            return Err(RejectReason::SelfLoop.into());
        }

        if self.would_create_cycle(&request.source, &request.target) {
            return Err(RejectReason::Cycle.into());
        }

        validation::check_types(source_port.port_type, target_port.port_type)?;

        if source_port.cardinality == Cardinality::Single
            && self.connections.values().any(|c| c.sources_port(&request.source, source_port_id))
        {
            return Err(ConnectionError::PortAlreadyConnected(source_port_id.clone()));
        }
        if target_port.cardinality == Cardinality::Single
            && self.connections.values().any(|c| c.targets_port(&request.target, target_port_id))
        {
            return Err(ConnectionError::PortAlreadyConnected(target_port_id.clone()));
        }

        let connection = Connection {
            id: ConnectionId::new(),
            source: request.source.clone(),
            source_port: source_port_id.clone(),
            target: request.target.clone(),
            target_port: target_port_id.clone(),
            data_type: source_port.port_type,
        };
        let id = connection.id;
        tracing::debug!(
            source = %connection.source,
            target = %connection.target,
            data_type = %connection.data_type,
            "Connected nodes"
        );
        self.connections.insert(id, connection);
        Ok(id)
    }

    /// Insert a connection without validation (used when loading documents)
    pub fn insert_connection(&mut self, connection: Connection) -> ConnectionId {
        let id = connection.id;
        self.connections.insert(id, connection);
        id
    }

    /// Remove a connection
    pub fn disconnect(&mut self, connection_id: ConnectionId) -> Option<Connection> {
        self.connections.shift_remove(&connection_id)
    }

    /// Get a connection by ID
    pub fn connection(&self, connection_id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&connection_id)
    }

    /// Get all connections
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Get connections leaving a node
    pub fn connections_from<'a>(&'a self, node_id: &'a NodeId) -> impl Iterator<Item = &'a Connection> {
        self.connections.values().filter(move |c| c.source == *node_id)
    }

    /// Get connections involving a node
    pub fn connections_for_node<'a>(&'a self, node_id: &'a NodeId) -> impl Iterator<Item = &'a Connection> {
        self.connections.values().filter(move |c| c.involves_node(node_id))
    }

    /// Get the number of connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Whether adding `source -> target` would close a cycle in this graph
    pub fn would_create_cycle(&self, source: &NodeId, target: &NodeId) -> bool {
        validation::closes_cycle(
            source,
            target,
            self.nodes.keys(),
            self.connections.values().map(|c| (&c.source, &c.target)),
        )
    }

    /// Validate a handle-based request against this graph's current state
    pub fn validate(&self, request: &ConnectionRequest) -> Result<(), RejectReason> {
        let nodes: Vec<Node> = self.nodes.values().cloned().collect();
        let connections: Vec<Connection> = self.connections.values().cloned().collect();
        validation::validate_connection(request, &nodes, &connections)
    }
}

/// Error when creating a connection
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConnectionError {
    /// Node not found
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Port not found
    #[error("Port not found: {0}")]
    PortNotFound(PortId),

    /// Declared-port connects need both handles
    #[error("Connection request is missing a handle")]
    MissingHandle,

    /// Edges must run from an output to an input
    #[error("Can only connect an output to an input")]
    WrongDirection,

    /// Port is already connected
    #[error("Port already connected: {0}")]
    PortAlreadyConnected(PortId),

    /// Rejected by the connection validator
    #[error(transparent)]
    Rejected(#[from] RejectReason),
}
