// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection validation for user-drawn edges.
//!
//! A proposed edge is checked, in order, for:
//! 1. self-loops,
//! 2. cycles it would close,
//! 3. data-type compatibility of the two handles, when both endpoint nodes
//!    are known.
//!
//! The first failing check decides the [`RejectReason`]. Validation is re-run
//! from scratch for every proposal; nothing is cached between calls.

use crate::connection::{Connection, ConnectionRequest};
use crate::node::{Node, NodeId};
use crate::port::{PortId, PortType};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Why a proposed connection was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// Source and target are the same node
    #[error("Cannot connect node to itself")]
    SelfLoop,

    /// The edge would close a directed cycle
    #[error("Cycle detected: connection would create loop")]
    Cycle,

    /// Handle data types are incompatible
    #[error("Type mismatch: cannot connect {from} to {to}")]
    TypeMismatch {
        /// Source handle type
        from: PortType,
        /// Target handle type
        to: PortType,
    },
}

impl RejectReason {
    /// Stable reason code for notifications and telemetry
    pub fn code(&self) -> &'static str {
        match self {
            Self::SelfLoop => "INVALID_SELF_LOOP",
            Self::Cycle => "INVALID_CYCLE",
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
        }
    }
}

/// Validate a proposed edge against the current nodes and connections.
pub fn validate_connection(
    request: &ConnectionRequest,
    nodes: &[Node],
    connections: &[Connection],
) -> Result<(), RejectReason> {
    let result = check(request, nodes, connections);
    if let Err(reason) = &result {
        tracing::debug!(
            source = %request.source,
            target = %request.target,
            code = reason.code(),
            "Connection rejected: {reason}"
        );
    }
    result
}

/// Boolean form of [`validate_connection`]
pub fn is_valid_connection(
    request: &ConnectionRequest,
    nodes: &[Node],
    connections: &[Connection],
) -> bool {
    validate_connection(request, nodes, connections).is_ok()
}

fn check(
    request: &ConnectionRequest,
    nodes: &[Node],
    connections: &[Connection],
) -> Result<(), RejectReason> {
    if request.is_self_loop() {
        return Err(RejectReason::SelfLoop);
    }

    if would_create_cycle(&request.source, &request.target, nodes, connections) {
        return Err(RejectReason::Cycle);
    }

    let has_node = |id: &NodeId| nodes.iter().any(|node| &node.id == id);
    if !has_node(&request.source) || !has_node(&request.target) {
        return Ok(());
    }

    check_handle_types(request.source_handle.as_ref(), request.target_handle.as_ref())
}

/// Type check on handle ids; a missing handle on either side skips the check.
///
/// [`validate_connection`] also skips it when either endpoint node is absent
/// from the node list.
pub fn check_handle_types(
    source_handle: Option<&PortId>,
    target_handle: Option<&PortId>,
) -> Result<(), RejectReason> {
    let (Some(source), Some(target)) = (source_handle, target_handle) else {
        return Ok(());
    };
    check_types(
        PortType::from_handle_id(source.as_str()),
        PortType::from_handle_id(target.as_str()),
    )
}

/// Apply the compatibility policy to two resolved types
pub fn check_types(from: PortType, to: PortType) -> Result<(), RejectReason> {
    if from.can_connect_to(&to) {
        Ok(())
    } else {
        Err(RejectReason::TypeMismatch { from, to })
    }
}

/// Whether adding `source -> target` to the given graph closes a cycle.
pub fn would_create_cycle(
    source: &NodeId,
    target: &NodeId,
    nodes: &[Node],
    connections: &[Connection],
) -> bool {
    closes_cycle(
        source,
        target,
        nodes.iter().map(|n| &n.id),
        connections.iter().map(|c| (&c.source, &c.target)),
    )
}

/// Traversal state of a node during the cycle search; unvisited nodes have no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current DFS path
    Active,
    /// Fully explored
    Done,
}

/// Depth-first search from `source` over the edges plus the proposed edge.
///
/// Uses an explicit stack of `(node, next neighbour index)` frames so graph
/// depth is bounded by heap, not by the call stack. Every reachable node is
/// expanded at most once.
pub(crate) fn closes_cycle<'a>(
    source: &'a NodeId,
    target: &'a NodeId,
    nodes: impl IntoIterator<Item = &'a NodeId>,
    edges: impl IntoIterator<Item = (&'a NodeId, &'a NodeId)>,
) -> bool {
    let mut adjacency: IndexMap<&str, IndexSet<&str>> = nodes
        .into_iter()
        .map(|id| (id.as_str(), IndexSet::new()))
        .collect();
    for (from, to) in edges {
        adjacency.entry(from.as_str()).or_default().insert(to.as_str());
    }
    adjacency
        .entry(source.as_str())
        .or_default()
        .insert(target.as_str());

    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut stack: Vec<(&str, usize)> = vec![(source.as_str(), 0)];
    marks.insert(source.as_str(), Mark::Active);

    while let Some(frame) = stack.last_mut() {
        let node = frame.0;
        let next = adjacency
            .get(node)
            .and_then(|neighbors| neighbors.get_index(frame.1))
            .copied();
        frame.1 += 1;

        match next {
            Some(neighbor) => match marks.get(neighbor) {
                Some(Mark::Active) => return true,
                Some(Mark::Done) => {}
                None => {
                    marks.insert(neighbor, Mark::Active);
                    stack.push((neighbor, 0));
                }
            },
            None => {
                marks.insert(node, Mark::Done);
                stack.pop();
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    fn nodes(ids: &[&str]) -> Vec<Node> {
        ids.iter().map(|id| Node::new(*id, NodeKind::Transform)).collect()
    }

    fn chain(ids: &[&str]) -> Vec<Connection> {
        ids.windows(2)
            .map(|pair| Connection::new(pair[0], "output", pair[1], "input"))
            .collect()
    }

    #[test]
    fn test_accepts_edge_on_empty_graph() {
        let nodes = nodes(&["a", "b"]);
        let request = ConnectionRequest::new("a", "image-output", "b", "image-input");
        assert_eq!(validate_connection(&request, &nodes, &[]), Ok(()));
    }

    #[test]
    fn test_rejects_self_loop() {
        let nodes = nodes(&["a"]);
        let request = ConnectionRequest::new("a", "text-output", "a", "text-input");
        assert_eq!(validate_connection(&request, &nodes, &[]), Err(RejectReason::SelfLoop));
        assert_eq!(RejectReason::SelfLoop.code(), "INVALID_SELF_LOOP");
    }

    #[test]
    fn test_self_loop_checked_before_cycle() {
        // a -> b -> a already cyclic; the self-loop still wins
        let nodes = nodes(&["a", "b"]);
        let mut edges = chain(&["a", "b"]);
        edges.push(Connection::new("b", "output", "a", "input"));
        let request = ConnectionRequest::between("b", "b");
        assert_eq!(validate_connection(&request, &nodes, &edges), Err(RejectReason::SelfLoop));
    }

    #[test]
    fn test_rejects_closing_edge() {
        let nodes = nodes(&["a", "b", "c", "d"]);
        let edges = chain(&["a", "b", "c", "d"]);
        let request = ConnectionRequest::between("d", "a");
        assert_eq!(validate_connection(&request, &nodes, &edges), Err(RejectReason::Cycle));
        assert_eq!(RejectReason::Cycle.code(), "INVALID_CYCLE");
    }

    #[test]
    fn test_accepts_diamond_and_shortcut() {
        // a -> b -> d, a -> c -> d, plus a -> d keeps the graph acyclic
        let nodes = nodes(&["a", "b", "c", "d"]);
        let mut edges = chain(&["a", "b", "d"]);
        edges.extend(chain(&["a", "c", "d"]));
        assert!(is_valid_connection(&ConnectionRequest::between("a", "d"), &nodes, &edges));
        assert!(is_valid_connection(&ConnectionRequest::between("b", "c"), &nodes, &edges));
        assert!(!is_valid_connection(&ConnectionRequest::between("d", "b"), &nodes, &edges));
    }

    #[test]
    fn test_disconnected_components() {
        let nodes = nodes(&["a", "b", "x", "y"]);
        let mut edges = chain(&["a", "b"]);
        edges.extend(chain(&["x", "y"]));
        assert!(is_valid_connection(&ConnectionRequest::between("b", "x"), &nodes, &edges));
        assert!(is_valid_connection(&ConnectionRequest::between("y", "a"), &nodes, &edges));
    }

    #[test]
    fn test_unknown_nodes_still_checked() {
        // Edges can reference nodes that are not in the node list
        let edges = chain(&["p", "q"]);
        assert!(would_create_cycle(&NodeId::new("q"), &NodeId::new("p"), &[], &edges));
        assert!(!would_create_cycle(&NodeId::new("p"), &NodeId::new("r"), &[], &edges));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let ids: Vec<String> = (0..50_000).map(|i| format!("n{i}")).collect();
        let edges: Vec<Connection> = ids
            .windows(2)
            .map(|pair| Connection::new(pair[0].as_str(), "output", pair[1].as_str(), "input"))
            .collect();
        let first = NodeId::new("n0");
        let last = NodeId::new("n49999");
        assert!(would_create_cycle(&last, &first, &[], &edges));
        assert!(!would_create_cycle(&first, &last, &[], &edges));
    }

    #[test]
    fn test_type_mismatch() {
        let nodes = nodes(&["a", "b"]);
        let request = ConnectionRequest::new("a", "image-output", "b", "video-input");
        let err = validate_connection(&request, &nodes, &[]).unwrap_err();
        assert_eq!(
            err,
            RejectReason::TypeMismatch { from: PortType::Image, to: PortType::Video }
        );
        assert_eq!(err.code(), "TYPE_MISMATCH");
        assert_eq!(err.to_string(), "Type mismatch: cannot connect image to video");
    }

    #[test]
    fn test_text_and_any_pass_through() {
        let nodes = nodes(&["a", "b"]);
        for (from, to) in [
            ("text-output", "image-input"),
            ("video-output", "prompt-text-input"),
            ("output", "video-input"),
            ("image-output", "input"),
        ] {
            let request = ConnectionRequest::new("a", from, "b", to);
            assert!(is_valid_connection(&request, &nodes, &[]), "{from} -> {to}");
        }
    }

    #[test]
    fn test_missing_handles_skip_type_check() {
        assert_eq!(check_handle_types(Some(&PortId::new("image")), None), Ok(()));
        assert_eq!(check_handle_types(None, Some(&PortId::new("video"))), Ok(()));
    }

    #[test]
    fn test_unknown_endpoint_skips_type_check() {
        let request = ConnectionRequest::new("a", "image-output", "ghost", "video-input");
        assert_eq!(validate_connection(&request, &nodes(&["a"]), &[]), Ok(()));
        assert_eq!(
            validate_connection(&request, &nodes(&["a", "ghost"]), &[]),
            Err(RejectReason::TypeMismatch { from: PortType::Image, to: PortType::Video })
        );

        // Cycle detection still sees the unknown node
        let edges = chain(&["ghost", "a"]);
        assert_eq!(validate_connection(&request, &nodes(&["a"]), &edges), Err(RejectReason::Cycle));
    }

    #[test]
    fn test_cycle_checked_before_types() {
        let nodes = nodes(&["a", "b"]);
        let edges = chain(&["a", "b"]);
        let request = ConnectionRequest::new("b", "image-output", "a", "video-input");
        assert_eq!(validate_connection(&request, &nodes, &edges), Err(RejectReason::Cycle));
    }
}
