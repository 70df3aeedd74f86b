// SPDX-License-Identifier: MIT OR Apache-2.0
//! Downstream invalidation after edits.

use crate::graph::Graph;
use crate::node::NodeId;
use indexmap::IndexSet;
use std::collections::VecDeque;

/// The edited node plus every node reachable from it, in breadth-first order.
///
/// Cached results of all returned nodes are stale once `node_id` changes.
pub fn downstream_of(graph: &Graph, node_id: &NodeId) -> IndexSet<NodeId> {
    let mut dirty = IndexSet::new();
    dirty.insert(node_id.clone());

    let mut queue = VecDeque::from([node_id.clone()]);
    while let Some(current) = queue.pop_front() {
        for connection in graph.connections_from(&current) {
            if dirty.insert(connection.target.clone()) {
                queue.push_back(connection.target.clone());
            }
        }
    }

    dirty
}
