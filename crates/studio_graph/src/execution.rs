// SPDX-License-Identifier: MIT OR Apache-2.0
//! Execution planning for workflow graphs.

use crate::graph::Graph;
use crate::node::NodeId;
use indexmap::IndexMap;
use std::collections::VecDeque;

/// Order in which a workflow's nodes run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionPlan {
    /// Nodes in topological order; ties keep graph insertion order
    pub order: Vec<NodeId>,
    /// Nodes that sit on or behind a cycle and can never be scheduled
    pub cyclic: Vec<NodeId>,
}

impl ExecutionPlan {
    /// Build a plan with Kahn's algorithm.
    ///
    /// Connections are validated on insertion, but documents can be edited
    /// outside the editor, so a loaded graph may still contain a cycle; those
    /// nodes end up in [`ExecutionPlan::cyclic`] instead of failing the plan.
    pub fn build(graph: &Graph) -> Self {
        let mut in_degree: IndexMap<&NodeId, usize> =
            graph.node_ids().map(|id| (id, 0)).collect();
        let mut downstream: IndexMap<&NodeId, Vec<&NodeId>> = IndexMap::new();

        for connection in graph.connections() {
            // Dangling edges cannot be scheduled against
            if !in_degree.contains_key(&connection.source) || !in_degree.contains_key(&connection.target) {
                continue;
            }
            downstream.entry(&connection.source).or_default().push(&connection.target);
            if let Some(degree) = in_degree.get_mut(&connection.target) {
                *degree += 1;
            }
        }

        let mut queue: VecDeque<&NodeId> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(id, _)| *id)
            .collect();
        let mut order = Vec::with_capacity(in_degree.len());

        while let Some(current) = queue.pop_front() {
            order.push(current.clone());
            for next in downstream.get(current).into_iter().flatten() {
                if let Some(degree) = in_degree.get_mut(*next) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(*next);
                    }
                }
            }
        }

        let cyclic: Vec<NodeId> = in_degree
            .into_iter()
            .filter(|(_, degree)| *degree > 0)
            .map(|(id, _)| id.clone())
            .collect();

        if !cyclic.is_empty() {
            tracing::warn!(count = cyclic.len(), "Workflow contains a cycle; some nodes cannot run");
        }

        Self { order, cyclic }
    }

    /// Whether every node could be scheduled
    pub fn is_complete(&self) -> bool {
        self.cyclic.is_empty()
    }

    /// Position of a node in the run order
    pub fn position(&self, node_id: &NodeId) -> Option<usize> {
        self.order.iter().position(|id| id == node_id)
    }
}
