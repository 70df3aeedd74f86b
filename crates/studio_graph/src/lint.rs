// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pre-run checks that a workflow is complete enough to execute.

use crate::graph::Graph;
use crate::node::{NodeId, NodeKind};
use crate::port::PortId;
use std::collections::HashSet;

/// Problem that keeps a workflow from running
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowIssue {
    /// No node collects results
    #[error("Workflow must have at least one Output node")]
    MissingOutput,

    /// A non-optional input has nothing connected
    #[error("Node \"{label}\" is missing required input \"{port}\"")]
    MissingRequiredInput {
        /// Node missing the input
        node: NodeId,
        /// Node label
        label: String,
        /// Unconnected port
        port: PortId,
    },

    /// Node takes no part in the workflow
    #[error("Node \"{label}\" is not connected to the workflow")]
    Disconnected {
        /// Isolated node
        node: NodeId,
        /// Node label
        label: String,
    },
}

/// Collect every issue in the graph; an empty list means the workflow can run.
pub fn lint(graph: &Graph) -> Vec<WorkflowIssue> {
    let mut issues = Vec::new();

    if !graph.nodes().any(|n| n.kind == NodeKind::Output) {
        issues.push(WorkflowIssue::MissingOutput);
    }

    for node in graph.nodes() {
        for input in node.inputs.iter().filter(|p| !p.optional) {
            let connected = graph.connections().any(|c| c.targets_port(&node.id, &input.id));
            if !connected {
                issues.push(WorkflowIssue::MissingRequiredInput {
                    node: node.id.clone(),
                    label: node.label.clone(),
                    port: input.id.clone(),
                });
            }
        }
    }

    let connected: HashSet<&NodeId> = graph
        .connections()
        .flat_map(|c| [&c.source, &c.target])
        .collect();
    for node in graph.nodes() {
        if node.kind != NodeKind::Output && !connected.contains(&node.id) {
            issues.push(WorkflowIssue::Disconnected {
                node: node.id.clone(),
                label: node.label.clone(),
            });
        }
    }

    issues
}
