// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;
use studio_graph::{lint, ExecutionPlan};

/// Print execution order, cyclic nodes and lint issues.
pub fn run(workflow: &Path) -> Result<ExitCode> {
    let document = super::load_workflow(workflow)?;
    let graph = document.to_graph();
    let plan = ExecutionPlan::build(&graph);

    println!("{} ({} nodes, {} connections)\n", document.title, graph.node_count(), graph.connection_count());
    println!("Execution order:");
    for (step, node_id) in plan.order.iter().enumerate() {
        let label = graph.node(node_id).map_or("?", |node| node.label.as_str());
        println!("  {:>3}. {label} [{node_id}]", step + 1);
    }

    if !plan.cyclic.is_empty() {
        println!("\nCyclic nodes:");
        for node_id in &plan.cyclic {
            println!("  - {node_id}");
        }
    }

    let issues = lint(&graph);
    if !issues.is_empty() {
        println!("\nIssues ({}):", issues.len());
        for issue in &issues {
            println!("  - {issue}");
        }
    }

    Ok(ExitCode::SUCCESS)
}
