// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;
use studio_graph::{validate_connection, ConnectionRequest, NodeId, PortId};

/// Exit code reported when the connection is rejected
const REJECTED: u8 = 2;

/// Run the connection validator against a saved workflow.
pub fn run(
    workflow: &Path,
    source: String,
    source_handle: Option<String>,
    target: String,
    target_handle: Option<String>,
) -> Result<ExitCode> {
    let document = super::load_workflow(workflow)?;
    let request = ConnectionRequest {
        source: NodeId::new(source),
        source_handle: source_handle.map(PortId::new),
        target: NodeId::new(target),
        target_handle: target_handle.map(PortId::new),
    };

    match validate_connection(&request, &document.nodes, &document.connections) {
        Ok(()) => {
            println!("accepted: {} -> {}", request.source, request.target);
            Ok(ExitCode::SUCCESS)
        }
        Err(reason) => {
            println!("{}: {reason}", reason.code());
            Ok(ExitCode::from(REJECTED))
        }
    }
}
