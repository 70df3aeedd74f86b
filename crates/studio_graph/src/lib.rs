// SPDX-License-Identifier: MIT OR Apache-2.0
//! Workflow node graph for the creative studio.
//!
//! This crate provides the graph model behind the studio's workflow editor:
//! - Typed input/output ports
//! - Connection validation (self-loops, cycles, data types)
//! - Execution planning and pre-run lint
//! - Downstream invalidation
//! - RON/JSON documents
//!
//! ## Architecture
//!
//! Everything operates on caller-owned snapshots. The editor keeps its own
//! node and edge lists and calls [`validate_connection`] before committing a
//! user-drawn edge; [`Graph`] bundles the same checks with declared port
//! metadata for headless use.

pub mod node;
pub mod port;
pub mod connection;
pub mod validation;
pub mod graph;
pub mod execution;
pub mod lint;
pub mod dirty;
pub mod document;

pub use node::{Node, NodeId, NodeKind, NodeRegistry, NodeTemplate, Position, Size};
pub use port::{Cardinality, Port, PortDirection, PortId, PortType};
pub use connection::{Connection, ConnectionId, ConnectionRequest};
pub use validation::{is_valid_connection, validate_connection, would_create_cycle, RejectReason};
pub use graph::{ConnectionError, Graph};
pub use execution::ExecutionPlan;
pub use lint::{lint, WorkflowIssue};
pub use dirty::downstream_of;
pub use document::{DocumentError, ViewState, WorkflowDocument, DOCUMENT_FORMAT_VERSION};
