//! Error taxonomy for graph and traversal operations

use crate::graph::NodeId;
use thiserror::Error;

/// Errors that can occur while reading the graph or running a traversal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A start node or neighbor reference is absent from the graph
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// Node ids are positive; zero was used as a node or neighbor
    #[error("Invalid node id: {0}")]
    InvalidNode(NodeId),

    /// `extract_min` was called on an empty priority queue
    #[error("Priority queue is empty")]
    EmptyQueue,
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
