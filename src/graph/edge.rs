//! Directed edge view used by renderers

use super::node::NodeId;
use serde::Serialize;

/// A directed edge `source -> target`. Every edge has unit weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}
