//! Core graph data structures

mod adjacency;
mod edge;
mod node;
mod sample;

pub use adjacency::Graph;
pub use edge::Edge;
pub use node::{NodeId, ParseNodeIdError};
pub use sample::SAMPLE_START;
