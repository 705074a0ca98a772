//! Graphwalk: graph traversal with timed visitation animation
//!
//! Computes breadth-first, depth-first and unit-weight shortest-path
//! visitation orders over a small directed graph, then replays each order
//! as a sequence of timed highlight effects on a render surface.
//!
//! # Core Concepts
//!
//! - **Graph**: a closed, read-only adjacency map shared by every consumer
//! - **Traversal**: pure functions from graph and start node to an order
//! - **Animation**: highlights scheduled up front, one per visited node,
//!   superseded wholesale when a newer run or a reset begins
//!
//! # Example
//!
//! ```
//! use graphwalk::{bfs, Graph, NodeId};
//!
//! let graph = Graph::sample().unwrap();
//! let order = bfs(&graph, NodeId::new(1)).unwrap();
//! assert_eq!(order.len(), 10);
//! ```

pub mod animation;
pub mod config;
mod error;
mod graph;
pub mod traversal;
mod visualizer;

pub use animation::{
    Animation, AnimationScheduler, Color, ConsoleSurface, MemorySurface, RenderSurface,
};
pub use config::{AnimationConfig, ConfigError};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, NodeId, ParseNodeIdError, SAMPLE_START};
pub use traversal::{
    bfs, dfs, dijkstra, Algorithm, Distance, DistanceTable, MinPriorityQueue, VisitationOrder,
};
pub use visualizer::Visualizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
