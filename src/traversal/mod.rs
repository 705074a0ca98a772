//! Traversal engine
//!
//! Pure functions that compute a visitation order (or a distance table)
//! from a graph and a start node. Nothing here touches the render surface.

mod bfs;
mod dfs;
mod dijkstra;
mod queue;
mod types;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use queue::MinPriorityQueue;
pub use types::{Algorithm, Distance, DistanceTable, VisitationOrder};

use crate::error::GraphResult;
use crate::graph::{Graph, NodeId};

impl Algorithm {
    /// Visitation order this algorithm produces from `start`.
    ///
    /// For Dijkstra this is the reachable nodes sorted by distance.
    pub fn visit_order(self, graph: &Graph, start: NodeId) -> GraphResult<VisitationOrder> {
        match self {
            Algorithm::Bfs => bfs(graph, start),
            Algorithm::Dfs => dfs(graph, start),
            Algorithm::Dijkstra => dijkstra(graph, start).map(|table| table.visitation_order()),
        }
    }
}
