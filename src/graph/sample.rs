//! The fixed demonstration graph

use super::adjacency::Graph;
use super::node::NodeId;
use crate::error::GraphResult;

/// Adjacency of the ten-node cycle with chords: 1 fans out to 2 and 3,
/// both branches rejoin at 5, and a chain 5..10 closes back to 1.
const SAMPLE_ADJACENCY: [(u32, &[u32]); 10] = [
    (1, &[2, 3]),
    (2, &[4]),
    (3, &[5]),
    (4, &[5]),
    (5, &[6]),
    (6, &[7]),
    (7, &[8]),
    (8, &[9]),
    (9, &[10]),
    (10, &[1]),
];

/// Node every built-in run starts from
pub const SAMPLE_START: NodeId = NodeId::new(1);

impl Graph {
    /// The fixed ten-node sample graph.
    pub fn sample() -> GraphResult<Self> {
        Graph::from_adjacency(SAMPLE_ADJACENCY.iter().map(|(node, neighbors)| {
            (NodeId::new(*node), neighbors.iter().copied().map(NodeId::new))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let graph = Graph::sample().unwrap();
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), 11);
        assert!(graph.contains(SAMPLE_START));
        assert_eq!(graph.neighbors(NodeId::new(10)).unwrap(), &[NodeId::new(1)]);
    }
}
