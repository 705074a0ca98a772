//! Read-only adjacency store

use super::edge::Edge;
use super::node::NodeId;
use crate::error::{GraphError, GraphResult};
use std::collections::BTreeMap;

/// A fixed directed graph: node id -> ordered neighbor list.
///
/// The graph is closed: every neighbor reference is itself a key. This is
/// checked once at construction, after which the graph is never mutated.
/// Neighbor order is preserved exactly as given and drives traversal
/// tie-breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    /// Build a graph from `(node, neighbors)` pairs.
    ///
    /// Fails with `InvalidNode` if any node or neighbor id is zero, and with
    /// `UnknownNode` if any neighbor is not declared as a node. A node listed
    /// twice keeps the last neighbor list given for it.
    pub fn from_adjacency<I, N>(entries: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (NodeId, N)>,
        N: IntoIterator<Item = NodeId>,
    {
        let adjacency: BTreeMap<NodeId, Vec<NodeId>> = entries
            .into_iter()
            .map(|(node, neighbors)| (node, neighbors.into_iter().collect()))
            .collect();

        if let Some(zero) = adjacency
            .iter()
            .flat_map(|(node, neighbors)| std::iter::once(node).chain(neighbors))
            .find(|id| !id.is_positive())
        {
            return Err(GraphError::InvalidNode(*zero));
        }

        if let Some(dangling) = adjacency
            .values()
            .flatten()
            .find(|neighbor| !adjacency.contains_key(*neighbor))
        {
            return Err(GraphError::UnknownNode(*dangling));
        }

        Ok(Self { adjacency })
    }

    /// Ordered out-neighbors of `node`
    pub fn neighbors(&self, node: NodeId) -> GraphResult<&[NodeId]> {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .ok_or(GraphError::UnknownNode(node))
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// All node ids in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// All edges, grouped by source in ascending id order, then in neighbor order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(source, targets)| {
            targets.iter().map(move |target| Edge::new(*source, *target))
        })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(raw: u32) -> NodeId {
        NodeId::new(raw)
    }

    #[test]
    fn test_neighbors_preserve_given_order() {
        let graph = Graph::from_adjacency([
            (n(1), vec![n(3), n(2)]),
            (n(2), vec![]),
            (n(3), vec![]),
        ])
        .unwrap();

        assert_eq!(graph.neighbors(n(1)).unwrap(), &[n(3), n(2)]);
        assert!(graph.neighbors(n(2)).unwrap().is_empty());
    }

    #[test]
    fn test_neighbors_unknown_node() {
        let graph = Graph::from_adjacency([(n(1), Vec::<NodeId>::new())]).unwrap();
        assert_eq!(graph.neighbors(n(9)), Err(GraphError::UnknownNode(n(9))));
    }

    #[test]
    fn test_dangling_neighbor_rejected() {
        let result = Graph::from_adjacency([(n(1), vec![n(2)])]);
        assert_eq!(result, Err(GraphError::UnknownNode(n(2))));
    }

    #[test]
    fn test_zero_id_rejected() {
        let as_node = Graph::from_adjacency([(n(0), Vec::<NodeId>::new())]);
        assert_eq!(as_node, Err(GraphError::InvalidNode(n(0))));

        let as_neighbor = Graph::from_adjacency([(n(1), vec![n(0)])]);
        assert_eq!(as_neighbor, Err(GraphError::InvalidNode(n(0))));
    }

    #[test]
    fn test_counts_and_edges() {
        let graph = Graph::from_adjacency([(n(2), vec![n(1)]), (n(1), vec![n(2), n(1)])]).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec![n(1), n(2)]);

        let edges: Vec<Edge> = graph.edges().collect();
        assert_eq!(
            edges,
            vec![
                Edge::new(n(1), n(2)),
                Edge::new(n(1), n(1)),
                Edge::new(n(2), n(1)),
            ]
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::default();
        assert!(graph.is_empty());
        assert!(!graph.contains(n(1)));
        assert_eq!(graph.edges().count(), 0);
    }
}
