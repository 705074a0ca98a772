//! Unit-weight shortest distances

use super::queue::MinPriorityQueue;
use super::types::{Distance, DistanceTable};
use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, NodeId};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, trace};

/// Shortest hop count from `start` to every node in `graph`.
///
/// Every edge weighs 1. Relaxing a neighbor pushes a fresh queue entry
/// without removing the stale one; a node is finalized on its first
/// extraction and every later entry for it is discarded.
pub fn dijkstra(graph: &Graph, start: NodeId) -> GraphResult<DistanceTable> {
    if !graph.contains(start) {
        return Err(GraphError::UnknownNode(start));
    }

    let mut distances: BTreeMap<NodeId, Distance> = graph
        .node_ids()
        .map(|node| (node, Distance::Unreachable))
        .collect();
    distances.insert(start, Distance::Finite(0));

    let mut finalized: HashSet<NodeId> = HashSet::new();
    let mut queue: MinPriorityQueue<NodeId, Distance> = MinPriorityQueue::new();
    queue.insert(start, Distance::Finite(0));

    while !queue.is_empty() {
        let (current, _) = queue.extract_min()?;
        if !finalized.insert(current) {
            trace!(node = %current, "stale queue entry skipped");
            continue;
        }

        let candidate = distances
            .get(&current)
            .copied()
            .unwrap_or(Distance::Unreachable)
            .step();

        for &neighbor in graph.neighbors(current)? {
            let recorded = distances
                .get_mut(&neighbor)
                .ok_or(GraphError::UnknownNode(neighbor))?;
            if candidate < *recorded {
                *recorded = candidate;
                queue.insert(neighbor, candidate);
            }
        }
    }

    let table = DistanceTable { start, distances };
    debug!(%start, reachable = table.reachable_count(), "dijkstra complete");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(raw: u32) -> NodeId {
        NodeId::new(raw)
    }

    fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_dijkstra_sample_graph() {
        let graph = Graph::sample().unwrap();
        let table = dijkstra(&graph, n(1)).unwrap();

        let expected = [
            (1, 0),
            (2, 1),
            (3, 1),
            (4, 2),
            (5, 2),
            (6, 3),
            (7, 4),
            (8, 5),
            (9, 6),
            (10, 7),
        ];
        for (node, hops) in expected {
            assert_eq!(table.get(n(node)), Distance::Finite(hops), "node {}", node);
        }
        assert_eq!(table.reachable_count(), 10);
        assert_eq!(table.visitation_order(), ids(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
    }

    #[test]
    fn test_dijkstra_isolated_start() {
        let graph = Graph::from_adjacency([
            (n(1), ids(&[])),
            (n(2), ids(&[1])),
            (n(3), ids(&[2])),
        ])
        .unwrap();
        let table = dijkstra(&graph, n(1)).unwrap();

        assert_eq!(table.get(n(1)), Distance::Finite(0));
        assert_eq!(table.get(n(2)), Distance::Unreachable);
        assert_eq!(table.get(n(3)), Distance::Unreachable);
        assert_eq!(table.visitation_order(), ids(&[1, 2, 3]));
    }

    #[test]
    fn test_dijkstra_prefers_shorter_later_edge() {
        // 1 -> 2 -> 3 -> 4 and a direct chord 1 -> 4 listed last
        let graph = Graph::from_adjacency([
            (n(1), ids(&[2, 4])),
            (n(2), ids(&[3])),
            (n(3), ids(&[4])),
            (n(4), ids(&[])),
        ])
        .unwrap();
        let table = dijkstra(&graph, n(1)).unwrap();

        assert_eq!(table.get(n(4)), Distance::Finite(1));
        assert_eq!(table.get(n(3)), Distance::Finite(2));
    }

    #[test]
    fn test_dijkstra_directed_edges_only() {
        let graph = Graph::from_adjacency([(n(1), ids(&[])), (n(2), ids(&[1]))]).unwrap();
        let table = dijkstra(&graph, n(2)).unwrap();

        assert_eq!(table.get(n(1)), Distance::Finite(1));
        assert_eq!(table.start, n(2));
    }

    #[test]
    fn test_dijkstra_unknown_start() {
        let graph = Graph::sample().unwrap();
        assert_eq!(dijkstra(&graph, n(11)), Err(GraphError::UnknownNode(n(11))));
    }
}
