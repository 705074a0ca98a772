//! Breadth-first visitation order

use super::types::VisitationOrder;
use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, NodeId};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Visit every node reachable from `start` in breadth-first order.
///
/// Neighbors are enqueued in their adjacency order. A node may sit in the
/// queue more than once before it is visited; the visited check on dequeue
/// keeps it out of the output a second time.
pub fn bfs(graph: &Graph, start: NodeId) -> GraphResult<VisitationOrder> {
    if !graph.contains(start) {
        return Err(GraphError::UnknownNode(start));
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);
    let mut order = VisitationOrder::new();

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);

        for &neighbor in graph.neighbors(node)? {
            if !visited.contains(&neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    debug!(%start, visited = order.len(), "bfs complete");
    Ok(order)
}
