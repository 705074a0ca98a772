//! Depth-first visitation order

use super::types::VisitationOrder;
use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, NodeId};
use std::collections::HashSet;
use tracing::debug;

/// Visit every node reachable from `start` in depth-first pre-order.
///
/// Produces the same order as the recursive walk that descends into each
/// unvisited neighbor in adjacency order, but keeps its own stack so deep
/// graphs cannot exhaust the call stack. Neighbors are pushed in reverse
/// so the first neighbor is popped first.
pub fn dfs(graph: &Graph, start: NodeId) -> GraphResult<VisitationOrder> {
    if !graph.contains(start) {
        return Err(GraphError::UnknownNode(start));
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<NodeId> = vec![start];
    let mut order = VisitationOrder::new();

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);

        stack.extend(
            graph
                .neighbors(node)?
                .iter()
                .rev()
                .filter(|neighbor| !visited.contains(*neighbor)),
        );
    }

    debug!(%start, visited = order.len(), "dfs complete");
    Ok(order)
}
