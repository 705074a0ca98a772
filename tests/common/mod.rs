//! Shared helpers for graphwalk integration tests
//!
//! Seeded random graph builders and a brute-force hop-count oracle used to
//! cross-check the traversal engine.

#![allow(dead_code)]

use graphwalk::{Graph, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, HashSet};

pub fn ids(raw: &[u32]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId::new).collect()
}

/// Random directed graph on nodes `1..=nodes` where each ordered pair is an
/// edge with probability `density`. Neighbor lists are shuffled so traversal
/// order does not simply follow ids.
pub fn random_graph(seed: u64, nodes: u32, density: f64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let adjacency: Vec<(NodeId, Vec<NodeId>)> = (1..=nodes)
        .map(|source| {
            let mut targets: Vec<NodeId> = (1..=nodes)
                .filter(|_| rng.gen_bool(density))
                .map(NodeId::new)
                .collect();
            // Fisher-Yates with the same seeded rng
            for i in (1..targets.len()).rev() {
                let j = rng.gen_range(0..=i);
                targets.swap(i, j);
            }
            (NodeId::new(source), targets)
        })
        .collect();
    Graph::from_adjacency(adjacency).expect("random graph is closed")
}

/// Shortest hop count to every reachable node, found by enumerating every
/// simple path from `start`. Exponential; small graphs only.
pub fn brute_force_hops(graph: &Graph, start: NodeId) -> BTreeMap<NodeId, u32> {
    let mut best = BTreeMap::new();
    let mut on_path = HashSet::new();
    walk(graph, start, 0, &mut on_path, &mut best);
    best
}

fn walk(
    graph: &Graph,
    node: NodeId,
    depth: u32,
    on_path: &mut HashSet<NodeId>,
    best: &mut BTreeMap<NodeId, u32>,
) {
    let entry = best.entry(node).or_insert(depth);
    if depth < *entry {
        *entry = depth;
    }
    on_path.insert(node);
    for &next in graph.neighbors(node).expect("closed graph") {
        if !on_path.contains(&next) {
            walk(graph, next, depth + 1, on_path, best);
        }
    }
    on_path.remove(&node);
}

/// Set of nodes reachable from `start`, including `start`
pub fn reachable(graph: &Graph, start: NodeId) -> HashSet<NodeId> {
    brute_force_hops(graph, start).into_keys().collect()
}
