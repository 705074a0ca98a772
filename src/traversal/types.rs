//! Traversal result types

use crate::graph::NodeId;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Nodes in the order a traversal visited them. Each node appears once.
pub type VisitationOrder = Vec<NodeId>;

/// Hop count from the start node, or unreachable.
///
/// `Finite` sorts before `Unreachable`, so a plain sort puts reachable
/// nodes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance {
    Finite(u32),
    Unreachable,
}

impl Distance {
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn hops(self) -> Option<u32> {
        match self {
            Distance::Finite(hops) => Some(hops),
            Distance::Unreachable => None,
        }
    }

    /// Distance one edge further; unreachable stays unreachable
    pub fn step(self) -> Distance {
        match self {
            Distance::Finite(hops) => hops
                .checked_add(1)
                .map_or(Distance::Unreachable, Distance::Finite),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(hops) => write!(f, "{}", hops),
            Distance::Unreachable => write!(f, "inf"),
        }
    }
}

// Unreachable serializes as null.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.hops().serialize(serializer)
    }
}

/// Shortest hop count from a start node to every node in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceTable {
    pub start: NodeId,
    pub distances: BTreeMap<NodeId, Distance>,
}

impl DistanceTable {
    /// Distance to `node`; nodes absent from the table are unreachable
    pub fn get(&self, node: NodeId) -> Distance {
        self.distances
            .get(&node)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Every node in the table sorted by distance.
    ///
    /// Ties are broken by ascending node id, so unreachable nodes come last
    /// in id order.
    pub fn visitation_order(&self) -> VisitationOrder {
        let mut by_distance: Vec<(Distance, NodeId)> = self
            .distances
            .iter()
            .map(|(node, distance)| (*distance, *node))
            .collect();
        by_distance.sort();
        by_distance.into_iter().map(|(_, node)| node).collect()
    }
}

/// The traversal algorithms that can drive an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
