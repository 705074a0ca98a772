//! Visualizer: the entry point that ties graph, traversal and animation
//!
//! One graph is built once and shared, so the renderer and every traversal
//! read the same adjacency.

use crate::animation::{Animation, AnimationScheduler, RenderSurface};
use crate::config::AnimationConfig;
use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, NodeId};
use crate::traversal::{self, Algorithm, DistanceTable, VisitationOrder};
use std::sync::Arc;
use tracing::info;

/// Runs traversals over a shared graph and animates their results.
pub struct Visualizer<S: RenderSurface + 'static> {
    graph: Arc<Graph>,
    scheduler: AnimationScheduler<S>,
    start: NodeId,
}

impl<S: RenderSurface + 'static> Visualizer<S> {
    pub fn new(graph: Arc<Graph>, surface: Arc<S>, config: &AnimationConfig) -> Self {
        Self {
            graph,
            scheduler: AnimationScheduler::new(surface, config),
            start: config.start,
        }
    }

    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    pub fn scheduler(&self) -> &AnimationScheduler<S> {
        &self.scheduler
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Compute the order for `algorithm` and start animating it.
    ///
    /// Supersedes any animation still in flight.
    pub fn run(&self, algorithm: Algorithm) -> GraphResult<Animation> {
        let order = match algorithm {
            Algorithm::Dijkstra => self.distances()?.visitation_order(),
            other => other.visit_order(&self.graph, self.start)?,
        };
        info!(%algorithm, start = %self.start, order = ?order, "visitation order");
        Ok(self.scheduler.play(&order))
    }

    pub fn run_bfs(&self) -> GraphResult<Animation> {
        self.run(Algorithm::Bfs)
    }

    pub fn run_dfs(&self) -> GraphResult<Animation> {
        self.run(Algorithm::Dfs)
    }

    pub fn run_dijkstra(&self) -> GraphResult<Animation> {
        self.run(Algorithm::Dijkstra)
    }

    /// Order `algorithm` would animate, without scheduling anything
    pub fn order(&self, algorithm: Algorithm) -> GraphResult<VisitationOrder> {
        algorithm.visit_order(&self.graph, self.start)
    }

    /// Dijkstra distances from the configured start node
    pub fn distances(&self) -> GraphResult<DistanceTable> {
        let table = traversal::dijkstra(&self.graph, self.start)?;
        info!(start = %self.start, distances = ?table.distances, "dijkstra distances");
        Ok(table)
    }

    /// Cancel pending highlights and return every node to the default colour.
    pub fn reset(&self) {
        self.scheduler.reset(self.graph.node_ids());
    }

    /// Fail early if the configured start node is not in the graph
    pub fn validate(&self) -> GraphResult<()> {
        if self.graph.contains(self.start) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(self.start))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Color, MemorySurface};

    fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    fn visualizer(config: &AnimationConfig) -> Visualizer<MemorySurface> {
        let graph = Arc::new(Graph::sample().unwrap());
        Visualizer::new(graph, Arc::new(MemorySurface::new()), config)
    }

    #[tokio::test(start_paused = true)]
    async fn run_dfs_highlights_in_dfs_order() {
        let viz = visualizer(&AnimationConfig::default());
        viz.run_dfs().unwrap().finished().await;

        let surface = viz.scheduler().surface();
        assert_eq!(
            surface.painted_with(&Color::new("green")),
            ids(&[1, 2, 4, 5, 6, 7, 8, 9, 10, 3])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn run_dijkstra_highlights_by_distance() {
        let viz = visualizer(&AnimationConfig::default());
        viz.run_dijkstra().unwrap().finished().await;

        let surface = viz.scheduler().surface();
        assert_eq!(
            surface.painted_with(&Color::new("green")),
            ids(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_start_is_reported() {
        let config = AnimationConfig {
            start: NodeId::new(99),
            ..AnimationConfig::default()
        };
        let viz = visualizer(&config);

        assert_eq!(viz.validate(), Err(GraphError::UnknownNode(NodeId::new(99))));
        assert!(matches!(viz.run_bfs(), Err(GraphError::UnknownNode(_))));
        assert!(viz.scheduler().surface().events().is_empty());
    }

    #[test]
    fn order_does_not_animate() {
        let viz = visualizer(&AnimationConfig::default());
        let order = viz.order(Algorithm::Bfs).unwrap();
        assert_eq!(order, ids(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
        assert!(viz.scheduler().surface().events().is_empty());
    }
}
