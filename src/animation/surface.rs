//! Render surfaces: where highlight effects land

use crate::graph::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use tokio::time::Instant;

/// A fill colour, in whatever notation the surface understands
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The rendering collaborator's colouring capability.
///
/// Layout and drawing belong to the surface; the scheduler only ever asks
/// it to fill one node with one colour. Calls arrive from timer tasks, so
/// implementations must be shareable across them.
pub trait RenderSurface: Send + Sync {
    fn set_color(&self, node: NodeId, color: &Color);
}

/// One recorded `set_color` call
#[derive(Debug, Clone, PartialEq)]
pub struct PaintEvent {
    pub node: NodeId,
    pub color: Color,
    pub at: Instant,
}

#[derive(Debug, Default)]
struct MemoryState {
    colors: BTreeMap<NodeId, Color>,
    events: Vec<PaintEvent>,
}

/// In-memory surface that keeps the current colour of each node and a log
/// of every paint, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<MemoryState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current colour of `node`, if it was ever painted
    pub fn color_of(&self, node: NodeId) -> Option<Color> {
        self.with_state(|state| state.colors.get(&node).cloned())
    }

    /// Snapshot of the paint log
    pub fn events(&self) -> Vec<PaintEvent> {
        self.with_state(|state| state.events.clone())
    }

    /// Nodes painted with `color`, in paint order
    pub fn painted_with(&self, color: &Color) -> Vec<NodeId> {
        self.with_state(|state| {
            state
                .events
                .iter()
                .filter(|event| &event.color == color)
                .map(|event| event.node)
                .collect()
        })
    }

    pub fn clear_log(&self) {
        self.with_state(|state| state.events.clear());
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut MemoryState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

impl RenderSurface for MemorySurface {
    fn set_color(&self, node: NodeId, color: &Color) {
        let at = Instant::now();
        self.with_state(|state| {
            state.colors.insert(node, color.clone());
            state.events.push(PaintEvent {
                node,
                color: color.clone(),
                at,
            });
        });
    }
}

/// Surface that writes each paint to stdout as `+<ms>ms node <id> -> <colour>`.
#[derive(Debug)]
pub struct ConsoleSurface {
    epoch: Instant,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for ConsoleSurface {
    fn set_color(&self, node: NodeId, color: &Color) {
        let elapsed = self.epoch.elapsed().as_millis();
        let mut out = std::io::stdout().lock();
        // A closed stdout only loses the trace line.
        let _ = writeln!(out, "+{}ms node {} -> {}", elapsed, node, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_surface_tracks_latest_color() {
        let surface = MemorySurface::new();
        let node = NodeId::new(3);
        let green = Color::new("green");
        let blue = Color::new("skyblue");

        assert_eq!(surface.color_of(node), None);
        surface.set_color(node, &green);
        surface.set_color(node, &blue);

        assert_eq!(surface.color_of(node), Some(blue.clone()));
        assert_eq!(surface.events().len(), 2);
        assert_eq!(surface.painted_with(&green), vec![node]);
    }

    #[test]
    fn memory_surface_clear_log_keeps_colors() {
        let surface = MemorySurface::new();
        let green = Color::new("green");
        surface.set_color(NodeId::new(1), &green);
        surface.clear_log();

        assert!(surface.events().is_empty());
        assert_eq!(surface.color_of(NodeId::new(1)), Some(green));
    }

    #[test]
    fn color_deserializes_from_plain_string() {
        let color: Color = serde_json::from_str("\"orange\"").unwrap();
        assert_eq!(color.as_str(), "orange");
        assert_eq!(color.to_string(), "orange");
    }
}
