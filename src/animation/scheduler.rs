//! Timed highlight scheduling

use super::generation::GenerationToken;
use super::surface::{Color, RenderSurface};
use crate::config::AnimationConfig;
use crate::graph::NodeId;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace, warn};

/// Turns a visitation order into timed highlight effects on a surface.
///
/// `play` schedules every highlight up front: step `i` fires `i * delay`
/// after the call. Starting another animation, or resetting, supersedes
/// whatever is still pending so two runs never interleave on the surface.
/// The generation check and the paint happen under one lock, which holds
/// on multi-threaded runtimes too.
pub struct AnimationScheduler<S: RenderSurface + 'static> {
    surface: Arc<S>,
    delay: Duration,
    highlight: Color,
    default_color: Color,
    generation: GenerationToken,
}

/// Handle to the highlights scheduled by one `play` call
#[derive(Debug)]
pub struct Animation {
    generation: u64,
    steps: Vec<JoinHandle<()>>,
}

impl Animation {
    /// Generation the highlights were scheduled under
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of scheduled highlights
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Wait until every scheduled callback has fired (or no-opped).
    pub async fn finished(self) {
        for step in self.steps {
            if let Err(e) = step.await {
                warn!(error = %e, "highlight task failed");
            }
        }
    }
}

impl<S: RenderSurface + 'static> AnimationScheduler<S> {
    pub fn new(surface: Arc<S>, config: &AnimationConfig) -> Self {
        Self {
            surface,
            delay: config.step_delay(),
            highlight: config.highlight_color.clone(),
            default_color: config.default_color.clone(),
            generation: GenerationToken::new(),
        }
    }

    pub fn surface(&self) -> &Arc<S> {
        &self.surface
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn generation(&self) -> &GenerationToken {
        &self.generation
    }

    /// Schedule one highlight per node in `order`.
    ///
    /// Must be called from within a tokio runtime. Returns immediately; the
    /// highlights land later on the runtime's timer.
    pub fn play(&self, order: &[NodeId]) -> Animation {
        let generation = self.generation.advance();
        let origin = Instant::now();
        debug!(
            generation,
            steps = order.len(),
            delay_ms = self.delay.as_millis() as u64,
            "animation scheduled"
        );

        let steps = order
            .iter()
            .enumerate()
            .map(|(index, &node)| {
                let deadline = origin + step_offset(self.delay, index);
                let surface = Arc::clone(&self.surface);
                let token = self.generation.clone();
                let color = self.highlight.clone();

                tokio::spawn(async move {
                    sleep_until(deadline).await;
                    let painted = token.run_if_current(generation, || {
                        trace!(%node, %color, generation, "highlight");
                        surface.set_color(node, &color);
                    });
                    if painted.is_none() {
                        debug!(%node, generation, "superseded highlight skipped");
                    }
                })
            })
            .collect();

        Animation { generation, steps }
    }

    /// Supersede any pending highlights and paint `nodes` with the default colour.
    ///
    /// A highlight already in the middle of painting finishes first; the
    /// reset paints after it, so the default colour always wins.
    pub fn reset(&self, nodes: impl IntoIterator<Item = NodeId>) {
        let (generation, painted) = self.generation.advance_then(|_| {
            let mut painted = 0usize;
            for node in nodes {
                self.surface.set_color(node, &self.default_color);
                painted += 1;
            }
            painted
        });
        debug!(generation, painted, "surface reset");
    }
}

/// `delay * index`, saturating instead of overflowing
fn step_offset(delay: Duration, index: usize) -> Duration {
    delay.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}
