//! Animation generations
//!
//! Each started animation (and each reset) claims a new generation.
//! Scheduled callbacks remember the generation they were created under and
//! paint only while it is still the current one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A shared, monotonically increasing generation counter.
///
/// Clones share state. Advancing the counter supersedes every callback
/// scheduled under an earlier generation; callbacks that already painted
/// stay painted. `run_if_current` and `advance_then` hold the counter's
/// lock for the whole closure, so a superseded paint can never land after
/// the advance that superseded it.
#[derive(Debug, Clone)]
pub struct GenerationToken {
    current: Arc<Mutex<u64>>,
}

impl GenerationToken {
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(0)),
        }
    }

    /// The generation now in effect.
    pub fn current(&self) -> u64 {
        *self.lock()
    }

    /// Supersede the current generation and return the new one.
    pub fn advance(&self) -> u64 {
        self.advance_then(|_| ()).0
    }

    /// Supersede the current generation, then run `f` with the new one
    /// before any callback can observe it.
    pub fn advance_then<R>(&self, f: impl FnOnce(u64) -> R) -> (u64, R) {
        let mut current = self.lock();
        *current = current.wrapping_add(1);
        let generation = *current;
        (generation, f(generation))
    }

    /// True if `generation` has not been superseded.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current() == generation
    }

    /// Run `f` only if `generation` is still current, keeping it current
    /// until `f` returns. `None` if it was superseded.
    pub fn run_if_current<R>(&self, generation: u64, f: impl FnOnce() -> R) -> Option<R> {
        let current = self.lock();
        if *current == generation {
            Some(f())
        } else {
            None
        }
    }

    fn lock(&self) -> MutexGuard<'_, u64> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for GenerationToken {
    fn default() -> Self {
        Self::new()
    }
}
