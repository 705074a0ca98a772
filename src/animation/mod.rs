//! Animation of visitation orders onto a render surface

mod generation;
mod scheduler;
mod surface;

pub use generation::GenerationToken;
pub use scheduler::{Animation, AnimationScheduler};
pub use surface::{Color, ConsoleSurface, MemorySurface, PaintEvent, RenderSurface};
