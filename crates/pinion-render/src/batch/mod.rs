//! CPU-side vertex batching.
//!
//! This layer is GPU-free: shapes tessellate into an [`Emitter`] whose sealed
//! draw ranges the render layer later streams to the GPU. [`ShapeBatcher`] is
//! the immediate-mode entry point holding the per-frame render state (current
//! color, anti-alias settings, last filled outline).

mod batcher;
mod emitter;
mod vertex;

pub use batcher::ShapeBatcher;
pub use emitter::{Emitter, MIN_CAPACITY};
pub use vertex::Vertex;
