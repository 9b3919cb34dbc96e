//! GPU rendering subsystem.
//!
//! The shape renderer consumes the `batch` vertex stream and issues GPU
//! commands via wgpu, owning its own resources (pipeline, uniform buffer,
//! vertex stream).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a projection uniform.

mod ctx;
mod pipeline;
mod renderer;
mod stream;

pub use ctx::{RenderCtx, RenderTarget};
pub use renderer::ShapeRenderer;
pub use stream::StreamBuffer;
