//! Closed-path scratch storage and per-vertex normals.
//!
//! Boundary paths are short-lived: shape generators rebuild them every call
//! into reusable buffers that grow but never shrink, so steady-state frames
//! allocate nothing. Paths are closed implicitly (last point connects back to
//! the first) and wind clockwise in screen space.

mod normals;
mod scratch;

pub use normals::averaged_normals;
pub use scratch::PathScratch;
