//! Pinion rendering crate.
//!
//! Immediate-mode 2D shape rendering on wgpu: shapes tessellate on the CPU
//! into a flat triangle stream with feathered anti-aliasing, then stream
//! through a double-buffered vertex buffer each frame. The crate also owns
//! the platform runtime pieces (window loop, GPU device, frame timing) a
//! host application needs to drive it.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod path;
pub mod batch;
pub mod tess;
pub mod render;
