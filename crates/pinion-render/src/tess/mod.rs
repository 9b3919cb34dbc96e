//! Shape tessellation.
//!
//! Pure generators: triangle fans for fills, straddling quads for strokes,
//! normal-offset rings for borders and anti-aliasing. Every function writes
//! into an [`Emitter`](crate::batch::Emitter) and takes its inputs
//! explicitly; render state (color, feather, last outline) lives in
//! [`ShapeBatcher`](crate::batch::ShapeBatcher), which also owns the
//! degenerate-input policy. Generators document their preconditions instead
//! of re-checking them.

pub mod fill;
pub mod ring;
pub mod stroke;

use crate::batch::{Emitter, Vertex};
use crate::coords::{ColorRgba, Vec2};

/// Emits one solid triangle.
pub(crate) fn tri(out: &mut Emitter, color: ColorRgba, a: Vec2, b: Vec2, c: Vec2) {
    if !out.ensure_capacity(3) {
        return;
    }
    out.push(Vertex::new(a, color));
    out.push(Vertex::new(b, color));
    out.push(Vertex::new(c, color));
}

/// Emits an axis-aligned solid quad as two triangles.
pub(crate) fn quad(out: &mut Emitter, color: ColorRgba, x: f32, y: f32, w: f32, h: f32) {
    if !out.ensure_capacity(6) {
        return;
    }
    let tl = Vertex::new(Vec2::new(x, y), color);
    let tr = Vertex::new(Vec2::new(x + w, y), color);
    let br = Vertex::new(Vec2::new(x + w, y + h), color);
    let bl = Vertex::new(Vec2::new(x, y + h), color);
    out.push(tl);
    out.push(tr);
    out.push(br);
    out.push(tl);
    out.push(br);
    out.push(bl);
}
