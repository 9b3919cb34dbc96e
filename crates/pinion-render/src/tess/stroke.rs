//! Outline tessellation.
//!
//! Strokes straddle the ideal boundary: half the thickness falls inside,
//! half outside, matching how the fills' recorded outlines sit on the
//! shape edge.

use std::f32::consts::TAU;

use crate::batch::Emitter;
use crate::coords::{ColorRgba, Rect, Vec2};
use crate::path::{PathScratch, averaged_normals};

use super::{quad, ring, tri};

/// Strokes a line segment as one thickness-wide quad.
///
/// Expects distinct endpoints and a positive thickness.
pub fn line(out: &mut Emitter, color: ColorRgba, a: Vec2, b: Vec2, thickness: f32) {
    let d = b - a;
    let offset = d.perp_left() * (thickness * 0.5 / d.length());
    let (a0, a1) = (a - offset, a + offset);
    let (b0, b1) = (b - offset, b + offset);
    tri(out, color, a0, a1, b1);
    tri(out, color, a0, b1, b0);
}

/// Strokes a rectangle with four edge-straddling quads.
///
/// Expects a normalized rect and a positive thickness. The corner squares
/// where horizontal and vertical strips meet are covered twice, which is
/// invisible for opaque colors and acceptable for translucent ones.
pub fn rect(out: &mut Emitter, color: ColorRgba, rect: Rect, thickness: f32) {
    let (x, y) = (rect.origin.x, rect.origin.y);
    let (w, h) = (rect.size.x, rect.size.y);
    let half = thickness * 0.5;
    quad(out, color, x, y - half, w, thickness);
    quad(out, color, x, y + h - half, w, thickness);
    quad(out, color, x - half, y, thickness, h);
    quad(out, color, x + w - half, y, thickness, h);
}

/// Strokes a circle as a ring of quads between `radius - thickness / 2`
/// (floored at zero) and `radius + thickness / 2`.
///
/// Expects a positive thickness. `segments` is clamped to at least 3.
pub fn circle(
    out: &mut Emitter,
    color: ColorRgba,
    center: Vec2,
    radius: f32,
    thickness: f32,
    segments: u32,
) {
    let n = segments.max(3) as usize;
    let inner = (radius - thickness * 0.5).max(0.0);
    let outer = radius + thickness * 0.5;

    let mut i0 = center + Vec2::new(inner, 0.0);
    let mut o0 = center + Vec2::new(outer, 0.0);
    for i in 1..=n {
        let t = TAU * i as f32 / n as f32;
        let dir = Vec2::new(t.cos(), t.sin());
        let i1 = center + dir * inner;
        let o1 = center + dir * outer;
        tri(out, color, i0, o0, o1);
        tri(out, color, i0, o1, i1);
        i0 = i1;
        o0 = o1;
    }
}

/// Strokes a rounded rectangle: quarter-arc rings at the corners joined by
/// four edge-straddling quads.
///
/// Expects a normalized rect, a positive radius and a positive thickness;
/// the radius is clamped to half the shorter side. `segments` is clamped
/// to at least 3.
pub fn rounded_rect(
    out: &mut Emitter,
    color: ColorRgba,
    rect: Rect,
    radius: f32,
    thickness: f32,
    segments: u32,
) {
    let (x, y) = (rect.origin.x, rect.origin.y);
    let (w, h) = (rect.size.x, rect.size.y);
    let rad = radius.min(w.min(h) * 0.5);
    let half = thickness * 0.5;
    let inner = (rad - half).max(0.0);
    let outer = rad + half;
    let seg = segments.max(3) as usize;

    let corners = [
        (Vec2::new(x + rad, y + rad), 180.0f32),
        (Vec2::new(x + w - rad, y + rad), 270.0),
        (Vec2::new(x + w - rad, y + h - rad), 0.0),
        (Vec2::new(x + rad, y + h - rad), 90.0),
    ];
    for (center, start_deg) in corners {
        let start = start_deg.to_radians();
        let step = 90.0f32.to_radians() / seg as f32;
        let dir = Vec2::new(start.cos(), start.sin());
        let mut i0 = center + dir * inner;
        let mut o0 = center + dir * outer;
        for i in 1..=seg {
            let t = start + step * i as f32;
            let dir = Vec2::new(t.cos(), t.sin());
            let i1 = center + dir * inner;
            let o1 = center + dir * outer;
            tri(out, color, i0, o0, o1);
            tri(out, color, i0, o1, i1);
            i0 = i1;
            o0 = o1;
        }
    }

    quad(out, color, x + rad, y - half, w - 2.0 * rad, thickness);
    quad(out, color, x + rad, y + h - half, w - 2.0 * rad, thickness);
    quad(out, color, x - half, y + rad, thickness, h - 2.0 * rad);
    quad(out, color, x + w - half, y + rad, thickness, h - 2.0 * rad);
}

/// Strokes a closed polygon as a ring straddling the path, offset along
/// per-vertex averaged normals.
///
/// Expects at least 3 points and a positive thickness. `scratch` holds the
/// computed normals between calls.
pub fn polygon(
    out: &mut Emitter,
    color: ColorRgba,
    points: &[Vec2],
    thickness: f32,
    scratch: &mut PathScratch,
) {
    let half = thickness * 0.5;
    let normals = averaged_normals(points, scratch);
    ring::offset_ring(out, color, points, normals, -half, half);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitter() -> Emitter {
        let mut out = Emitter::new(4096);
        out.begin_frame();
        out
    }

    fn positions(out: &Emitter) -> Vec<Vec2> {
        out.vertices()
            .iter()
            .map(|v| Vec2::new(v.pos[0], v.pos[1]))
            .collect()
    }

    // ── line ──────────────────────────────────────────────────────────────

    #[test]
    fn horizontal_line_becomes_an_axis_aligned_quad() {
        let mut out = emitter();
        line(
            &mut out,
            ColorRgba::white(),
            Vec2::new(0.0, 5.0),
            Vec2::new(10.0, 5.0),
            4.0,
        );

        assert_eq!(out.vertex_count(), 6);
        for p in positions(&out) {
            assert!(p.x == 0.0 || p.x == 10.0);
            assert!(p.y == 3.0 || p.y == 7.0);
        }
    }

    #[test]
    fn line_quad_width_matches_thickness() {
        let mut out = emitter();
        let (a, b) = (Vec2::new(1.0, 2.0), Vec2::new(7.0, 9.0));
        line(&mut out, ColorRgba::white(), a, b, 3.0);

        let pos = positions(&out);
        // First triangle is (a - off, a + off, b + off).
        let across = pos[1] - pos[0];
        assert!((across.length() - 3.0).abs() < 1e-4);
        assert!(across.dot(b - a).abs() < 1e-3);
    }

    // ── rect ──────────────────────────────────────────────────────────────

    #[test]
    fn rect_outline_is_four_quads_straddling_the_edges() {
        let mut out = emitter();
        rect(
            &mut out,
            ColorRgba::white(),
            Rect::new(10.0, 10.0, 20.0, 20.0),
            2.0,
        );

        assert_eq!(out.vertex_count(), 24);
        let pos = positions(&out);
        // Top strip spans one half-thickness above and below y = 10.
        assert_eq!(pos[0], Vec2::new(10.0, 9.0));
        assert_eq!(pos[2], Vec2::new(30.0, 11.0));
    }

    // ── circle ────────────────────────────────────────────────────────────

    #[test]
    fn circle_ring_sits_between_inner_and_outer_radius() {
        let mut out = emitter();
        let center = Vec2::new(4.0, -2.0);
        circle(&mut out, ColorRgba::white(), center, 10.0, 2.0, 12);

        assert_eq!(out.vertex_count(), 12 * 6);
        for p in positions(&out) {
            let r = (p - center).length();
            assert!(r >= 9.0 - 1e-4 && r <= 11.0 + 1e-4);
        }
    }

    #[test]
    fn thick_circle_ring_floors_the_inner_radius_at_zero() {
        let mut out = emitter();
        circle(&mut out, ColorRgba::white(), Vec2::zero(), 1.0, 10.0, 8);

        let min_r = positions(&out)
            .iter()
            .map(|p| p.length())
            .fold(f32::INFINITY, f32::min);
        assert_eq!(min_r, 0.0);
    }

    // ── rounded rect ──────────────────────────────────────────────────────

    #[test]
    fn rounded_rect_outline_stays_in_the_thickness_band() {
        let mut out = emitter();
        rounded_rect(
            &mut out,
            ColorRgba::white(),
            Rect::new(0.0, 0.0, 60.0, 40.0),
            8.0,
            2.0,
            6,
        );

        assert_eq!(out.vertex_count(), 4 * 6 * 6 + 4 * 6);
        for p in positions(&out) {
            assert!(p.x >= -1.0 - 1e-4 && p.x <= 61.0 + 1e-4);
            assert!(p.y >= -1.0 - 1e-4 && p.y <= 41.0 + 1e-4);
        }
    }

    #[test]
    fn rounded_rect_outline_radius_clamps_to_half_shorter_side() {
        let mut out = emitter();
        rounded_rect(
            &mut out,
            ColorRgba::white(),
            Rect::new(0.0, 0.0, 100.0, 20.0),
            500.0,
            2.0,
            4,
        );

        // Clamped radius is 10, so the ring hugs the rect's thickness band.
        for p in positions(&out) {
            assert!(p.x >= -1.0 - 1e-4 && p.x <= 101.0 + 1e-4);
            assert!(p.y >= -1.0 - 1e-4 && p.y <= 21.0 + 1e-4);
        }
    }

    // ── polygon ───────────────────────────────────────────────────────────

    #[test]
    fn polygon_ring_straddles_the_path() {
        let mut out = emitter();
        let mut scratch = PathScratch::new();
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        polygon(&mut out, ColorRgba::white(), &square, 2.0, &mut scratch);

        assert_eq!(out.vertex_count(), 24);
        // Corner rim vertices land one unit along the outward diagonal.
        let d = std::f32::consts::FRAC_1_SQRT_2;
        let outer = positions(&out)[0];
        assert!((outer.x + d).abs() < 1e-4);
        assert!((outer.y + d).abs() < 1e-4);
    }
}
