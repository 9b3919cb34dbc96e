//! Solid interior tessellation.
//!
//! Each fill also records the closed boundary path of the shape it just
//! covered, wound clockwise in screen space, so the caller can feather it
//! or stroke a border along it afterwards.

use std::f32::consts::TAU;

use crate::batch::{Emitter, Vertex};
use crate::coords::{ColorRgba, Rect, Vec2};
use crate::path::PathScratch;

use super::{quad, tri};

/// Fills an axis-aligned rectangle and records its 4-corner outline.
///
/// Expects a normalized, non-empty rect.
pub fn rect(out: &mut Emitter, color: ColorRgba, rect: Rect, path: &mut PathScratch) {
    quad(
        out,
        color,
        rect.origin.x,
        rect.origin.y,
        rect.size.x,
        rect.size.y,
    );
    path.set_from(&rect.corners());
}

/// Fills a single triangle and records its 3-point outline.
///
/// Expects the corners in clockwise screen order.
pub fn triangle(out: &mut Emitter, color: ColorRgba, a: Vec2, b: Vec2, c: Vec2, path: &mut PathScratch) {
    tri(out, color, a, b, c);
    path.clear();
    path.push(a);
    path.push(b);
    path.push(c);
}

/// Fills a circle as a triangle fan around the center and records its
/// `segments`-point outline, starting at angle zero.
///
/// `segments` is clamped to at least 3. Returns `false` without emitting
/// anything, leaving `path` untouched, if the fan alone cannot fit in one
/// stream slot.
pub fn circle(
    out: &mut Emitter,
    color: ColorRgba,
    center: Vec2,
    radius: f32,
    segments: u32,
    path: &mut PathScratch,
) -> bool {
    let n = segments.max(3) as usize;
    if !out.ensure_capacity(3 * n) {
        return false;
    }

    let mut prev = center + Vec2::new(radius, 0.0);
    for i in 1..=n {
        let cur = center + arc_dir(TAU * i as f32 / n as f32) * radius;
        out.push(Vertex::new(center, color));
        out.push(Vertex::new(prev, color));
        out.push(Vertex::new(cur, color));
        prev = cur;
    }

    path.clear();
    for i in 0..n {
        path.push(center + arc_dir(TAU * i as f32 / n as f32) * radius);
    }
    true
}

/// Fills a convex polygon as a fan from its first point.
///
/// Expects at least 3 points, in clockwise screen order. Returns `false`
/// without emitting anything if the fan alone cannot fit in one stream
/// slot. Recording the outline is left to the caller, which already holds
/// the points.
pub fn convex_polygon(out: &mut Emitter, color: ColorRgba, points: &[Vec2]) -> bool {
    let n = points.len();
    debug_assert!(n >= 3, "convex fan needs at least 3 points");
    if !out.ensure_capacity(3 * (n - 2)) {
        return false;
    }
    for i in 2..n {
        tri(out, color, points[0], points[i - 1], points[i]);
    }
    true
}

/// Fills a rounded rectangle and records its outline: `segments` points per
/// quarter arc, clockwise from the top-left corner.
///
/// Expects a normalized, non-empty rect and a positive radius; the radius
/// is clamped to half the shorter side. `segments` is clamped to at
/// least 3.
pub fn rounded_rect(
    out: &mut Emitter,
    color: ColorRgba,
    rect: Rect,
    radius: f32,
    segments: u32,
    path: &mut PathScratch,
) {
    let (x, y) = (rect.origin.x, rect.origin.y);
    let (w, h) = (rect.size.x, rect.size.y);
    let rad = radius.min(w.min(h) * 0.5);
    let seg = segments.max(3) as usize;

    // Corner arc centers, clockwise from top-left, paired with the angle
    // (degrees) where each quarter arc starts.
    let corners = [
        (Vec2::new(x + rad, y + rad), 180.0),
        (Vec2::new(x + w - rad, y + rad), 270.0),
        (Vec2::new(x + w - rad, y + h - rad), 0.0),
        (Vec2::new(x + rad, y + h - rad), 90.0),
    ];

    // Center slab plus the four edge strips between the corners.
    quad(out, color, x + rad, y + rad, w - 2.0 * rad, h - 2.0 * rad);
    quad(out, color, x + rad, y, w - 2.0 * rad, rad);
    quad(out, color, x + rad, y + h - rad, w - 2.0 * rad, rad);
    quad(out, color, x, y + rad, rad, h - 2.0 * rad);
    quad(out, color, x + w - rad, y + rad, rad, h - 2.0 * rad);

    for (center, start_deg) in corners {
        corner_fan(out, color, center, rad, start_deg, seg);
    }

    path.clear();
    for (center, start_deg) in corners {
        for i in 0..seg {
            let t = (start_deg + 90.0 * i as f32 / seg as f32).to_radians();
            path.push(center + arc_dir(t) * rad);
        }
    }
}

/// Emits one quarter-circle fan.
fn corner_fan(out: &mut Emitter, color: ColorRgba, center: Vec2, radius: f32, start_deg: f32, seg: usize) {
    let start = start_deg.to_radians();
    let step = 90.0f32.to_radians() / seg as f32;
    let mut prev = center + arc_dir(start) * radius;
    for i in 1..=seg {
        let cur = center + arc_dir(start + step * i as f32) * radius;
        tri(out, color, center, prev, cur);
        prev = cur;
    }
}

#[inline]
fn arc_dir(t: f32) -> Vec2 {
    Vec2::new(t.cos(), t.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{Emitter, MIN_CAPACITY};

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

    // ── rect ──────────────────────────────────────────────────────────────

    #[test]
    fn rect_emits_two_triangles_and_corner_outline() {
        let mut out = emitter();
        let mut path = PathScratch::new();
        rect(
            &mut out,
            ColorRgba::white(),
            Rect::new(0.0, 0.0, 100.0, 50.0),
            &mut path,
        );

        assert_eq!(out.vertex_count(), 6);
        assert_eq!(
            path.points(),
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(100.0, 0.0),
                Vec2::new(100.0, 50.0),
                Vec2::new(0.0, 50.0),
            ]
        );
    }

    #[test]
    fn rect_triangles_cover_both_halves() {
        let mut out = emitter();
        let mut path = PathScratch::new();
        rect(
            &mut out,
            ColorRgba::white(),
            Rect::new(10.0, 20.0, 30.0, 40.0),
            &mut path,
        );

        let pos = positions(&out);
        assert_eq!(pos[0], Vec2::new(10.0, 20.0));
        assert_eq!(pos[1], Vec2::new(40.0, 20.0));
        assert_eq!(pos[2], Vec2::new(40.0, 60.0));
        assert_eq!(pos[3], Vec2::new(10.0, 20.0));
        assert_eq!(pos[4], Vec2::new(40.0, 60.0));
        assert_eq!(pos[5], Vec2::new(10.0, 60.0));
    }

    // ── circle ────────────────────────────────────────────────────────────

    #[test]
    fn circle_fan_count_and_radius_bound() {
        let mut out = emitter();
        let mut path = PathScratch::new();
        let center = Vec2::new(50.0, 50.0);
        assert!(circle(&mut out, ColorRgba::white(), center, 10.0, 4, &mut path));

        assert_eq!(out.vertex_count(), 12);
        for p in positions(&out) {
            assert!((p - center).length() <= 10.0 + 1e-4);
        }
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn circle_outline_points_sit_on_the_radius() {
        let mut out = emitter();
        let mut path = PathScratch::new();
        let center = Vec2::new(-3.0, 7.0);
        circle(&mut out, ColorRgba::white(), center, 5.0, 16, &mut path);

        assert_eq!(path.points()[0], center + Vec2::new(5.0, 0.0));
        for p in path.points() {
            assert!(((*p - center).length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn circle_segment_floor_is_three() {
        let mut out = emitter();
        let mut path = PathScratch::new();
        circle(&mut out, ColorRgba::white(), Vec2::zero(), 1.0, 1, &mut path);

        assert_eq!(out.vertex_count(), 9);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn oversize_circle_is_rejected_whole() {
        let mut out = Emitter::new(MIN_CAPACITY);
        out.begin_frame();
        let mut path = PathScratch::new();
        path.push(Vec2::zero());

        let ok = circle(&mut out, ColorRgba::white(), Vec2::zero(), 1.0, 64, &mut path);

        assert!(!ok);
        assert_eq!(out.vertex_count(), 0);
        assert_eq!(path.len(), 1, "failed fill must not disturb the outline");
    }

    // ── polygon ───────────────────────────────────────────────────────────

    #[test]
    fn convex_fan_emits_n_minus_two_triangles() {
        let mut out = emitter();
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(12.0, 8.0),
            Vec2::new(5.0, 12.0),
            Vec2::new(-2.0, 8.0),
        ];
        assert!(convex_polygon(&mut out, ColorRgba::white(), &points));
        assert_eq!(out.vertex_count(), 3 * (points.len() - 2));

        let pos = positions(&out);
        assert_eq!(pos[0], points[0]);
        assert_eq!(pos[1], points[1]);
        assert_eq!(pos[2], points[2]);
        assert_eq!(pos[3], points[0]);
    }

    // ── rounded rect ──────────────────────────────────────────────────────

    #[test]
    fn rounded_rect_outline_has_segments_points_per_corner() {
        let mut out = emitter();
        let mut path = PathScratch::new();
        rounded_rect(
            &mut out,
            ColorRgba::white(),
            Rect::new(0.0, 0.0, 100.0, 60.0),
            10.0,
            5,
            &mut path,
        );

        assert_eq!(path.len(), 20);

        let centers = [
            Vec2::new(10.0, 10.0),
            Vec2::new(90.0, 10.0),
            Vec2::new(90.0, 50.0),
            Vec2::new(10.0, 50.0),
        ];
        for (c, arc) in centers.iter().zip(path.points().chunks(5)) {
            for p in arc {
                assert!(((*p - *c).length() - 10.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn rounded_rect_radius_clamps_to_half_shorter_side() {
        let mut out = emitter();
        let mut path = PathScratch::new();
        rounded_rect(
            &mut out,
            ColorRgba::white(),
            Rect::new(0.0, 0.0, 100.0, 20.0),
            500.0,
            4,
            &mut path,
        );

        // Clamped radius is 10, so every outline point stays inside the rect.
        for p in path.points() {
            assert!(p.x >= -1e-3 && p.x <= 100.0 + 1e-3);
            assert!(p.y >= -1e-3 && p.y <= 20.0 + 1e-3);
        }
    }

    #[test]
    fn rounded_rect_outline_starts_on_the_left_edge() {
        let mut out = emitter();
        let mut path = PathScratch::new();
        rounded_rect(
            &mut out,
            ColorRgba::white(),
            Rect::new(0.0, 0.0, 40.0, 40.0),
            8.0,
            4,
            &mut path,
        );

        // First arc point is at 180 degrees around the top-left center.
        assert!((path.points()[0].x - 0.0).abs() < 1e-4);
        assert!((path.points()[0].y - 8.0).abs() < 1e-4);
    }

    // ── triangle ──────────────────────────────────────────────────────────

    #[test]
    fn triangle_records_its_own_corners() {
        let mut out = emitter();
        let mut path = PathScratch::new();
        let (a, b, c) = (Vec2::new(0.0, 0.0), Vec2::new(8.0, 2.0), Vec2::new(4.0, 9.0));
        triangle(&mut out, ColorRgba::white(), a, b, c, &mut path);

        assert_eq!(out.vertex_count(), 3);
        assert_eq!(path.points(), &[a, b, c]);
    }
}
