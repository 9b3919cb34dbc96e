//! Rings around closed paths.
//!
//! A ring is a strip of quads connecting two offset copies of a path, each
//! vertex displaced along its outward normal. [`offset_ring`] keeps the
//! color solid across the strip and carries strokes and borders;
//! [`fade_ring`] fades alpha to zero toward the outer edge and carries the
//! anti-aliasing feather.

use crate::batch::{Emitter, Vertex};
use crate::coords::{ColorRgba, Vec2};

/// Emits a solid ring of quads around a closed path.
///
/// Each path point is displaced along its normal by `inner` and `outer`;
/// consecutive displaced pairs are joined into quads, including the closing
/// edge back to the first point. `path` and `normals` must be the same
/// length.
pub fn offset_ring(
    out: &mut Emitter,
    color: ColorRgba,
    path: &[Vec2],
    normals: &[Vec2],
    inner: f32,
    outer: f32,
) {
    debug_assert_eq!(path.len(), normals.len());
    let n = path.len();
    for i in 0..n {
        let j = (i + 1) % n;
        let o1 = path[i] + normals[i] * outer;
        let o2 = path[j] + normals[j] * outer;
        let i1 = path[i] + normals[i] * inner;
        let i2 = path[j] + normals[j] * inner;
        if !out.ensure_capacity(6) {
            return;
        }
        out.push(Vertex::new(o1, color));
        out.push(Vertex::new(o2, color));
        out.push(Vertex::new(i2, color));
        out.push(Vertex::new(o1, color));
        out.push(Vertex::new(i2, color));
        out.push(Vertex::new(i1, color));
    }
}

/// Emits an alpha-falloff ring around a closed path.
///
/// Vertices at the `inner` offset keep the color's alpha; vertices at the
/// `outer` offset carry alpha zero, so the blended result fades the edge
/// out over the ring width. `path` and `normals` must be the same length.
pub fn fade_ring(
    out: &mut Emitter,
    color: ColorRgba,
    path: &[Vec2],
    normals: &[Vec2],
    inner: f32,
    outer: f32,
) {
    debug_assert_eq!(path.len(), normals.len());
    let outer_color = color.with_alpha(0.0);
    let n = path.len();
    for i in 0..n {
        let j = (i + 1) % n;
        let i1 = path[i] + normals[i] * inner;
        let i2 = path[j] + normals[j] * inner;
        let o1 = path[i] + normals[i] * outer;
        let o2 = path[j] + normals[j] * outer;
        if !out.ensure_capacity(6) {
            return;
        }
        out.push(Vertex::new(i1, color));
        out.push(Vertex::new(i2, color));
        out.push(Vertex::new(o2, outer_color));
        out.push(Vertex::new(i1, color));
        out.push(Vertex::new(o2, outer_color));
        out.push(Vertex::new(o1, outer_color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitter() -> Emitter {
        let mut out = Emitter::new(4096);
        out.begin_frame();
        out
    }

    fn unit_square() -> ([Vec2; 4], [Vec2; 4]) {
        let path = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        // Outward diagonals of a clockwise square, unit length.
        let d = std::f32::consts::FRAC_1_SQRT_2;
        let normals = [
            Vec2::new(-d, -d),
            Vec2::new(d, -d),
            Vec2::new(d, d),
            Vec2::new(-d, d),
        ];
        (path, normals)
    }

    #[test]
    fn offset_ring_emits_one_quad_per_edge() {
        let mut out = emitter();
        let (path, normals) = unit_square();
        offset_ring(&mut out, ColorRgba::white(), &path, &normals, -1.0, 1.0);
        assert_eq!(out.vertex_count(), 24);
    }

    #[test]
    fn offset_ring_displaces_along_the_normals() {
        let mut out = emitter();
        let (path, normals) = unit_square();
        offset_ring(&mut out, ColorRgba::white(), &path, &normals, -2.0, 3.0);

        let first = out.vertices()[0].pos;
        let expect = path[0] + normals[0] * 3.0;
        assert!((first[0] - expect.x).abs() < 1e-5);
        assert!((first[1] - expect.y).abs() < 1e-5);

        let inner = out.vertices()[2].pos;
        let expect = path[1] + normals[1] * -2.0;
        assert!((inner[0] - expect.x).abs() < 1e-5);
        assert!((inner[1] - expect.y).abs() < 1e-5);
    }

    #[test]
    fn offset_ring_color_is_uniform() {
        let mut out = emitter();
        let (path, normals) = unit_square();
        let color = ColorRgba::new(0.2, 0.4, 0.6, 0.8);
        offset_ring(&mut out, color, &path, &normals, -1.0, 1.0);

        for v in out.vertices() {
            assert_eq!(v.color, color.to_array());
        }
    }

    #[test]
    fn fade_ring_zeroes_alpha_on_the_outer_edge_only() {
        let mut out = emitter();
        let (path, normals) = unit_square();
        let color = ColorRgba::new(1.0, 0.0, 0.0, 0.5);
        fade_ring(&mut out, color, &path, &normals, 0.0, 1.25);

        let faded = out.vertices().iter().filter(|v| v.color[3] == 0.0).count();
        let solid = out.vertices().iter().filter(|v| v.color[3] == 0.5).count();
        assert_eq!(faded, 12);
        assert_eq!(solid, 12);

        // RGB stays put on both rims so only coverage fades.
        for v in out.vertices() {
            assert_eq!(v.color[0], 1.0);
            assert_eq!(v.color[1], 0.0);
        }
    }

    #[test]
    fn fade_ring_inner_rim_sits_on_the_path_at_zero_offset() {
        let mut out = emitter();
        let (path, normals) = unit_square();
        fade_ring(&mut out, ColorRgba::white(), &path, &normals, 0.0, 2.0);

        let first = out.vertices()[0];
        assert_eq!(first.pos, [path[0].x, path[0].y]);
        assert_eq!(first.color[3], 1.0);
    }
}
