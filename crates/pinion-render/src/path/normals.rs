use crate::coords::Vec2;

use super::PathScratch;

/// Computes per-vertex averaged (miter) unit normals for a closed path.
///
/// Each edge contributes its outward perpendicular to both endpoints; the
/// accumulated vector at every vertex is then normalized. For a clockwise
/// path the normals point away from the enclosed region, which is what the
/// anti-alias and border rings extrude along.
///
/// Degenerate inputs stay well-defined: a zero-length edge is treated as
/// having length one (its raw perpendicular is zero, so it simply does not
/// contribute), and a vertex whose contributions cancel falls back to the
/// unit normal `(0, 1)`.
///
/// Results are written into `scratch` and returned as a slice with one normal
/// per path point.
pub fn averaged_normals<'a>(path: &[Vec2], scratch: &'a mut PathScratch) -> &'a [Vec2] {
    let n = path.len();
    let normals = scratch.zeroed(n);

    for i in 0..n {
        let j = (i + 1) % n;
        let d = path[j] - path[i];
        let len = d.length();
        let inv = if len == 0.0 { 1.0 } else { 1.0 / len };
        let edge_normal = d.perp_left() * inv;

        normals[i] = normals[i] + edge_normal;
        normals[j] = normals[j] + edge_normal;
    }

    for normal in normals.iter_mut() {
        let len = normal.length();
        *normal = if len == 0.0 {
            Vec2::new(0.0, 1.0)
        } else {
            *normal / len
        };
    }

    normals
}
