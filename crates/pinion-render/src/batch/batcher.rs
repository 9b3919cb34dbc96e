//! Immediate-mode shape recording.

use crate::coords::{ColorRgba, Rect, Vec2};
use crate::path::{PathScratch, averaged_normals};
use crate::tess::{fill, ring, stroke};

use super::Emitter;

/// Records shapes for one frame as a flat triangle stream.
///
/// All shapes are stamped with the current color and, for fills, feathered
/// with a translucent rim when anti-aliasing is on. Each successful fill
/// also remembers its boundary outline; [`add_border`](Self::add_border)
/// strokes that remembered outline, so a fill-plus-border pair shares one
/// exact boundary. The outline is forgotten at the next `begin_frame`.
///
/// Shapes must be recorded between [`begin_frame`](Self::begin_frame) and
/// [`end_frame`](Self::end_frame); [`ShapeRenderer::frame`] drives that
/// bracket when drawing through a GPU.
///
/// [`ShapeRenderer::frame`]: crate::render::ShapeRenderer::frame
#[derive(Debug)]
pub struct ShapeBatcher {
    emitter: Emitter,
    color: ColorRgba,
    aa_enabled: bool,
    feather: f32,
    last_path: PathScratch,
    normals: PathScratch,
    in_frame: bool,
}

impl ShapeBatcher {
    /// Width of the anti-aliasing rim, in pixels, unless overridden.
    pub const DEFAULT_FEATHER: f32 = 1.25;

    /// Creates a batcher whose frames hold up to `capacity` vertices per
    /// draw range. Starts out white, anti-aliased, with the default
    /// feather width.
    pub fn new(capacity: usize) -> Self {
        Self {
            emitter: Emitter::new(capacity),
            color: ColorRgba::white(),
            aa_enabled: true,
            feather: Self::DEFAULT_FEATHER,
            last_path: PathScratch::new(),
            normals: PathScratch::new(),
            in_frame: false,
        }
    }

    /// The recorded vertex stream.
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Sets the color stamped on subsequent shapes.
    pub fn set_color(&mut self, color: ColorRgba) {
        self.color = color;
    }

    /// Toggles the anti-aliasing rim on subsequent fills and borders.
    pub fn set_antialias(&mut self, enabled: bool) {
        self.aa_enabled = enabled;
    }

    /// Sets the anti-aliasing rim width in pixels. Negative widths clamp
    /// to zero, which disables the rim like `set_antialias(false)` does.
    pub fn set_feather(&mut self, feather: f32) {
        self.feather = feather.max(0.0);
    }

    /// Starts a new frame: discards last frame's vertices and forgets the
    /// remembered outline. Render settings carry over.
    pub fn begin_frame(&mut self) {
        debug_assert!(!self.in_frame, "begin_frame called twice without end_frame");
        self.emitter.begin_frame();
        self.last_path.clear();
        self.in_frame = true;
    }

    /// Ends the frame and seals the trailing draw range.
    pub fn end_frame(&mut self) {
        debug_assert!(self.in_frame, "end_frame without begin_frame");
        self.emitter.end_frame();
        self.in_frame = false;
    }

    // ── fills ─────────────────────────────────────────────────────────────

    /// Fills an axis-aligned rectangle. Inverted rects are normalized
    /// first; empty rects are ignored.
    pub fn fill_rect(&mut self, rect: Rect) {
        self.check_in_frame();
        let rect = rect.normalized();
        if rect.is_empty() {
            return;
        }
        fill::rect(&mut self.emitter, self.color, rect, &mut self.last_path);
        self.feather_last_path();
    }

    /// Fills a triangle given in clockwise screen order.
    pub fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        self.check_in_frame();
        fill::triangle(&mut self.emitter, self.color, a, b, c, &mut self.last_path);
        self.feather_last_path();
    }

    /// Fills a circle approximated by `segments` fan wedges (at least 3).
    ///
    /// A circle too dense for the vertex capacity is skipped whole; the
    /// remembered outline then still belongs to the previous fill.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, segments: u32) {
        self.check_in_frame();
        if !fill::circle(
            &mut self.emitter,
            self.color,
            center,
            radius,
            segments,
            &mut self.last_path,
        ) {
            return;
        }
        self.feather_last_path();
    }

    /// Fills a convex polygon given in clockwise screen order.
    ///
    /// Ignored when fewer than 3 points are supplied or when the fan is
    /// too dense for the vertex capacity; either way the remembered
    /// outline stays what it was.
    pub fn fill_polygon_convex(&mut self, points: &[Vec2]) {
        self.check_in_frame();
        if points.len() < 3 {
            return;
        }
        if !fill::convex_polygon(&mut self.emitter, self.color, points) {
            return;
        }
        self.last_path.set_from(points);
        self.feather_last_path();
    }

    /// Fills a rounded rectangle with `segments` arc steps per corner
    /// (at least 3). The radius is clamped to half the shorter side; a
    /// non-positive radius falls back to a plain rectangle.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, segments: u32) {
        self.check_in_frame();
        let rect = rect.normalized();
        if rect.is_empty() {
            return;
        }
        if radius <= 0.0 {
            fill::rect(&mut self.emitter, self.color, rect, &mut self.last_path);
        } else {
            fill::rounded_rect(
                &mut self.emitter,
                self.color,
                rect,
                radius,
                segments,
                &mut self.last_path,
            );
        }
        self.feather_last_path();
    }

    // ── strokes ───────────────────────────────────────────────────────────

    /// Strokes a line segment. Ignored for coincident endpoints or a
    /// non-positive thickness.
    pub fn draw_line(&mut self, a: Vec2, b: Vec2, thickness: f32) {
        self.check_in_frame();
        if thickness <= 0.0 || (b - a).length() == 0.0 {
            return;
        }
        stroke::line(&mut self.emitter, self.color, a, b, thickness);
    }

    /// Strokes a rectangle outline centered on its edges. Ignored for a
    /// non-positive thickness.
    pub fn draw_rect(&mut self, rect: Rect, thickness: f32) {
        self.check_in_frame();
        if thickness <= 0.0 {
            return;
        }
        stroke::rect(&mut self.emitter, self.color, rect.normalized(), thickness);
    }

    /// Strokes a circle outline centered on its radius. Ignored for a
    /// non-positive thickness.
    pub fn draw_circle(&mut self, center: Vec2, radius: f32, thickness: f32, segments: u32) {
        self.check_in_frame();
        if thickness <= 0.0 {
            return;
        }
        stroke::circle(&mut self.emitter, self.color, center, radius, thickness, segments);
    }

    /// Strokes a rounded rectangle outline. The radius is clamped to half
    /// the shorter side; a non-positive radius falls back to a plain
    /// rectangle outline. Ignored for a non-positive thickness.
    pub fn draw_rounded_rect(&mut self, rect: Rect, radius: f32, thickness: f32, segments: u32) {
        self.check_in_frame();
        if thickness <= 0.0 {
            return;
        }
        let rect = rect.normalized();
        if radius <= 0.0 {
            stroke::rect(&mut self.emitter, self.color, rect, thickness);
        } else {
            stroke::rounded_rect(&mut self.emitter, self.color, rect, radius, thickness, segments);
        }
    }

    /// Strokes a closed polygon along per-vertex averaged normals.
    /// Ignored when fewer than 3 points are supplied or the thickness is
    /// non-positive.
    pub fn draw_polygon(&mut self, points: &[Vec2], thickness: f32) {
        self.check_in_frame();
        if points.len() < 3 || thickness <= 0.0 {
            return;
        }
        stroke::polygon(&mut self.emitter, self.color, points, thickness, &mut self.normals);
    }

    /// Strokes the outline remembered by the most recent fill, straddling
    /// it half inside and half outside, with an anti-aliased outer rim
    /// when anti-aliasing is on.
    ///
    /// Ignored when no fill has recorded an outline this frame or the
    /// thickness is non-positive.
    pub fn add_border(&mut self, thickness: f32) {
        self.check_in_frame();
        if self.last_path.len() < 3 || thickness <= 0.0 {
            return;
        }
        let half = thickness * 0.5;
        let normals = averaged_normals(self.last_path.points(), &mut self.normals);
        ring::offset_ring(
            &mut self.emitter,
            self.color,
            self.last_path.points(),
            normals,
            -half,
            half,
        );
        if self.aa_enabled && self.feather > 0.0 {
            ring::fade_ring(
                &mut self.emitter,
                self.color,
                self.last_path.points(),
                normals,
                half,
                half + self.feather,
            );
        }
    }

    /// Fades the remembered outline out over the feather width.
    fn feather_last_path(&mut self) {
        if !self.aa_enabled || self.feather <= 0.0 || self.last_path.len() < 3 {
            return;
        }
        let normals = averaged_normals(self.last_path.points(), &mut self.normals);
        ring::fade_ring(
            &mut self.emitter,
            self.color,
            self.last_path.points(),
            normals,
            0.0,
            self.feather,
        );
    }

    fn check_in_frame(&self) {
        debug_assert!(self.in_frame, "shape recorded outside a frame");
    }
}
