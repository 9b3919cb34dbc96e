use anyhow::Result;

use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::WindowEvent;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use pinion_render::batch::ShapeBatcher;
use pinion_render::coords::{ColorRgba, Rect, Vec2};
use pinion_render::core::{App, AppControl, FrameCtx};
use pinion_render::device::GpuInit;
use pinion_render::logging::{LoggingConfig, init_logging};
use pinion_render::render::ShapeRenderer;
use pinion_render::window::{Runtime, RuntimeConfig};

const BACKGROUND: ColorRgba = ColorRgba::new(0.07, 0.08, 0.10, 1.0);

/// One 160 by 100 gallery cell per shape, five columns to a row.
const fn gallery_row(y: f32) -> [Rect; 5] {
    [
        Rect::new(40.0, y, 160.0, 100.0),
        Rect::new(220.0, y, 160.0, 100.0),
        Rect::new(400.0, y, 160.0, 100.0),
        Rect::new(580.0, y, 160.0, 100.0),
        Rect::new(760.0, y, 160.0, 100.0),
    ]
}

const FILL_CELLS: [Rect; 5] = gallery_row(60.0);
const STROKE_CELLS: [Rect; 5] = gallery_row(240.0);

/// Animated gallery exercising every shape the renderer draws.
struct ShapeDemo {
    shapes: Option<ShapeRenderer>,
    elapsed: f32,
    cursor: Option<PhysicalPosition<f64>>,
}

impl ShapeDemo {
    fn new() -> Self {
        Self {
            shapes: None,
            elapsed: 0.0,
            cursor: None,
        }
    }
}

impl App for ShapeDemo {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed()
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    return AppControl::Exit;
                }
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor = Some(*position),
            WindowEvent::CursorLeft { .. } => self.cursor = None,
            _ => {}
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.elapsed += ctx.time.dt;
        let t = self.elapsed;

        let scale = ctx.window.window.scale_factor();
        let hover = self.cursor.map(|pos| {
            let pos = pos.to_logical::<f32>(scale);
            Vec2::new(pos.x, pos.y)
        });

        let shapes = self
            .shapes
            .get_or_insert_with(|| ShapeRenderer::new(ctx.gpu.device()));

        ctx.render(BACKGROUND, |rctx, target| {
            shapes.frame(rctx, target, |p| draw_scene(p, t, hover));
        })
    }
}

fn draw_scene(p: &mut ShapeBatcher, t: f32, hover: Option<Vec2>) {
    let pulse = (t * 2.0).sin();
    let spin = t * 0.6;

    // ── fills with borders ────────────────────────────────────────────────
    p.set_color(ColorRgba::rgb(0.84, 0.36, 0.31));
    p.fill_rect(FILL_CELLS[0]);
    p.set_color(ColorRgba::rgb(0.95, 0.87, 0.70));
    p.add_border(3.0);

    p.set_color(ColorRgba::rgb(0.33, 0.55, 0.80));
    p.fill_rounded_rect(FILL_CELLS[1], 18.0, 8);
    p.set_color(ColorRgba::rgb(0.95, 0.87, 0.70));
    p.add_border(3.0);

    p.set_color(ColorRgba::rgb(0.42, 0.72, 0.46));
    p.fill_circle(FILL_CELLS[2].center(), 46.0 + 6.0 * pulse, 48);
    p.set_color(ColorRgba::rgb(0.95, 0.87, 0.70));
    p.add_border(2.0);

    p.set_color(ColorRgba::rgb(0.76, 0.62, 0.35));
    p.fill_polygon_convex(&ngon(FILL_CELLS[3].center(), 52.0, 6, spin));
    p.set_color(ColorRgba::rgb(0.95, 0.87, 0.70));
    p.add_border(2.5);

    let tri = FILL_CELLS[4].center();
    p.set_color(ColorRgba::rgb(0.63, 0.47, 0.77));
    p.fill_triangle(
        tri + Vec2::new(0.0, -48.0),
        tri + Vec2::new(60.0, 48.0),
        tri + Vec2::new(-60.0, 48.0),
    );
    p.set_color(ColorRgba::rgb(0.95, 0.87, 0.70));
    p.add_border(2.0);

    // ── strokes ───────────────────────────────────────────────────────────
    p.set_color(ColorRgba::rgb(0.84, 0.36, 0.31));
    p.draw_rect(STROKE_CELLS[0], 3.0);

    p.set_color(ColorRgba::rgb(0.33, 0.55, 0.80));
    p.draw_rounded_rect(STROKE_CELLS[1], 18.0, 3.0, 8);

    p.set_color(ColorRgba::rgb(0.42, 0.72, 0.46));
    p.draw_circle(STROKE_CELLS[2].center(), 50.0, 4.0, 48);

    p.set_color(ColorRgba::rgb(0.76, 0.62, 0.35));
    p.draw_polygon(&ngon(STROKE_CELLS[3].center(), 52.0, 5, -spin), 3.0);

    let lines = STROKE_CELLS[4];
    p.set_color(ColorRgba::rgb(0.63, 0.47, 0.77));
    for i in 0..5 {
        let sway = (t + i as f32 * 0.7).sin() * 18.0;
        p.draw_line(
            lines.origin + Vec2::new(10.0 + i as f32 * 30.0, 100.0),
            lines.origin + Vec2::new(25.0 + i as f32 * 30.0 + sway, 4.0),
            3.0,
        );
    }

    // ── blending and feather ──────────────────────────────────────────────
    let base = Vec2::new(140.0, 470.0);
    for (i, color) in [
        ColorRgba::new(0.84, 0.36, 0.31, 0.55),
        ColorRgba::new(0.42, 0.72, 0.46, 0.55),
        ColorRgba::new(0.33, 0.55, 0.80, 0.55),
    ]
    .into_iter()
    .enumerate()
    {
        let phase = t + i as f32 * std::f32::consts::TAU / 3.0;
        p.set_color(color);
        p.fill_circle(
            base + Vec2::new(phase.cos() * 34.0 + i as f32 * 60.0, phase.sin() * 20.0),
            48.0,
            48,
        );
    }

    // Same shape with and without the feather rim, for comparison.
    p.set_color(ColorRgba::rgb(0.9, 0.9, 0.92));
    p.fill_circle(Vec2::new(480.0, 470.0), 40.0, 24);
    p.set_antialias(false);
    p.fill_circle(Vec2::new(590.0, 470.0), 40.0, 24);
    p.set_antialias(true);

    // Heavy feather reads as a soft glow.
    p.set_feather(12.0);
    p.set_color(ColorRgba::new(0.95, 0.80, 0.35, 0.9));
    p.fill_circle(Vec2::new(730.0, 470.0), 34.0 + 3.0 * pulse, 36);
    p.set_feather(ShapeBatcher::DEFAULT_FEATHER);

    // ── hover ─────────────────────────────────────────────────────────────
    if let Some(cursor) = hover {
        p.set_color(ColorRgba::new(0.95, 0.87, 0.70, 0.4));
        for cell in FILL_CELLS.into_iter().chain(STROKE_CELLS) {
            if cell.contains(cursor) {
                p.draw_rect(cell, 1.5);
            }
        }
    }
}

/// Regular n-gon wound clockwise in screen space.
fn ngon(center: Vec2, radius: f32, sides: u32, phase: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let a = phase + std::f32::consts::TAU * i as f32 / sides as f32;
            center + Vec2::new(a.cos(), a.sin()) * radius
        })
        .collect()
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("starting shape gallery (Escape exits, hover outlines a cell)");

    let config = RuntimeConfig {
        title: "pinion shapes".to_string(),
        initial_size: LogicalSize::new(960.0, 600.0),
    };

    Runtime::run(config, GpuInit::default(), ShapeDemo::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_cells() -> impl Iterator<Item = Rect> {
        FILL_CELLS.into_iter().chain(STROKE_CELLS)
    }

    #[test]
    fn gallery_cells_do_not_overlap() {
        let cells: Vec<Rect> = all_cells().collect();
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                let apart = a.max().x <= b.min().x
                    || b.max().x <= a.min().x
                    || a.max().y <= b.min().y
                    || b.max().y <= a.min().y;
                assert!(apart, "cells {a:?} and {b:?} overlap");
            }
        }
    }

    #[test]
    fn cursor_over_a_cell_hits_exactly_that_cell() {
        for cell in all_cells() {
            assert!(cell.contains(cell.center()));
            assert_eq!(all_cells().filter(|c| c.contains(cell.center())).count(), 1);
        }
    }
}
