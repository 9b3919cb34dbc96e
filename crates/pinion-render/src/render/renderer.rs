use crate::batch::ShapeBatcher;
use crate::render::{RenderCtx, RenderTarget};

use super::pipeline::ShapePipeline;
use super::stream::StreamBuffer;

/// Stream slots, sized for one frame recording while the previous frame's
/// submit is still in flight.
const FRAME_SLOTS: usize = 2;

/// GPU-backed immediate-mode shape renderer.
///
/// Couples a [`ShapeBatcher`] with a double-buffered vertex stream and a
/// lazily built pipeline. One [`frame`](Self::frame) call records and
/// draws one frame's worth of shapes.
pub struct ShapeRenderer {
    batcher: ShapeBatcher,
    stream: StreamBuffer,
    pipeline: ShapePipeline,
}

impl ShapeRenderer {
    /// Vertices per stream slot unless overridden.
    pub const DEFAULT_MAX_VERTICES: usize = 100_000;

    pub fn new(device: &wgpu::Device) -> Self {
        Self::with_capacity(device, Self::DEFAULT_MAX_VERTICES)
    }

    /// Creates a renderer whose stream holds `max_vertices` per frame
    /// slot. A frame may record more than one slot's worth in total; the
    /// overflow splits into extra draw ranges, each flushed separately.
    /// Only a single shape denser than the whole slot is refused (skipped
    /// with an error log).
    pub fn with_capacity(device: &wgpu::Device, max_vertices: usize) -> Self {
        Self {
            batcher: ShapeBatcher::new(max_vertices),
            stream: StreamBuffer::new(device, max_vertices, FRAME_SLOTS),
            pipeline: ShapePipeline::default(),
        }
    }

    /// Records shapes through `draw` and renders them into `target`.
    ///
    /// Runs the batcher's frame bracket around `draw`, rotates the stream
    /// to its next slot, then turns every sealed draw range into one
    /// upload plus one render pass over `target`. Ranges after the first
    /// split the pending encoder off into its own submit first, so their
    /// slot rewrite cannot reach the GPU before the earlier pass has been
    /// recorded against it.
    pub fn frame(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw: impl FnOnce(&mut ShapeBatcher),
    ) {
        self.batcher.begin_frame();
        draw(&mut self.batcher);
        self.batcher.end_frame();

        if self.batcher.emitter().is_empty() {
            return;
        }

        self.pipeline.ensure(ctx);
        self.pipeline.write_projection(ctx);
        let Some((pipeline, bind_group)) = self.pipeline.bindings() else {
            return;
        };

        self.stream.advance_slot();

        let vertices = self.batcher.emitter().vertices();
        for (i, range) in self.batcher.emitter().draw_ranges().iter().enumerate() {
            if i > 0 {
                let encoder = std::mem::replace(
                    target.encoder,
                    ctx.device
                        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                            label: Some("pinion shape flush encoder"),
                        }),
                );
                ctx.queue.submit(std::iter::once(encoder.finish()));
            }

            let verts = &vertices[range.start as usize..range.end as usize];
            self.stream.upload(ctx.queue, verts);

            let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("pinion shape pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, bind_group, &[]);
            rpass.set_vertex_buffer(0, self.stream.active_slice(verts.len()));
            rpass.draw(0..verts.len() as u32, 0..1);
        }
    }

    /// Releases the stream buffer's GPU memory now. Dropping the renderer
    /// would release it too, once the device garbage-collects.
    pub fn dispose(self) {
        self.stream.destroy();
    }
}
