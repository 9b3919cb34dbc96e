use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgba, Vec2};

/// Interleaved shape vertex as streamed to the GPU.
///
/// Position is in logical pixels (top-left origin, +Y down); the vertex
/// shader converts to NDC via the projection uniform. Color is straight
/// (non-premultiplied) linear RGBA.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    #[inline]
    pub fn new(pos: Vec2, color: ColorRgba) -> Self {
        Self {
            pos: [pos.x, pos.y],
            color: color.to_array(),
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}
