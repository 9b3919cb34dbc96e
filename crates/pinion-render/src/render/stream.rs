use crate::batch::Vertex;

/// Double-buffered GPU vertex stream.
///
/// One `wgpu` buffer split into `slot_count` equal slots of
/// `slot_capacity` vertices. Each frame rotates to the next slot before
/// uploading, so a frame's writes never land in the slot the previous
/// frame's submitted draws still read from.
pub struct StreamBuffer {
    buffer: wgpu::Buffer,
    slot_capacity: usize,
    slot_count: usize,
    slot_index: usize,
}

impl StreamBuffer {
    pub fn new(device: &wgpu::Device, slot_capacity: usize, slot_count: usize) -> Self {
        let size = (slot_capacity * slot_count * std::mem::size_of::<Vertex>()) as u64;
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("pinion shape stream"),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            slot_capacity,
            slot_count,
            slot_index: 0,
        }
    }

    /// Rotates to the next slot. Call once per frame, before uploading.
    pub fn advance_slot(&mut self) {
        self.slot_index = (self.slot_index + 1) % self.slot_count;
    }

    /// Writes `vertices` to the start of the active slot.
    ///
    /// The write is staged and executes at the head of the queue's next
    /// submit, before any command buffer in that submit.
    pub fn upload(&self, queue: &wgpu::Queue, vertices: &[Vertex]) {
        debug_assert!(
            vertices.len() <= self.slot_capacity,
            "upload of {} vertices exceeds the slot capacity of {}",
            vertices.len(),
            self.slot_capacity
        );
        queue.write_buffer(
            &self.buffer,
            self.slot_offset_bytes(),
            bytemuck::cast_slice(vertices),
        );
    }

    /// Buffer slice covering the first `len` vertices of the active slot.
    pub fn active_slice(&self, len: usize) -> wgpu::BufferSlice<'_> {
        let start = self.slot_offset_bytes();
        let end = start + (len * std::mem::size_of::<Vertex>()) as u64;
        self.buffer.slice(start..end)
    }

    /// Releases the GPU allocation now instead of waiting for the handle
    /// to drop. In-flight submits reading the buffer finish first.
    pub fn destroy(&self) {
        self.buffer.destroy();
    }

    fn slot_offset_bytes(&self) -> u64 {
        (self.slot_index * self.slot_capacity * std::mem::size_of::<Vertex>()) as u64
    }
}
