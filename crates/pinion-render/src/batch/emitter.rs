use std::ops::Range;

use super::Vertex;

/// Smallest stream capacity that fits every fixed-size primitive with room
/// to spare. Realistic configurations are in the tens of thousands.
pub const MIN_CAPACITY: usize = 64;

/// Frame-scoped vertex writer with capacity-bounded draw ranges.
///
/// Vertices accumulate in one growable CPU buffer per frame. `capacity` is
/// the size of a GPU stream slot: whenever the pending run of vertices would
/// exceed it, the run is sealed into a draw range and a new one starts.
/// Every sealed range therefore fits a slot, while a frame as a whole may
/// emit arbitrarily many vertices at the cost of one extra draw per extra
/// range. Ranges preserve emission order.
///
/// Callers reserve room with [`ensure_capacity`](Self::ensure_capacity)
/// before pushing a primitive's vertices; a single primitive larger than one
/// slot cannot be split and is rejected there.
#[derive(Debug)]
pub struct Emitter {
    vertices: Vec<Vertex>,
    ranges: Vec<Range<u32>>,
    range_start: usize,
    capacity: usize,
    warned_oversize: bool,
}

impl Emitter {
    /// Creates an emitter for stream slots of `capacity` vertices.
    ///
    /// The vertex buffer is allocated up front so steady-state frames below
    /// capacity never allocate.
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity >= MIN_CAPACITY,
            "stream capacity {capacity} is below the minimum of {MIN_CAPACITY}"
        );
        Self {
            vertices: Vec::with_capacity(capacity),
            ranges: Vec::with_capacity(8),
            range_start: 0,
            capacity,
            warned_oversize: false,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total vertices emitted this frame, across all ranges.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in the pending (unsealed) range.
    #[inline]
    pub fn pending_count(&self) -> usize {
        self.vertices.len() - self.range_start
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Sealed draw ranges, in emission order. Complete once the frame ends.
    #[inline]
    pub fn draw_ranges(&self) -> &[Range<u32>] {
        &self.ranges
    }

    /// Discards the previous frame's vertices and ranges.
    pub fn begin_frame(&mut self) {
        self.vertices.clear();
        self.ranges.clear();
        self.range_start = 0;
    }

    /// Seals the pending range so every emitted vertex belongs to a range.
    pub fn end_frame(&mut self) {
        self.seal();
    }

    /// Reserves room for a primitive of `extra` vertices, sealing the
    /// pending range first if it would overflow the slot.
    ///
    /// Returns `false` if the primitive alone exceeds a whole slot; such a
    /// primitive must be skipped (the stream cannot split it). This is a
    /// sizing error, reported once per emitter.
    #[must_use]
    pub fn ensure_capacity(&mut self, extra: usize) -> bool {
        if extra > self.capacity {
            if !self.warned_oversize {
                log::error!(
                    "shape needs {extra} vertices but the stream holds {}; skipping \
                     (increase the renderer's vertex capacity)",
                    self.capacity
                );
                self.warned_oversize = true;
            }
            return false;
        }
        if self.pending_count() + extra > self.capacity {
            self.seal();
        }
        true
    }

    #[inline]
    pub fn push(&mut self, vertex: Vertex) {
        debug_assert!(
            self.pending_count() < self.capacity,
            "vertex pushed without reserving capacity"
        );
        self.vertices.push(vertex);
    }

    fn seal(&mut self) {
        let end = self.vertices.len();
        if end > self.range_start {
            self.ranges.push(self.range_start as u32..end as u32);
            self.range_start = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgba, Vec2};

    fn v(x: f32) -> Vertex {
        Vertex::new(Vec2::new(x, 0.0), ColorRgba::white())
    }

    fn push_n(emitter: &mut Emitter, n: usize) {
        assert!(emitter.ensure_capacity(n));
        for i in 0..n {
            emitter.push(v(i as f32));
        }
    }

    // ── ranges ────────────────────────────────────────────────────────────

    #[test]
    fn sub_capacity_frame_is_one_range() {
        let mut emitter = Emitter::new(64);
        emitter.begin_frame();
        push_n(&mut emitter, 30);
        emitter.end_frame();

        assert_eq!(emitter.draw_ranges(), &[0..30]);
    }

    #[test]
    fn overflow_seals_and_starts_new_range() {
        let mut emitter = Emitter::new(64);
        emitter.begin_frame();
        push_n(&mut emitter, 60);
        push_n(&mut emitter, 30); // 60 + 30 > 64: previous run seals
        emitter.end_frame();

        assert_eq!(emitter.draw_ranges(), &[0..60, 60..90]);
        assert_eq!(emitter.vertex_count(), 90);
    }

    #[test]
    fn ranges_are_monotonic_and_slot_sized() {
        let mut emitter = Emitter::new(64);
        emitter.begin_frame();
        for _ in 0..50 {
            push_n(&mut emitter, 6);
        }
        emitter.end_frame();

        let mut cursor = 0;
        for range in emitter.draw_ranges() {
            assert_eq!(range.start, cursor);
            assert!(range.end > range.start);
            assert!((range.end - range.start) as usize <= emitter.capacity());
            cursor = range.end;
        }
        assert_eq!(cursor as usize, emitter.vertex_count());
    }

    #[test]
    fn exact_fit_does_not_split() {
        let mut emitter = Emitter::new(64);
        emitter.begin_frame();
        push_n(&mut emitter, 64);
        emitter.end_frame();

        assert_eq!(emitter.draw_ranges(), &[0..64]);
    }

    #[test]
    fn empty_frame_has_no_ranges() {
        let mut emitter = Emitter::new(64);
        emitter.begin_frame();
        emitter.end_frame();

        assert!(emitter.is_empty());
        assert!(emitter.draw_ranges().is_empty());
    }

    // ── oversize primitives ───────────────────────────────────────────────

    #[test]
    fn oversize_primitive_is_rejected() {
        let mut emitter = Emitter::new(64);
        emitter.begin_frame();
        push_n(&mut emitter, 10);

        assert!(!emitter.ensure_capacity(65));

        // The pending run is untouched by the rejection.
        emitter.end_frame();
        assert_eq!(emitter.draw_ranges(), &[0..10]);
    }

    // ── frame reset ───────────────────────────────────────────────────────

    #[test]
    fn begin_frame_discards_previous_frame() {
        let mut emitter = Emitter::new(64);
        emitter.begin_frame();
        push_n(&mut emitter, 40);
        emitter.end_frame();

        emitter.begin_frame();
        assert!(emitter.is_empty());
        assert!(emitter.draw_ranges().is_empty());
        push_n(&mut emitter, 3);
        emitter.end_frame();
        assert_eq!(emitter.draw_ranges(), &[0..3]);
    }
}
