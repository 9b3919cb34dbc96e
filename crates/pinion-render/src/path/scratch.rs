use crate::coords::Vec2;

/// Reusable point buffer for boundary paths and normal accumulation.
///
/// Capacity grows by the allocator's amortized doubling and is never released,
/// so a buffer that has seen the largest path of the session serves every
/// later frame without reallocating. Two of these back the shape pipeline:
/// the retained last-fill outline and the normal scratch.
#[derive(Debug, Default)]
pub struct PathScratch {
    points: Vec<Vec2>,
}

impl PathScratch {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Discards the content, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn push(&mut self, p: Vec2) {
        self.points.push(p);
    }

    /// Replaces the content with a copy of `points`.
    pub fn set_from(&mut self, points: &[Vec2]) {
        self.points.clear();
        self.points.extend_from_slice(points);
    }

    /// Resets to `n` zeroed points and returns them for indexed writes.
    pub fn zeroed(&mut self, n: usize) -> &mut [Vec2] {
        self.points.clear();
        self.points.resize(n, Vec2::zero());
        &mut self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── growth ────────────────────────────────────────────────────────────

    #[test]
    fn capacity_never_shrinks() {
        let mut scratch = PathScratch::new();
        scratch.zeroed(1000);
        let grown = scratch.capacity();
        assert!(grown >= 1000);

        scratch.zeroed(10);
        assert_eq!(scratch.len(), 10);
        assert_eq!(scratch.capacity(), grown);

        scratch.clear();
        assert_eq!(scratch.capacity(), grown);
    }

    #[test]
    fn zeroed_resets_previous_content() {
        let mut scratch = PathScratch::new();
        scratch.push(Vec2::new(3.0, 4.0));
        let pts = scratch.zeroed(2);
        assert_eq!(pts[0], Vec2::zero());
        assert_eq!(pts[1], Vec2::zero());
    }

    // ── content ───────────────────────────────────────────────────────────

    #[test]
    fn set_from_copies_points() {
        let mut scratch = PathScratch::new();
        scratch.push(Vec2::new(9.0, 9.0));

        let src = [Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)];
        scratch.set_from(&src);
        assert_eq!(scratch.points(), &src);
    }

    #[test]
    fn push_appends_in_order() {
        let mut scratch = PathScratch::new();
        scratch.push(Vec2::new(1.0, 0.0));
        scratch.push(Vec2::new(2.0, 0.0));
        assert_eq!(scratch.len(), 2);
        assert_eq!(scratch.points()[1], Vec2::new(2.0, 0.0));
    }
}
