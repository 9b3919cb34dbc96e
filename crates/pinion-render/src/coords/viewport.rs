/// Viewport size in logical pixels.
///
/// Renderers should treat this as the coordinate basis for converting logical px
/// positions to NDC in shaders.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size with each dimension clamped to at least one pixel, so a minimized
    /// or degenerate viewport never produces a divide-by-zero projection.
    #[inline]
    pub fn clamped_to_unit(self) -> Self {
        Self::new(self.width.max(1.0), self.height.max(1.0))
    }
}
