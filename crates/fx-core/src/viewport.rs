use crate::config::CeilingBands;

/// CSS-pixel size of the area objects live in.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width usable for placement; degenerate sizes collapse to 0.
    #[inline]
    pub fn usable_width(&self) -> f32 {
        if self.width.is_finite() {
            self.width.max(0.0)
        } else {
            0.0
        }
    }
}

/// Population ceiling for a viewport width using the default bands:
/// `< 768 → 20`, `< 1200 → 35`, otherwise `50`; degenerate widths give 0.
pub fn compute_ceiling(width: f32) -> usize {
    CeilingBands::default().ceiling_for(width)
}
