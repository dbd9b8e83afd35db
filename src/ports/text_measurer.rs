//! Text Measurer Port - font metrics for layout.
//!
//! Layout needs to know how wide a run of text will be in the font the
//! renderer will actually draw with. Adapters build a measurer from the same
//! font source they embed, so line breaks match the output.

use crate::domain::layout::FontWeight;

/// Port for measuring rendered text width.
pub trait TextMeasurer: Send + Sync {
    /// Width of `text` in millimetres at `font_size` points.
    fn text_width(&self, text: &str, font_size: f32, weight: FontWeight) -> f32;
}
