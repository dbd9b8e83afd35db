//! Bold heading line(s).

use super::PageElement;
use crate::domain::layout::canvas::LayoutCanvas;
use crate::domain::layout::metrics::{LINE_HEIGHT, PAGE_MARGIN};
use crate::domain::layout::style::TextStyle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingElement {
    text: String,
}

impl HeadingElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl PageElement for HeadingElement {
    fn required_height(&self, canvas: &LayoutCanvas<'_>) -> f32 {
        let width = canvas.page_size().content_width();
        let lines = canvas.line_count(&self.text, TextStyle::bold(), width);
        lines as f32 * LINE_HEIGHT + LINE_HEIGHT / 2.0
    }

    /// Headings never break on their own; the owner keeps them with the
    /// block that follows.
    fn render(&self, canvas: &mut LayoutCanvas<'_>, y: f32) -> f32 {
        let width = canvas.page_size().content_width();
        let lines = canvas.wrap(&self.text, TextStyle::bold(), width);
        canvas.draw_lines(PAGE_MARGIN, y, &self.text, &lines, TextStyle::bold(), LINE_HEIGHT);
        y + self.required_height(canvas)
    }
}
