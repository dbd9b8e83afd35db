//! Worksheet title at the top of the first page.

use super::PageElement;
use crate::domain::layout::canvas::LayoutCanvas;
use crate::domain::layout::metrics::{FONT_SIZE, HEADING_ADVANCE, PAGE_MARGIN, TITLE_SCALE};
use crate::domain::layout::style::TextStyle;

pub struct TitleElement<'a> {
    title: &'a str,
}

impl<'a> TitleElement<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    fn style() -> TextStyle {
        TextStyle::bold().with_size(FONT_SIZE * TITLE_SCALE)
    }
}

impl PageElement for TitleElement<'_> {
    fn required_height(&self, canvas: &LayoutCanvas<'_>) -> f32 {
        let width = canvas.page_size().content_width();
        let lines = canvas.line_count(self.title, Self::style(), width);
        lines as f32 * HEADING_ADVANCE
    }

    fn render(&self, canvas: &mut LayoutCanvas<'_>, y: f32) -> f32 {
        let width = canvas.page_size().content_width();
        let lines = canvas.wrap(self.title, Self::style(), width);
        canvas.draw_lines(
            PAGE_MARGIN,
            y,
            self.title,
            &lines,
            Self::style(),
            HEADING_ADVANCE,
        );
        y + self.required_height(canvas)
    }
}
