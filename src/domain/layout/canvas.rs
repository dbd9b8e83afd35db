//! Device-independent page canvas.
//!
//! Elements draw onto a [`LayoutCanvas`] using top-left-origin millimetre
//! coordinates (text `y` is the baseline). The finished [`LayoutPlan`] is what
//! a renderer turns into PDF bytes.

use serde::Serialize;
use std::ops::Range;

use super::metrics::{PageSize, PAGE_MARGIN};
use super::style::{Rgb, TextStyle};
use super::wrap::wrap_text;
use crate::ports::TextMeasurer;

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        style: TextStyle,
    },
    /// A thin black line, used for answer rules.
    Rule { x1: f32, y1: f32, x2: f32, y2: f32 },
}

/// Draw operations for one page, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text of every text op, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }
}

/// Result of laying out a worksheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub page_size: PageSize,
    pub pages: Vec<Page>,
}

impl LayoutPlan {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every text op with its page index.
    pub fn texts(&self) -> impl Iterator<Item = (usize, &str)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(index, page)| page.texts().map(move |text| (index, text)))
    }
}

/// Mutable drawing surface that grows pages on demand.
pub struct LayoutCanvas<'m> {
    measurer: &'m dyn TextMeasurer,
    page_size: PageSize,
    pages: Vec<Page>,
}

impl<'m> LayoutCanvas<'m> {
    pub fn new(measurer: &'m dyn TextMeasurer, page_size: PageSize) -> Self {
        Self {
            measurer,
            page_size,
            pages: vec![Page::default()],
        }
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Starts a new page and returns the cursor at its top margin.
    pub fn add_page(&mut self) -> f32 {
        self.pages.push(Page::default());
        PAGE_MARGIN
    }

    /// Moves to a new page when a block of `required` height starting at `y`
    /// would cross the bottom margin.
    ///
    /// A cursor already at the top of a page is never moved, so a block taller
    /// than a page overflows instead of producing blank pages.
    pub fn break_if_needed(&mut self, y: f32, required: f32) -> f32 {
        let at_page_top = y <= PAGE_MARGIN;
        if !at_page_top && y + required > self.page_size.bottom_limit() {
            self.add_page()
        } else {
            y
        }
    }

    pub fn text_width(&self, text: &str, style: TextStyle) -> f32 {
        self.measurer.text_width(text, style.size, style.weight)
    }

    /// Wrapped lines as byte ranges into `text`.
    pub fn wrap(&self, text: &str, style: TextStyle, max_width: f32) -> Vec<Range<usize>> {
        wrap_text(self.measurer, text, style, max_width)
    }

    /// Wrapped line count, for height calculations.
    pub fn line_count(&self, text: &str, style: TextStyle, max_width: f32) -> usize {
        self.wrap(text, style, max_width).len()
    }

    pub fn draw_text(&mut self, x: f32, y: f32, text: impl Into<String>, style: TextStyle) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.current_page().ops.push(DrawOp::Text { x, y, text, style });
    }

    /// Draws wrapped lines starting at baseline `y`, one line height apart.
    pub fn draw_lines(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        lines: &[Range<usize>],
        style: TextStyle,
        line_height: f32,
    ) {
        for (index, line) in lines.iter().enumerate() {
            let baseline = y + index as f32 * line_height;
            self.draw_text(x, baseline, text[line.clone()].trim_end(), style);
        }
    }

    /// Draws one wrapped line, switching to the answer colour inside
    /// `highlights` (byte ranges into `text`).
    pub fn draw_highlighted_line(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        line: Range<usize>,
        highlights: &[Range<usize>],
        style: TextStyle,
    ) {
        let mut cursor_x = x;
        for (segment, highlighted) in split_by_highlights(line, highlights) {
            let segment_text = &text[segment];
            let segment_style = if highlighted {
                TextStyle {
                    color: Rgb::ANSWER,
                    ..style
                }
            } else {
                style
            };
            let width = self.text_width(segment_text, segment_style);
            self.draw_text(cursor_x, y, segment_text, segment_style);
            cursor_x += width;
        }
    }

    pub fn draw_rule(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.current_page().ops.push(DrawOp::Rule { x1, y1, x2, y2 });
    }

    pub fn finish(self) -> LayoutPlan {
        LayoutPlan {
            page_size: self.page_size,
            pages: self.pages,
        }
    }

    fn current_page(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

/// Cuts a line into consecutive segments flagged by whether they fall inside
/// a highlight.
fn split_by_highlights(
    line: Range<usize>,
    highlights: &[Range<usize>],
) -> Vec<(Range<usize>, bool)> {
    let mut segments = Vec::new();
    let mut cursor = line.start;

    for highlight in highlights {
        let start = highlight.start.max(line.start);
        let end = highlight.end.min(line.end);
        if start >= end {
            continue;
        }
        if start > cursor {
            segments.push((cursor..start, false));
        }
        segments.push((start..end, true));
        cursor = end;
    }

    if cursor < line.end {
        segments.push((cursor..line.end, false));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::FontWeight;

    struct FixedWidth;

    impl TextMeasurer for FixedWidth {
        fn text_width(&self, text: &str, _size: f32, _weight: FontWeight) -> f32 {
            text.chars().count() as f32
        }
    }

    #[test]
    fn canvas_starts_with_one_page() {
        let canvas = LayoutCanvas::new(&FixedWidth, PageSize::A4);
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn break_if_needed_keeps_blocks_that_fit() {
        let mut canvas = LayoutCanvas::new(&FixedWidth, PageSize::A4);
        assert_eq!(canvas.break_if_needed(100.0, 50.0), 100.0);
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn break_if_needed_moves_overflowing_blocks() {
        let mut canvas = LayoutCanvas::new(&FixedWidth, PageSize::A4);
        assert_eq!(canvas.break_if_needed(260.0, 20.0), PAGE_MARGIN);
        assert_eq!(canvas.page_count(), 2);
    }

    #[test]
    fn break_if_needed_never_breaks_at_page_top() {
        let mut canvas = LayoutCanvas::new(&FixedWidth, PageSize::A4);
        assert_eq!(canvas.break_if_needed(PAGE_MARGIN, 400.0), PAGE_MARGIN);
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn empty_text_is_not_drawn() {
        let mut canvas = LayoutCanvas::new(&FixedWidth, PageSize::A4);
        canvas.draw_text(0.0, 0.0, "", TextStyle::body());
        assert!(canvas.finish().pages[0].ops.is_empty());
    }

    #[test]
    fn highlighted_line_splits_into_coloured_segments() {
        let mut canvas = LayoutCanvas::new(&FixedWidth, PageSize::A4);
        let text = "is Paris ok";
        canvas.draw_highlighted_line(10.0, 30.0, text, 0..text.len(), &[3..8], TextStyle::body());

        let plan = canvas.finish();
        let ops = &plan.pages[0].ops;
        assert_eq!(ops.len(), 3);
        match (&ops[0], &ops[1], &ops[2]) {
            (
                DrawOp::Text { x: x0, text: t0, style: s0, .. },
                DrawOp::Text { x: x1, text: t1, style: s1, .. },
                DrawOp::Text { x: x2, text: t2, .. },
            ) => {
                assert_eq!((t0.as_str(), t1.as_str(), t2.as_str()), ("is ", "Paris", " ok"));
                assert_eq!((*x0, *x1, *x2), (10.0, 13.0, 18.0));
                assert_eq!(s0.color, Rgb::BLACK);
                assert_eq!(s1.color, Rgb::ANSWER);
            }
            other => panic!("unexpected ops {:?}", other),
        }
    }

    #[test]
    fn highlights_outside_the_line_are_ignored() {
        let segments = split_by_highlights(5..10, &[0..3, 12..15]);
        assert_eq!(segments, vec![(5..10, false)]);
    }

    #[test]
    fn highlight_spanning_lines_is_clipped() {
        let segments = split_by_highlights(5..10, &[3..7]);
        assert_eq!(segments, vec![(5..7, true), (7..10, false)]);
    }

    #[test]
    fn plan_texts_report_page_indices() {
        let mut canvas = LayoutCanvas::new(&FixedWidth, PageSize::A4);
        canvas.draw_text(0.0, 30.0, "first", TextStyle::body());
        canvas.add_page();
        canvas.draw_text(0.0, 30.0, "second", TextStyle::body());
        let plan = canvas.finish();
        let texts: Vec<_> = plan.texts().collect();
        assert_eq!(texts, vec![(0, "first"), (1, "second")]);
    }
}
