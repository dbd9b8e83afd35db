//! Fill-in-the-blank sentence.

use super::{PageElement, QuestionFrame};
use crate::domain::layout::canvas::LayoutCanvas;
use crate::domain::layout::metrics::LINE_HEIGHT;
use crate::domain::layout::style::TextStyle;
use crate::domain::worksheet::{FillQuestion, FilledText};

pub struct FillQuestionElement {
    filled: FilledText,
    frame: QuestionFrame,
}

impl FillQuestionElement {
    pub fn new(question: &FillQuestion, frame: QuestionFrame) -> Self {
        let filled = question.display(frame.answer_mode());
        Self { filled, frame }
    }
}

impl PageElement for FillQuestionElement {
    fn required_height(&self, canvas: &LayoutCanvas<'_>) -> f32 {
        let width = self.frame.text_width(canvas);
        let lines = canvas.line_count(&self.filled.text, TextStyle::body(), width);
        lines as f32 * LINE_HEIGHT + LINE_HEIGHT / 2.0
    }

    fn render(&self, canvas: &mut LayoutCanvas<'_>, y: f32) -> f32 {
        let required = self.required_height(canvas);
        let y = canvas.break_if_needed(y, required);
        let x = self.frame.text_x();
        let width = self.frame.text_width(canvas);

        self.frame.draw_number(canvas, y);
        let text = &self.filled.text;
        let lines = canvas.wrap(text, TextStyle::body(), width);
        for (index, line) in lines.into_iter().enumerate() {
            let baseline = y + index as f32 * LINE_HEIGHT;
            canvas.draw_highlighted_line(
                x,
                baseline,
                text,
                line,
                &self.filled.answer_spans,
                TextStyle::body(),
            );
        }

        y + required
    }
}
