//! Free-text question followed by an answer rule.

use super::{PageElement, QuestionFrame};
use crate::domain::layout::canvas::LayoutCanvas;
use crate::domain::layout::metrics::{LINE_HEIGHT, PAGE_MARGIN, RULE_OFFSET};
use crate::domain::layout::style::TextStyle;
use crate::domain::worksheet::LongQuestion;

/// Lines of writing space below the rule.
const ANSWER_SPACE_LINES: f32 = 2.0;

pub struct LongQuestionElement<'a> {
    question: &'a LongQuestion,
    frame: QuestionFrame,
}

impl<'a> LongQuestionElement<'a> {
    pub fn new(question: &'a LongQuestion, frame: QuestionFrame) -> Self {
        Self { question, frame }
    }

    /// Answer lines beyond the first, only present in answer mode.
    fn extra_answer_lines(&self, canvas: &LayoutCanvas<'_>) -> usize {
        if !self.frame.answer_mode() {
            return 0;
        }
        let width = self.frame.text_width(canvas);
        canvas
            .line_count(&self.question.answer, TextStyle::answer(), width)
            .saturating_sub(1)
    }
}

impl PageElement for LongQuestionElement<'_> {
    fn required_height(&self, canvas: &LayoutCanvas<'_>) -> f32 {
        let width = self.frame.text_width(canvas);
        let question_lines = canvas.line_count(&self.question.question_text, TextStyle::body(), width);
        let extra = self.extra_answer_lines(canvas);

        question_lines as f32 * LINE_HEIGHT
            + LINE_HEIGHT / 2.0
            + extra as f32 * LINE_HEIGHT
            + LINE_HEIGHT * ANSWER_SPACE_LINES
    }

    fn render(&self, canvas: &mut LayoutCanvas<'_>, y: f32) -> f32 {
        let mut y = canvas.break_if_needed(y, self.required_height(canvas));
        let x = self.frame.text_x();
        let width = self.frame.text_width(canvas);

        self.frame.draw_number(canvas, y);
        let text = &self.question.question_text;
        let lines = canvas.wrap(text, TextStyle::body(), width);
        canvas.draw_lines(x, y, text, &lines, TextStyle::body(), LINE_HEIGHT);
        y += lines.len() as f32 * LINE_HEIGHT + LINE_HEIGHT / 2.0;

        if self.frame.answer_mode() {
            let answer = &self.question.answer;
            let answer_lines = canvas.wrap(answer, TextStyle::answer(), width);
            canvas.draw_lines(x, y, answer, &answer_lines, TextStyle::answer(), LINE_HEIGHT);
            y += answer_lines.len().saturating_sub(1) as f32 * LINE_HEIGHT;
        }

        let right = canvas.page_size().width() - PAGE_MARGIN;
        canvas.draw_rule(x, y + RULE_OFFSET, right, y + RULE_OFFSET);

        y + LINE_HEIGHT * ANSWER_SPACE_LINES
    }
}
