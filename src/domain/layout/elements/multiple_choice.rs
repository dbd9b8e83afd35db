//! Multiple-choice question with an answer column on the right.

use super::{PageElement, QuestionFrame};
use crate::domain::layout::canvas::LayoutCanvas;
use crate::domain::layout::metrics::{
    ANSWER_COLUMN_RATIO, ANSWER_LABEL, ANSWER_LABEL_GAP, CHOICE_COLUMN_PADDING, CHOICE_SEPARATOR,
    LINE_HEIGHT, PAGE_MARGIN, RULE_OFFSET,
};
use crate::domain::layout::style::TextStyle;
use crate::domain::worksheet::MultipleChoiceQuestion;

pub struct MultipleChoiceElement<'a> {
    question: &'a MultipleChoiceQuestion,
    frame: QuestionFrame,
    /// `1. a   2. b ...` in display order.
    choices_line: String,
    /// 1-based display number of the correct choice.
    correct_number: Option<usize>,
}

impl<'a> MultipleChoiceElement<'a> {
    /// `order` lists indices into `question.choices` in display order.
    pub fn new(question: &'a MultipleChoiceQuestion, frame: QuestionFrame, order: Vec<usize>) -> Self {
        let displayed: Vec<&str> = order
            .iter()
            .filter_map(|&index| question.choices.get(index).map(String::as_str))
            .collect();

        let choices_line = displayed
            .iter()
            .enumerate()
            .map(|(position, choice)| format!("{}. {}", position + 1, choice))
            .collect::<Vec<_>>()
            .join(CHOICE_SEPARATOR);

        let correct_number = question
            .correct_index()
            .and_then(|correct| order.iter().position(|&index| index == correct))
            .map(|position| position + 1);

        Self {
            question,
            frame,
            choices_line,
            correct_number,
        }
    }

    fn answer_column_width(canvas: &LayoutCanvas<'_>) -> f32 {
        canvas.page_size().content_width() * ANSWER_COLUMN_RATIO
    }

    fn question_column_width(&self, canvas: &LayoutCanvas<'_>) -> f32 {
        self.frame.text_width(canvas) - Self::answer_column_width(canvas) - CHOICE_COLUMN_PADDING
    }

    fn line_counts(&self, canvas: &LayoutCanvas<'_>) -> (usize, usize) {
        let width = self.question_column_width(canvas);
        let question = canvas.line_count(&self.question.question_text, TextStyle::body(), width);
        let choices = canvas.line_count(&self.choices_line, TextStyle::body(), width);
        (question, choices)
    }

    fn draw_answer_column(&self, canvas: &mut LayoutCanvas<'_>, y: f32) {
        let answer_x =
            canvas.page_size().width() - PAGE_MARGIN - Self::answer_column_width(canvas);
        canvas.draw_text(answer_x, y, ANSWER_LABEL, TextStyle::body());

        let rule_start = answer_x + canvas.text_width(ANSWER_LABEL, TextStyle::body()) + ANSWER_LABEL_GAP;
        let rule_end = canvas.page_size().width() - PAGE_MARGIN;
        canvas.draw_rule(rule_start, y + RULE_OFFSET, rule_end, y + RULE_OFFSET);

        if !self.frame.answer_mode() {
            return;
        }
        match self.correct_number {
            Some(number) => {
                let text = format!("{}. {}", number, self.question.answer);
                canvas.draw_text(rule_start + 1.0, y, text, TextStyle::answer());
            }
            None => tracing::debug!(
                answer = %self.question.answer,
                "Answer is not among the choices, leaving answer column blank"
            ),
        }
    }
}

impl PageElement for MultipleChoiceElement<'_> {
    fn required_height(&self, canvas: &LayoutCanvas<'_>) -> f32 {
        let (question_lines, choice_lines) = self.line_counts(canvas);
        (question_lines + choice_lines) as f32 * LINE_HEIGHT + LINE_HEIGHT
    }

    fn render(&self, canvas: &mut LayoutCanvas<'_>, y: f32) -> f32 {
        let required = self.required_height(canvas);
        let y = canvas.break_if_needed(y, required);
        let x = self.frame.text_x();
        let width = self.question_column_width(canvas);

        self.draw_answer_column(canvas, y);
        self.frame.draw_number(canvas, y);

        let text = &self.question.question_text;
        let question_lines = canvas.wrap(text, TextStyle::body(), width);
        canvas.draw_lines(x, y, text, &question_lines, TextStyle::body(), LINE_HEIGHT);

        let choices_y = y + question_lines.len() as f32 * LINE_HEIGHT + LINE_HEIGHT / 2.0;
        let choice_lines = canvas.wrap(&self.choices_line, TextStyle::body(), width);
        canvas.draw_lines(
            x,
            choices_y,
            &self.choices_line,
            &choice_lines,
            TextStyle::body(),
            LINE_HEIGHT,
        );

        y + required + LINE_HEIGHT
    }
}
