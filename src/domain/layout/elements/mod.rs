//! Page elements: one per kind of block that can appear on a worksheet.
//!
//! Every element knows how tall it is before drawing, which is what the
//! pagination check uses, and returns the cursor position after itself.

mod fill_question;
mod heading;
mod long_question;
mod multiple_choice;
mod section;
mod title;

pub use fill_question::FillQuestionElement;
pub use heading::HeadingElement;
pub use long_question::LongQuestionElement;
pub use multiple_choice::MultipleChoiceElement;
pub use section::SectionElement;
pub use title::TitleElement;

use super::canvas::LayoutCanvas;
use super::metrics::{PAGE_MARGIN, QUESTION_NUMBER_WIDTH};
use super::shuffle::ChoiceShuffler;
use super::style::TextStyle;
use crate::domain::worksheet::Question;

/// A block that can be measured and drawn.
pub trait PageElement {
    /// Vertical space the block needs, in millimetres.
    fn required_height(&self, canvas: &LayoutCanvas<'_>) -> f32;

    /// Draws the block with its first baseline at `y` (moving to a new page
    /// first if it does not fit) and returns the cursor after it.
    fn render(&self, canvas: &mut LayoutCanvas<'_>, y: f32) -> f32;
}

/// Numbering and answer visibility shared by all question elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFrame {
    number: Option<String>,
    answer_mode: bool,
}

impl QuestionFrame {
    pub fn unnumbered(answer_mode: bool) -> Self {
        Self {
            number: None,
            answer_mode,
        }
    }

    /// Numbered `1.`, `2.`, ... from a zero-based position.
    pub fn numbered(index: usize, answer_mode: bool) -> Self {
        Self {
            number: Some(format!("{}.", index + 1)),
            answer_mode,
        }
    }

    pub fn answer_mode(&self) -> bool {
        self.answer_mode
    }

    fn number_width(&self) -> f32 {
        if self.number.is_some() {
            QUESTION_NUMBER_WIDTH
        } else {
            0.0
        }
    }

    /// Left edge of the question text.
    fn text_x(&self) -> f32 {
        PAGE_MARGIN + self.number_width()
    }

    /// Width left for question text after the number column.
    fn text_width(&self, canvas: &LayoutCanvas<'_>) -> f32 {
        canvas.page_size().content_width() - self.number_width()
    }

    fn draw_number(&self, canvas: &mut LayoutCanvas<'_>, y: f32) {
        if let Some(number) = &self.number {
            canvas.draw_text(PAGE_MARGIN, y, number.as_str(), TextStyle::body());
        }
    }
}

/// Builds the element for any question variant.
pub fn question_element<'a>(
    question: &'a Question,
    frame: QuestionFrame,
    shuffler: &mut ChoiceShuffler,
) -> Box<dyn PageElement + 'a> {
    match question {
        Question::Long(q) => Box::new(LongQuestionElement::new(q, frame)),
        Question::Fill(q) => Box::new(FillQuestionElement::new(q, frame)),
        Question::MultipleChoice(q) => {
            Box::new(MultipleChoiceElement::new(q, frame, shuffler.order(q.choices.len())))
        }
    }
}
