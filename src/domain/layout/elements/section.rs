//! Section: a description, worked examples and numbered questions.

use super::{question_element, HeadingElement, PageElement, QuestionFrame};
use crate::domain::layout::canvas::LayoutCanvas;
use crate::domain::layout::metrics::LINE_HEIGHT;
use crate::domain::layout::shuffle::ChoiceShuffler;
use crate::domain::layout::SectionLabels;
use crate::domain::worksheet::{Question, Section};

/// A heading followed by its numbered questions.
struct QuestionGroup<'a> {
    heading: HeadingElement,
    questions: Vec<Box<dyn PageElement + 'a>>,
}

impl<'a> QuestionGroup<'a> {
    fn build(
        label: &str,
        questions: &'a [Question],
        answer_mode: bool,
        shuffler: &mut ChoiceShuffler,
    ) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        let questions = questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                question_element(question, QuestionFrame::numbered(index, answer_mode), shuffler)
            })
            .collect();
        Some(Self {
            heading: HeadingElement::new(label),
            questions,
        })
    }

    /// Heading plus the first question, which must share a page.
    fn lead_height(&self, canvas: &LayoutCanvas<'_>) -> f32 {
        self.heading.required_height(canvas)
            + self
                .questions
                .first()
                .map_or(0.0, |question| question.required_height(canvas))
    }

    fn total_height(&self, canvas: &LayoutCanvas<'_>) -> f32 {
        self.heading.required_height(canvas)
            + self
                .questions
                .iter()
                .map(|question| question.required_height(canvas))
                .sum::<f32>()
    }

    fn render(&self, canvas: &mut LayoutCanvas<'_>, y: f32) -> f32 {
        let lead = self.lead_height(canvas);
        let mut y = canvas.break_if_needed(y, lead);
        y = self.heading.render(canvas, y);
        for question in &self.questions {
            y = question.render(canvas, y);
        }
        y
    }
}

pub struct SectionElement<'a> {
    description: HeadingElement,
    examples: Option<QuestionGroup<'a>>,
    questions: Option<QuestionGroup<'a>>,
}

impl<'a> SectionElement<'a> {
    /// Examples are always shown with their answers; the questions follow
    /// `answer_mode`.
    pub fn new(
        section: &'a Section,
        answer_mode: bool,
        labels: &SectionLabels,
        shuffler: &mut ChoiceShuffler,
    ) -> Self {
        Self {
            description: HeadingElement::new(section.description.as_str()),
            examples: QuestionGroup::build(&labels.examples, &section.example_questions, true, shuffler),
            questions: QuestionGroup::build(&labels.questions, &section.questions, answer_mode, shuffler),
        }
    }
}

impl PageElement for SectionElement<'_> {
    /// Height of the part that must start on one page: the description, all
    /// examples, and the questions heading with the first question.
    fn required_height(&self, canvas: &LayoutCanvas<'_>) -> f32 {
        self.description.required_height(canvas)
            + self
                .examples
                .as_ref()
                .map_or(0.0, |group| group.total_height(canvas))
            + self
                .questions
                .as_ref()
                .map_or(0.0, |group| group.lead_height(canvas))
    }

    fn render(&self, canvas: &mut LayoutCanvas<'_>, y: f32) -> f32 {
        let required = self.required_height(canvas);
        let mut y = canvas.break_if_needed(y, required);
        y = self.description.render(canvas, y);
        for group in self.examples.iter().chain(self.questions.iter()) {
            y = group.render(canvas, y);
        }
        y + LINE_HEIGHT
    }
}
