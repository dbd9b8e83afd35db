//! Turns a worksheet form into a paginated [`LayoutPlan`].

use serde::{Deserialize, Serialize};

use super::canvas::{LayoutCanvas, LayoutPlan};
use super::elements::{question_element, PageElement, QuestionFrame, SectionElement, TitleElement};
use super::metrics::{PageSize, PAGE_MARGIN};
use super::shuffle::{ChoiceOrder, ChoiceShuffler};
use crate::domain::worksheet::{DocumentItem, WorksheetForm};
use crate::ports::TextMeasurer;

/// Headings printed above a section's examples and questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLabels {
    pub examples: String,
    pub questions: String,
}

impl Default for SectionLabels {
    fn default() -> Self {
        Self {
            examples: "Examples:".to_string(),
            questions: "Questions:".to_string(),
        }
    }
}

/// Layout settings that do not come from the form itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    pub page_size: PageSize,
    pub choice_order: ChoiceOrder,
    pub labels: SectionLabels,
}

/// Lays out every item of `form` top to bottom, starting new pages as needed.
///
/// The form is expected to be valid; an empty item list yields a single
/// page holding only the title (if any).
pub fn layout_worksheet(
    form: &WorksheetForm,
    options: &LayoutOptions,
    measurer: &dyn TextMeasurer,
) -> LayoutPlan {
    let mut canvas = LayoutCanvas::new(measurer, options.page_size);
    let mut shuffler = ChoiceShuffler::new(options.choice_order);
    let mut y = PAGE_MARGIN;

    if form.has_title() {
        y = TitleElement::new(&form.title).render(&mut canvas, y);
    }

    for item in &form.items {
        let element = item_element(item, form.is_answer_mode, options, &mut shuffler);
        y = element.render(&mut canvas, y);
    }

    let plan = canvas.finish();
    tracing::debug!(
        pages = plan.page_count(),
        items = form.items.len(),
        answer_mode = form.is_answer_mode,
        "Worksheet laid out"
    );
    plan
}

fn item_element<'a>(
    item: &'a DocumentItem,
    answer_mode: bool,
    options: &LayoutOptions,
    shuffler: &mut ChoiceShuffler,
) -> Box<dyn PageElement + 'a> {
    match item {
        DocumentItem::Question(question) => {
            question_element(question, QuestionFrame::unnumbered(answer_mode), shuffler)
        }
        DocumentItem::Section(section) => Box::new(SectionElement::new(
            section,
            answer_mode,
            &options.labels,
            shuffler,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::{DrawOp, FontWeight, Rgb, LINE_HEIGHT, QUESTION_NUMBER_WIDTH};
    use crate::domain::worksheet::{
        FillQuestion, LongQuestion, MultipleChoiceQuestion, Question, Section,
    };

    /// Every character is 2mm wide.
    struct FixedWidth;

    impl TextMeasurer for FixedWidth {
        fn text_width(&self, text: &str, _size: f32, _weight: FontWeight) -> f32 {
            text.chars().count() as f32 * 2.0
        }
    }

    fn options() -> LayoutOptions {
        LayoutOptions {
            choice_order: ChoiceOrder::AsWritten,
            ..LayoutOptions::default()
        }
    }

    fn long(text: &str, answer: &str) -> Question {
        Question::Long(LongQuestion {
            question_text: text.to_string(),
            answer: answer.to_string(),
        })
    }

    fn choice(text: &str, choices: &[&str], answer: &str) -> Question {
        Question::MultipleChoice(MultipleChoiceQuestion {
            question_text: text.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            answer: answer.to_string(),
        })
    }

    fn layout(form: &WorksheetForm) -> LayoutPlan {
        layout_worksheet(form, &options(), &FixedWidth)
    }

    fn text_ops(plan: &LayoutPlan) -> Vec<TextOp> {
        plan.pages
            .iter()
            .flat_map(|page| page.ops.iter())
            .filter_map(|op| match op {
                DrawOp::Text { x, y, text, style } => Some((text.clone(), *x, *y, style.color)),
                DrawOp::Rule { .. } => None,
            })
            .collect()
    }

    type TextOp = (String, f32, f32, Rgb);

    fn find<'p>(ops: &'p [TextOp], text: &str) -> Option<&'p TextOp> {
        ops.iter().find(|(t, ..)| t == text)
    }

    #[test]
    fn title_is_drawn_bold_at_top_margin() {
        let form = WorksheetForm::new("Unit 1", vec![long("Q", "A").into()], false);
        let plan = layout(&form);

        match &plan.pages[0].ops[0] {
            DrawOp::Text { text, y, style, .. } => {
                assert_eq!(text, "Unit 1");
                assert_eq!(*y, PAGE_MARGIN);
                assert_eq!(style.weight, FontWeight::Bold);
                assert_eq!(style.size, 18.0);
            }
            other => panic!("expected title text, got {:?}", other),
        }
    }

    #[test]
    fn empty_title_is_skipped() {
        let form = WorksheetForm::new("", vec![long("First", "A").into()], false);
        let ops = text_ops(&layout(&form));
        assert_eq!(ops[0].0, "First");
        assert_eq!(ops[0].2, PAGE_MARGIN);
    }

    #[test]
    fn long_question_answer_only_in_answer_mode() {
        let question = long("Explain gravity", "Mass attracts mass");
        let student = text_ops(&layout(&WorksheetForm::new("", vec![question.clone().into()], false)));
        assert!(find(&student, "Mass attracts mass").is_none());

        let key = text_ops(&layout(&WorksheetForm::new("", vec![question.into()], true)));
        let (_, _, y, color) = find(&key, "Mass attracts mass").expect("answer drawn");
        assert_eq!(*color, Rgb::ANSWER);
        assert_eq!(*y, PAGE_MARGIN + LINE_HEIGHT * 1.5);
    }

    #[test]
    fn long_question_draws_rule_under_answer_line() {
        let form = WorksheetForm::new("", vec![long("Q", "A").into()], false);
        let plan = layout(&form);
        let rule = plan.pages[0]
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Rule { x1, y1, x2, .. } => Some((*x1, *y1, *x2)),
                DrawOp::Text { .. } => None,
            })
            .expect("rule drawn");
        assert_eq!(rule, (PAGE_MARGIN, PAGE_MARGIN + LINE_HEIGHT * 1.5 + 2.0, 190.0));
    }

    #[test]
    fn fill_question_shows_blank_or_red_answer() {
        let fill = Question::Fill(FillQuestion {
            question_text: "The capital is <<>>.".to_string(),
            answer: "Paris".to_string(),
        });

        let student = text_ops(&layout(&WorksheetForm::new("", vec![fill.clone().into()], false)));
        assert_eq!(student[0].0, "The capital is (    ).");

        let key = text_ops(&layout(&WorksheetForm::new("", vec![fill.into()], true)));
        let (_, x, _, color) = find(&key, "Paris").expect("answer segment");
        assert_eq!(*color, Rgb::ANSWER);
        assert_eq!(*x, PAGE_MARGIN + "The capital is ".len() as f32 * 2.0);
        assert_eq!(find(&key, ".").map(|op| op.3), Some(Rgb::BLACK));
    }

    #[test]
    fn multiple_choice_numbers_choices_and_marks_answer() {
        let question = choice("Pick one", &["red", "green"], "green");
        let ops = text_ops(&layout(&WorksheetForm::new("", vec![question.into()], true)));

        assert!(find(&ops, "1. red   2. green").is_some());
        assert!(find(&ops, "Ans:").is_some());
        let (_, _, _, color) = find(&ops, "2. green").expect("answer drawn");
        assert_eq!(*color, Rgb::ANSWER);
    }

    #[test]
    fn multiple_choice_without_matching_answer_leaves_column_blank() {
        let question = choice("Pick one", &["red", "green"], "blue");
        let ops = text_ops(&layout(&WorksheetForm::new("", vec![question.into()], true)));
        assert!(ops.iter().all(|(_, _, _, color)| *color == Rgb::BLACK));
    }

    #[test]
    fn section_numbers_questions_and_answers_examples() {
        let section = Section {
            description: "Answer the following".to_string(),
            example_questions: vec![long("Example", "Shown answer")],
            questions: vec![long("First", "Hidden"), long("Second", "Hidden too")],
        };
        let ops = text_ops(&layout(&WorksheetForm::new("", vec![section.into()], false)));
        let texts: Vec<&str> = ops.iter().map(|(t, ..)| t.as_str()).collect();

        assert_eq!(
            texts,
            vec![
                "Answer the following",
                "Examples:",
                "1.",
                "Example",
                "Shown answer",
                "Questions:",
                "1.",
                "First",
                "2.",
                "Second",
            ]
        );
        let (_, x, ..) = find(&ops, "First").expect("question drawn");
        assert_eq!(*x, PAGE_MARGIN + QUESTION_NUMBER_WIDTH);
    }

    #[test]
    fn section_labels_are_configurable() {
        let section = Section {
            description: "D".to_string(),
            example_questions: vec![],
            questions: vec![long("Q", "A")],
        };
        let options = LayoutOptions {
            labels: SectionLabels {
                examples: "例題:".to_string(),
                questions: "問題:".to_string(),
            },
            ..options()
        };
        let form = WorksheetForm::new("", vec![section.into()], false);
        let plan = layout_worksheet(&form, &options, &FixedWidth);
        let texts: Vec<&str> = plan.texts().map(|(_, t)| t).collect();
        assert_eq!(texts, vec!["D", "問題:", "1.", "Q"]);
    }

    #[test]
    fn long_worksheets_paginate_within_margins() {
        let items = (0..40)
            .map(|i| long(&format!("Question {}", i), "A").into())
            .collect();
        let plan = layout(&WorksheetForm::new("Title", items, false));

        assert!(plan.page_count() > 1);
        let bottom = plan.page_size.bottom_limit();
        for (text, _, y, _) in text_ops(&plan) {
            assert!(y <= bottom, "{} drawn at {} below {}", text, y, bottom);
        }
        let last_page = plan
            .texts()
            .find(|(_, t)| *t == "Question 39")
            .map(|(page, _)| page);
        assert_eq!(last_page, Some(plan.page_count() - 1));
    }

    #[test]
    fn section_moves_to_next_page_with_its_first_question() {
        // Nine long questions end at 240.5mm; the section lead needs 45.5mm.
        let mut items: Vec<DocumentItem> = (0..9)
            .map(|i| long(&format!("Filler {}", i), "A").into())
            .collect();
        items.push(
            Section {
                description: "Section".to_string(),
                example_questions: vec![],
                questions: vec![long("Q1", "A"), long("Q2", "A")],
            }
            .into(),
        );
        let plan = layout(&WorksheetForm::new("", items, false));
        let page_of = |text: &str| {
            plan.texts()
                .find(|(_, t)| *t == text)
                .map(|(page, _)| page)
        };
        assert_eq!(page_of("Filler 8"), Some(0));
        assert_eq!(page_of("Section"), Some(1));
        assert_eq!(page_of("Questions:"), Some(1));
        assert_eq!(page_of("Q1"), Some(1));
    }

    #[test]
    fn wrapped_answer_pushes_rule_below_last_line() {
        let answer = vec!["answer"; 40].join(" ");
        let plan = layout(&WorksheetForm::new("", vec![long("Q", &answer).into()], true));
        let ops = text_ops(&plan);

        let answer_lines: Vec<&TextOp> = ops.iter().filter(|op| op.3 == Rgb::ANSWER).collect();
        let n = answer_lines.len();
        assert!(n >= 3, "expected the answer to wrap, got {} lines", n);
        for (index, (_, x, y, _)) in answer_lines.iter().enumerate() {
            assert_eq!(*x, PAGE_MARGIN);
            assert_eq!(*y, PAGE_MARGIN + LINE_HEIGHT * 1.5 + index as f32 * LINE_HEIGHT);
        }

        let rule_y = plan.pages[0]
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Rule { y1, .. } => Some(*y1),
                DrawOp::Text { .. } => None,
            })
            .expect("rule drawn");
        assert_eq!(
            rule_y,
            PAGE_MARGIN + LINE_HEIGHT * 1.5 + (n - 1) as f32 * LINE_HEIGHT + 2.0
        );
    }

    #[test]
    fn questions_heading_follows_first_question_to_next_page() {
        // Description and "Examples:" end at 41mm; nine examples end at 261.5mm,
        // leaving room for the heading alone but not the heading plus Q1.
        let section = Section {
            description: "Section".to_string(),
            example_questions: (0..9).map(|i| long(&format!("Example {}", i), "A")).collect(),
            questions: vec![long("Q1", "A"), long("Q2", "A")],
        };
        let plan = layout(&WorksheetForm::new("", vec![section.into()], false));
        let page_of = |text: &str| {
            plan.texts()
                .find(|(_, t)| *t == text)
                .map(|(page, _)| page)
        };

        assert_eq!(page_of("Section"), Some(0));
        assert_eq!(page_of("Example 8"), Some(0));
        assert_eq!(page_of("Questions:"), Some(1));
        assert_eq!(page_of("Q1"), Some(1));
        assert_eq!(plan.page_count(), 2);

        let heading_y = text_ops(&plan)
            .into_iter()
            .find(|(t, ..)| t == "Questions:")
            .map(|(_, _, y, _)| y);
        assert_eq!(heading_y, Some(PAGE_MARGIN));
    }

    #[test]
    fn oversized_block_starts_a_fresh_page_and_overflows() {
        let huge = vec!["lorem"; 800].join(" ");
        let items: Vec<DocumentItem> = vec![long("Filler", "A").into(), long(&huge, "A").into()];
        let plan = layout(&WorksheetForm::new("", items, false));

        assert_eq!(plan.page_count(), 2);
        assert_eq!(plan.pages[0].texts().collect::<Vec<_>>(), vec!["Filler"]);
        let overflow = text_ops(&plan)
            .into_iter()
            .filter(|(t, ..)| t.starts_with("lorem"))
            .map(|(_, _, y, _)| y)
            .fold(0.0_f32, f32::max);
        assert!(overflow > plan.page_size.bottom_limit());
    }

    #[test]
    fn oversized_first_block_stays_on_first_page() {
        let huge = vec!["lorem"; 800].join(" ");
        let plan = layout(&WorksheetForm::new("", vec![long(&huge, "A").into()], false));
        assert_eq!(plan.page_count(), 1);
    }

    #[test]
    fn seeded_layouts_are_identical() {
        let items: Vec<DocumentItem> = (0..5)
            .map(|i| choice(&format!("Q{}", i), &["a", "b", "c", "d"], "a").into())
            .collect();
        let form = WorksheetForm::new("", items, true);
        let options = LayoutOptions {
            choice_order: ChoiceOrder::Seeded(42),
            ..LayoutOptions::default()
        };
        let first = layout_worksheet(&form, &options, &FixedWidth);
        let second = layout_worksheet(&form, &options, &FixedWidth);
        assert_eq!(first, second);
    }
}
