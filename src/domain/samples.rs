//! Generated sample content for previews and demos.

use crate::domain::worksheet::{
    DocumentItem, LongQuestion, MultipleChoiceQuestion, Question, Section, WorksheetForm,
};

const SAMPLE_CHOICE_SETS: [[&str; 4]; 4] = [
    ["Apple", "Banana", "Orange", "Grape"],
    ["Red", "Green", "Blue", "Yellow"],
    ["Dog", "Cat", "Bird", "Fish"],
    ["Paris", "London", "New York", "Tokyo"],
];

/// `count` long-answer questions with text long enough to wrap.
pub fn dummy_long_questions(count: usize) -> Vec<Question> {
    (1..=count)
        .map(|n| {
            Question::Long(LongQuestion {
                question_text: format!(
                    "This is the question text for dummy question number {}. \
                     It can be a bit long to see how the text wrapping works.",
                    n
                ),
                answer: format!("Answer {}", n),
            })
        })
        .collect()
}

/// `count` multiple-choice questions cycling through four choice sets; the
/// first choice of each set is the answer.
pub fn dummy_multiple_choice_questions(count: usize) -> Vec<Question> {
    (0..count)
        .map(|i| {
            let choices = SAMPLE_CHOICE_SETS[i % SAMPLE_CHOICE_SETS.len()];
            Question::MultipleChoice(MultipleChoiceQuestion {
                question_text: format!(
                    "This is a multiple choice question, number {}. Please select \
                     the best option. The text can be quite long to test wrapping.",
                    i + 1
                ),
                choices: choices.iter().map(|c| c.to_string()).collect(),
                answer: choices[0].to_string(),
            })
        })
        .collect()
}

/// Two sections and a standalone question exercising every layout path.
pub fn sample_worksheet(answer_mode: bool) -> WorksheetForm {
    let long_section = Section {
        description: "Section 1: Long answer questions".to_string(),
        example_questions: dummy_long_questions(2),
        questions: dummy_long_questions(11),
    };
    let choice_section = Section {
        description: "Section 2: Multiple choice questions".to_string(),
        example_questions: dummy_multiple_choice_questions(1),
        questions: dummy_multiple_choice_questions(8),
    };
    let standalone = dummy_long_questions(1).into_iter().map(DocumentItem::from);

    let items = [long_section, choice_section]
        .into_iter()
        .map(DocumentItem::from)
        .chain(standalone)
        .collect();

    WorksheetForm::new("", items, answer_mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_questions_are_numbered_from_one() {
        let questions = dummy_long_questions(3);
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[2].answer(), "Answer 3");
        assert!(questions[0].question_text().contains("number 1."));
    }

    #[test]
    fn choice_sets_cycle_and_answer_is_first_choice() {
        let questions = dummy_multiple_choice_questions(5);
        match (&questions[0], &questions[4]) {
            (Question::MultipleChoice(first), Question::MultipleChoice(fifth)) => {
                assert_eq!(first.choices, fifth.choices);
                assert_eq!(first.answer, "Apple");
                assert_eq!(first.correct_index(), Some(0));
            }
            other => panic!("unexpected questions {:?}", other),
        }
    }

    #[test]
    fn sample_worksheet_is_valid() {
        let form = sample_worksheet(true);
        assert!(form.is_answer_mode);
        assert_eq!(form.items.len(), 3);
        assert!(form.validate().is_ok());
    }
}
