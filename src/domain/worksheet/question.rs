//! Question variants that make up a worksheet.
//!
//! The JSON shape matches the form and admin clients: each question carries a
//! `type` tag (`LongQuestion`, `Fill`, `MultipleChoices`) and camelCase fields.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::domain::foundation::ValidationError;

use super::validation::{child_path, IssueCollector};

/// Marker in a fill-in question's text where the blank goes.
pub const FILL_PLACEHOLDER: &str = "<<>>";

/// What a blank looks like on the student sheet.
pub const BLANK: &str = "(    )";

/// A question that is answered in free text below the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongQuestion {
    pub question_text: String,
    pub answer: String,
}

/// A sentence with one or more `<<>>` blanks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillQuestion {
    pub question_text: String,
    pub answer: String,
}

/// A question with numbered choices and a single correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceQuestion {
    pub question_text: String,
    pub choices: Vec<String>,
    pub answer: String,
}

/// Any question that can appear on its own or inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Question {
    #[serde(rename = "LongQuestion")]
    Long(LongQuestion),
    #[serde(rename = "Fill")]
    Fill(FillQuestion),
    #[serde(rename = "MultipleChoices")]
    MultipleChoice(MultipleChoiceQuestion),
}

/// Fill-in text with blanks resolved, plus where the answers landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledText {
    pub text: String,
    /// Byte ranges of substituted answers; empty on the student sheet.
    pub answer_spans: Vec<Range<usize>>,
}

impl FillQuestion {
    /// Resolves every blank to the answer (answer key) or to [`BLANK`].
    pub fn display(&self, answer_mode: bool) -> FilledText {
        let mut text = String::with_capacity(self.question_text.len() + self.answer.len());
        let mut answer_spans = Vec::new();

        let mut pieces = self.question_text.split(FILL_PLACEHOLDER).peekable();
        while let Some(piece) = pieces.next() {
            text.push_str(piece);
            if pieces.peek().is_none() {
                break;
            }
            if answer_mode {
                let start = text.len();
                text.push_str(&self.answer);
                answer_spans.push(start..text.len());
            } else {
                text.push_str(BLANK);
            }
        }

        FilledText { text, answer_spans }
    }

    pub fn has_placeholder(&self) -> bool {
        self.question_text.contains(FILL_PLACEHOLDER)
    }
}

impl MultipleChoiceQuestion {
    /// Index of the choice that matches the answer exactly, if any.
    pub fn correct_index(&self) -> Option<usize> {
        self.choices.iter().position(|choice| *choice == self.answer)
    }
}

impl Question {
    pub fn question_text(&self) -> &str {
        match self {
            Question::Long(q) => &q.question_text,
            Question::Fill(q) => &q.question_text,
            Question::MultipleChoice(q) => &q.question_text,
        }
    }

    pub fn answer(&self) -> &str {
        match self {
            Question::Long(q) => &q.answer,
            Question::Fill(q) => &q.answer,
            Question::MultipleChoice(q) => &q.answer,
        }
    }

    /// Prompt as printed: fill blanks resolved, other kinds unchanged.
    pub fn display_text(&self, answer_mode: bool) -> String {
        match self {
            Question::Fill(q) => q.display(answer_mode).text,
            other => other.question_text().to_string(),
        }
    }

    pub(crate) fn collect_issues(&self, path: &str, issues: &mut IssueCollector) {
        issues.require_text(
            child_path(path, "questionText"),
            "questionText",
            self.question_text(),
        );
        issues.require_text(child_path(path, "answer"), "answer", self.answer());

        match self {
            Question::Long(_) => {}
            Question::Fill(q) => {
                if !q.question_text.trim().is_empty() && !q.has_placeholder() {
                    issues.push(
                        child_path(path, "questionText"),
                        ValidationError::invalid_format(
                            "questionText",
                            format!("must include \"{}\" as a placeholder", FILL_PLACEHOLDER),
                        ),
                    );
                }
            }
            Question::MultipleChoice(q) => {
                let choices_path = child_path(path, "choices");
                if q.choices.len() < 2 {
                    issues.push_message(choices_path.clone(), "At least 2 choices are required");
                }
                for (index, choice) in q.choices.iter().enumerate() {
                    issues.require_text(child_path(&choices_path, index), "choice", choice);
                }
            }
        }
    }
}
