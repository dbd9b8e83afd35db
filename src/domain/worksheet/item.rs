//! Top-level worksheet items: standalone questions and sections.

use serde::{Deserialize, Serialize};

use super::question::{FillQuestion, LongQuestion, MultipleChoiceQuestion, Question};
use super::validation::{child_path, IssueCollector};

/// A group of questions introduced by a description, with optional worked
/// examples that are always printed with their answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub description: String,
    #[serde(default)]
    pub example_questions: Vec<Question>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Section {
    pub(crate) fn collect_issues(&self, path: &str, issues: &mut IssueCollector) {
        issues.require_text(
            child_path(path, "description"),
            "description",
            &self.description,
        );

        let examples_path = child_path(path, "exampleQuestions");
        for (index, question) in self.example_questions.iter().enumerate() {
            question.collect_issues(&child_path(&examples_path, index), issues);
        }

        let questions_path = child_path(path, "questions");
        for (index, question) in self.questions.iter().enumerate() {
            question.collect_issues(&child_path(&questions_path, index), issues);
        }
    }
}

/// One entry in a worksheet's item list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRepr", into = "ItemRepr")]
pub enum DocumentItem {
    Question(Question),
    Section(Section),
}

impl DocumentItem {
    pub(crate) fn collect_issues(&self, path: &str, issues: &mut IssueCollector) {
        match self {
            DocumentItem::Question(question) => question.collect_issues(path, issues),
            DocumentItem::Section(section) => section.collect_issues(path, issues),
        }
    }

    /// Number of questions this item prints, examples included.
    pub fn question_count(&self) -> usize {
        match self {
            DocumentItem::Question(_) => 1,
            DocumentItem::Section(section) => {
                section.example_questions.len() + section.questions.len()
            }
        }
    }
}

impl From<Question> for DocumentItem {
    fn from(question: Question) -> Self {
        DocumentItem::Question(question)
    }
}

impl From<Section> for DocumentItem {
    fn from(section: Section) -> Self {
        DocumentItem::Section(section)
    }
}

/// Flat wire shape: questions and sections share one `type` discriminator.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum ItemRepr {
    #[serde(rename = "LongQuestion")]
    Long(LongQuestion),
    #[serde(rename = "Fill")]
    Fill(FillQuestion),
    #[serde(rename = "MultipleChoices")]
    MultipleChoice(MultipleChoiceQuestion),
    #[serde(rename = "section")]
    Section(Section),
}

impl From<ItemRepr> for DocumentItem {
    fn from(repr: ItemRepr) -> Self {
        match repr {
            ItemRepr::Long(q) => DocumentItem::Question(Question::Long(q)),
            ItemRepr::Fill(q) => DocumentItem::Question(Question::Fill(q)),
            ItemRepr::MultipleChoice(q) => DocumentItem::Question(Question::MultipleChoice(q)),
            ItemRepr::Section(s) => DocumentItem::Section(s),
        }
    }
}

impl From<DocumentItem> for ItemRepr {
    fn from(item: DocumentItem) -> Self {
        match item {
            DocumentItem::Question(Question::Long(q)) => ItemRepr::Long(q),
            DocumentItem::Question(Question::Fill(q)) => ItemRepr::Fill(q),
            DocumentItem::Question(Question::MultipleChoice(q)) => ItemRepr::MultipleChoice(q),
            DocumentItem::Section(s) => ItemRepr::Section(s),
        }
    }
}
