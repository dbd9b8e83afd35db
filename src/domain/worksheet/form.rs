//! The generate-PDF request payload.

use serde::{Deserialize, Serialize};

use super::item::DocumentItem;
use super::validation::{child_path, IssueCollector, ValidationIssues};

/// A complete worksheet as submitted by the form client.
///
/// # Invariants (checked by [`WorksheetForm::validate`])
///
/// - `items` has at least one entry
/// - every text field of every question and section is non-blank
/// - multiple-choice questions list at least two choices
/// - fill-in questions contain the `<<>>` placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetForm {
    /// Printed at the top of the first page; omitted when blank.
    #[serde(default)]
    pub title: String,

    pub items: Vec<DocumentItem>,

    /// Print answers in the answer colour instead of leaving blanks.
    #[serde(default)]
    pub is_answer_mode: bool,
}

impl WorksheetForm {
    pub fn new(title: impl Into<String>, items: Vec<DocumentItem>, is_answer_mode: bool) -> Self {
        Self {
            title: title.into(),
            items,
            is_answer_mode,
        }
    }

    /// Checks every item and reports all issues found.
    pub fn validate(&self) -> Result<(), ValidationIssues> {
        let mut issues = IssueCollector::new();
        collect_item_issues(&self.items, &mut issues);
        issues.finish()
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Item-list rules shared by forms and stored exercises.
pub(crate) fn collect_item_issues(items: &[DocumentItem], issues: &mut IssueCollector) {
    if items.is_empty() {
        issues.push_message("items".to_string(), "At least 1 item is required");
    }
    for (index, item) in items.iter().enumerate() {
        item.collect_issues(&child_path("items", index), issues);
    }
}
