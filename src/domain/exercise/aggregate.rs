//! Exercise aggregate entity.
//!
//! Exercises are reusable worksheets kept in the content store. Each one has
//! a title and an ordered list of items, and can be printed as a question
//! sheet or as an answer key.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExerciseId, Timestamp, ValidationError};
use crate::domain::worksheet::{
    child_path, collect_item_issues, DocumentItem, IssueCollector, ValidationIssues, WorksheetForm,
};

/// Longest title the content store accepts, in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Exercise aggregate - a stored, titled worksheet.
///
/// # Invariants
///
/// - `title` is non-blank and at most [`MAX_TITLE_LENGTH`] characters
/// - `items` satisfies every worksheet content rule
/// - every section has at least one required question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    id: ExerciseId,
    title: String,
    items: Vec<DocumentItem>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Exercise {
    /// Create a new exercise.
    ///
    /// # Errors
    ///
    /// Returns every content rule the title and items break.
    pub fn new(
        id: ExerciseId,
        title: String,
        items: Vec<DocumentItem>,
    ) -> Result<Self, ValidationIssues> {
        Self::validate(&title, &items)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            title,
            items,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute an exercise from persistence (no validation).
    pub fn reconstitute(
        id: ExerciseId,
        title: String,
        items: Vec<DocumentItem>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            items,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[DocumentItem] {
        &self.items
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace title and items.
    ///
    /// # Errors
    ///
    /// Leaves the exercise untouched and returns the issues when the new
    /// content is invalid.
    pub fn update(
        &mut self,
        title: String,
        items: Vec<DocumentItem>,
    ) -> Result<(), ValidationIssues> {
        Self::validate(&title, &items)?;

        self.title = title;
        self.items = items;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// The worksheet payload used for printing.
    pub fn to_form(&self, answer_mode: bool) -> WorksheetForm {
        WorksheetForm::new(self.title.clone(), self.items.clone(), answer_mode)
    }

    fn validate(title: &str, items: &[DocumentItem]) -> Result<(), ValidationIssues> {
        let mut issues = IssueCollector::new();
        if title.trim().is_empty() {
            issues.push("title".to_string(), ValidationError::empty_field("title"));
        } else if title.chars().count() > MAX_TITLE_LENGTH {
            issues.push(
                "title".to_string(),
                ValidationError::invalid_format(
                    "title",
                    format!("must be at most {} characters", MAX_TITLE_LENGTH),
                ),
            );
        }

        collect_item_issues(items, &mut issues);

        for (index, item) in items.iter().enumerate() {
            if let DocumentItem::Section(section) = item {
                if section.questions.is_empty() {
                    issues.push_message(
                        child_path(&child_path("items", index), "questions"),
                        "A section needs at least 1 question",
                    );
                }
            }
        }

        issues.finish()
    }
}
