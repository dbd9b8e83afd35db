//! Validation issues collected while checking worksheet content.
//!
//! Worksheet validation reports every problem at once, each tagged with the
//! dotted path of the offending field (`items.2.choices.0`), so form clients
//! can attach messages next to the right input.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One problem found in worksheet content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Builds an issue from a foundation validation error.
    pub fn from_error(path: impl Into<String>, error: ValidationError) -> Self {
        Self::new(path, error.to_string())
    }
}

/// Non-empty list of validation issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationIssues(Vec<ValidationIssue>);

impl ValidationIssues {
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<ValidationIssue> {
        self.0
    }

    /// True when some issue is reported at exactly `path`.
    pub fn has_path(&self, path: &str) -> bool {
        self.0.iter().any(|issue| issue.path == path)
    }
}

impl fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.first() {
            Some(first) if self.0.len() == 1 => write!(f, "{}: {}", first.path, first.message),
            Some(first) => write!(
                f,
                "{}: {} (and {} more)",
                first.path,
                first.message,
                self.0.len() - 1
            ),
            None => write!(f, "no issues"),
        }
    }
}

/// Accumulates issues under a path prefix.
#[derive(Debug, Default)]
pub(crate) struct IssueCollector {
    issues: Vec<ValidationIssue>,
}

impl IssueCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, path: String, error: ValidationError) {
        self.issues.push(ValidationIssue::from_error(path, error));
    }

    pub(crate) fn push_message(&mut self, path: String, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(path, message));
    }

    /// Records an empty-field issue when `value` is blank.
    pub(crate) fn require_text(&mut self, path: String, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(path, ValidationError::empty_field(field));
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationIssues> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationIssues(self.issues))
        }
    }
}

/// Joins a parent path and a child segment.
pub(crate) fn child_path(parent: &str, segment: impl fmt::Display) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", parent, segment)
    }
}
