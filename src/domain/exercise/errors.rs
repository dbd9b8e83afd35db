//! Exercise-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ExerciseId};
use crate::domain::worksheet::{ValidationIssue, ValidationIssues, WorksheetError};

/// Exercise-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseError {
    /// Exercise was not found.
    NotFound(ExerciseId),
    /// Title or items broke a content rule.
    ValidationFailed(Vec<ValidationIssue>),
    /// Printing the exercise failed.
    Rendering(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl ExerciseError {
    pub fn not_found(id: ExerciseId) -> Self {
        ExerciseError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ExerciseError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ExerciseError::NotFound(_) => ErrorCode::ExerciseNotFound,
            ExerciseError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            ExerciseError::Rendering(_) => ErrorCode::InternalError,
            ExerciseError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ExerciseError::NotFound(id) => format!("Exercise not found: {}", id),
            ExerciseError::ValidationFailed(issues) => {
                format!("Validation failed with {} issue(s)", issues.len())
            }
            ExerciseError::Rendering(msg) => format!("PDF rendering failed: {}", msg),
            ExerciseError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ExerciseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ExerciseError {}

impl From<ValidationIssues> for ExerciseError {
    fn from(issues: ValidationIssues) -> Self {
        ExerciseError::ValidationFailed(issues.into_inner())
    }
}

impl From<WorksheetError> for ExerciseError {
    fn from(err: WorksheetError) -> Self {
        match err {
            WorksheetError::ValidationFailed(issues) => issues.into(),
            WorksheetError::Rendering(msg) => ExerciseError::Rendering(msg),
        }
    }
}

impl From<DomainError> for ExerciseError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ExerciseNotFound => match err
                .details
                .get("id")
                .and_then(|id| id.parse::<ExerciseId>().ok())
            {
                Some(id) => ExerciseError::NotFound(id),
                None => ExerciseError::Infrastructure(err.to_string()),
            },
            _ => ExerciseError::Infrastructure(err.to_string()),
        }
    }
}
