//! Worksheet-specific error types.

use super::validation::ValidationIssues;
use crate::domain::foundation::ErrorCode;

/// Errors raised while turning a worksheet into a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorksheetError {
    /// The submitted worksheet broke one or more content rules.
    ValidationFailed(ValidationIssues),
    /// The PDF backend failed.
    Rendering(String),
}

impl WorksheetError {
    pub fn rendering(message: impl Into<String>) -> Self {
        WorksheetError::Rendering(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WorksheetError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            WorksheetError::Rendering(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            WorksheetError::ValidationFailed(issues) => format!("Invalid worksheet: {}", issues),
            WorksheetError::Rendering(msg) => format!("PDF rendering failed: {}", msg),
        }
    }
}

impl std::fmt::Display for WorksheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for WorksheetError {}

impl From<ValidationIssues> for WorksheetError {
    fn from(issues: ValidationIssues) -> Self {
        WorksheetError::ValidationFailed(issues)
    }
}
