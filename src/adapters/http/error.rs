//! Error responses shared by every HTTP adapter.
//!
//! Bodies are always `{"error": message}` with an optional `details`
//! payload (validation issues for 400 responses).

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::exercise::ExerciseError;
use crate::domain::worksheet::{ValidationIssue, WorksheetError};
use crate::ports::RenderedPdf;

pub const INVALID_REQUEST: &str = "Invalid request data";
pub const PDF_FAILED: &str = "Failed to generate PDF";

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest {
        message: String,
        details: Option<Value>,
    },
    NotFound(String),
    PdfFailed(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            details: None,
        }
    }

    /// 400 carrying the full issue list.
    pub fn invalid(issues: &[ValidationIssue]) -> Self {
        ApiError::BadRequest {
            message: INVALID_REQUEST.to_string(),
            details: serde_json::to_value(issues).ok(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PdfFailed(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: INVALID_REQUEST.to_string(),
            details: Some(json!([{ "path": "", "message": rejection.body_text() }])),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest {
            message: INVALID_REQUEST.to_string(),
            details: Some(json!([{ "path": "query", "message": rejection.body_text() }])),
        }
    }
}

impl From<WorksheetError> for ApiError {
    fn from(err: WorksheetError) -> Self {
        match err {
            WorksheetError::ValidationFailed(issues) => ApiError::invalid(issues.issues()),
            WorksheetError::Rendering(msg) => ApiError::PdfFailed(msg),
        }
    }
}

impl From<ExerciseError> for ApiError {
    fn from(err: ExerciseError) -> Self {
        match err {
            ExerciseError::NotFound(id) => ApiError::NotFound(format!("Exercise not found: {}", id)),
            ExerciseError::ValidationFailed(issues) => ApiError::invalid(&issues),
            ExerciseError::Rendering(msg) => ApiError::PdfFailed(msg),
            ExerciseError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest { message, details } => {
                let body = ErrorResponse::new(message);
                match details {
                    Some(details) => body.with_details(details),
                    None => body,
                }
            }
            ApiError::NotFound(msg) => ErrorResponse::new(msg),
            ApiError::PdfFailed(reason) => {
                tracing::error!(error = %reason, "PDF generation failed");
                ErrorResponse::new(PDF_FAILED)
            }
            ApiError::Internal(reason) => {
                tracing::error!(error = %reason, "Request failed");
                ErrorResponse::new("Internal server error")
            }
        };

        (status, Json(body)).into_response()
    }
}

/// 200 response carrying a PDF download.
pub fn pdf_response(pdf: RenderedPdf) -> Response {
    let disposition = pdf.content_disposition();
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, RenderedPdf::CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf.content,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ExerciseId;

    #[test]
    fn validation_failure_maps_to_400_with_details() {
        let err: ApiError = ExerciseError::ValidationFailed(vec![ValidationIssue::new(
            "items",
            "At least 1 item is required",
        )])
        .into();
        match &err {
            ApiError::BadRequest { message, details } => {
                assert_eq!(message, INVALID_REQUEST);
                let details = details.as_ref().expect("details present");
                assert_eq!(details[0]["path"], "items");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::from(ExerciseError::NotFound(ExerciseId::new())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn rendering_failure_maps_to_500() {
        let response = ApiError::from(WorksheetError::rendering("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_omits_missing_details() {
        let body = serde_json::to_value(ErrorResponse::new(PDF_FAILED)).unwrap();
        assert_eq!(body, json!({ "error": "Failed to generate PDF" }));
    }

    #[test]
    fn pdf_response_sets_download_headers() {
        let response = pdf_response(RenderedPdf::new(b"%PDF-1.3".to_vec()));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            RenderedPdf::CONTENT_TYPE
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=output.pdf"
        );
    }
}
