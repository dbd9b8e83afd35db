//! Route configuration for PDF generation endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{exercise_pdf, generate_pdf, sample_pdf, WorksheetHandlers};

/// Creates the PDF router.
///
/// Routes:
/// - `POST /api/generate-pdf` - Render a submitted worksheet
/// - `GET /api/generate-pdf?id=&isAnswerMode=` - Render a stored exercise
/// - `POST /api/sample-pdf` - Render the built-in sample worksheet
pub fn worksheet_routes(handlers: WorksheetHandlers) -> Router {
    Router::new()
        .route("/api/generate-pdf", post(generate_pdf).get(exercise_pdf))
        .route("/api/sample-pdf", post(sample_pdf))
        .with_state(handlers)
}
