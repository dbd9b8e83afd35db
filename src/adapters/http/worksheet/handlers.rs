//! HTTP handlers for PDF generation endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Response,
    Json,
};

use crate::adapters::http::error::{pdf_response, ApiError};
use crate::application::handlers::exercise::{
    GenerateExercisePdfHandler, GenerateExercisePdfQuery,
};
use crate::application::handlers::worksheet::{
    GeneratePdfCommand, GeneratePdfHandler, GenerateSamplePdfCommand, GenerateSamplePdfHandler,
};
use crate::domain::foundation::ExerciseId;
use crate::domain::worksheet::WorksheetForm;

use super::dto::{ExercisePdfParams, SamplePdfRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WorksheetHandlers {
    generate_handler: Arc<GeneratePdfHandler>,
    sample_handler: Arc<GenerateSamplePdfHandler>,
    exercise_pdf_handler: Arc<GenerateExercisePdfHandler>,
}

impl WorksheetHandlers {
    pub fn new(
        generate_handler: Arc<GeneratePdfHandler>,
        sample_handler: Arc<GenerateSamplePdfHandler>,
        exercise_pdf_handler: Arc<GenerateExercisePdfHandler>,
    ) -> Self {
        Self {
            generate_handler,
            sample_handler,
            exercise_pdf_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/generate-pdf - Render a submitted worksheet
pub async fn generate_pdf(
    State(handlers): State<WorksheetHandlers>,
    payload: Result<Json<WorksheetForm>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(form) = payload?;
    let pdf = handlers
        .generate_handler
        .handle(GeneratePdfCommand { form })
        .await?;
    Ok(pdf_response(pdf))
}

/// GET /api/generate-pdf?id=&isAnswerMode= - Render a stored exercise
pub async fn exercise_pdf(
    State(handlers): State<WorksheetHandlers>,
    params: Result<Query<ExercisePdfParams>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(params) = params?;
    let id = params
        .id
        .parse::<ExerciseId>()
        .map_err(|_| ApiError::bad_request("Invalid exercise ID"))?;

    let pdf = handlers
        .exercise_pdf_handler
        .handle(GenerateExercisePdfQuery {
            id,
            answer_mode: params.is_answer_mode,
        })
        .await?;
    Ok(pdf_response(pdf))
}

/// POST /api/sample-pdf - Render the sample worksheet
pub async fn sample_pdf(
    State(handlers): State<WorksheetHandlers>,
    payload: Result<Json<SamplePdfRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let pdf = handlers
        .sample_handler
        .handle(GenerateSamplePdfCommand {
            answer_mode: req.is_answer_mode,
        })
        .await?;
    Ok(pdf_response(pdf))
}
