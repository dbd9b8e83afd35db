//! HTTP DTOs for PDF generation endpoints.
//!
//! `POST /api/generate-pdf` takes the domain `WorksheetForm` directly, since
//! its JSON shape is the public wire format.

use serde::Deserialize;

/// Body of `POST /api/sample-pdf`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplePdfRequest {
    #[serde(default)]
    pub is_answer_mode: bool,
}

/// Query of `GET /api/generate-pdf`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePdfParams {
    pub id: String,
    #[serde(default)]
    pub is_answer_mode: bool,
}
