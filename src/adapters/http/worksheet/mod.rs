//! HTTP adapter for PDF generation endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ExercisePdfParams, SamplePdfRequest};
pub use handlers::WorksheetHandlers;
pub use routes::worksheet_routes;
