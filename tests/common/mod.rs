//! Shared wiring for HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;

use worksheet_builder::adapters::http::{api_router, ExerciseHandlers, WorksheetHandlers};
use worksheet_builder::adapters::{InMemoryExerciseRepository, PrintPdfRenderer};
use worksheet_builder::application::{
    CreateExerciseHandler, DeleteExerciseHandler, GenerateExercisePdfHandler, GeneratePdfHandler,
    GenerateSamplePdfHandler, GetExerciseHandler, ListExercisesHandler, UpdateExerciseHandler,
};
use worksheet_builder::domain::layout::{ChoiceOrder, LayoutOptions};
use worksheet_builder::ports::ExerciseRepository;

/// Full router backed by the real PDF renderer and an in-memory store.
pub fn app() -> Router {
    let repository: Arc<dyn ExerciseRepository> = Arc::new(InMemoryExerciseRepository::new());
    let options = LayoutOptions {
        choice_order: ChoiceOrder::Seeded(7),
        ..LayoutOptions::default()
    };
    let generate = Arc::new(GeneratePdfHandler::new(
        Arc::new(PrintPdfRenderer::builtin()),
        options,
    ));

    let worksheet = WorksheetHandlers::new(
        generate.clone(),
        Arc::new(GenerateSamplePdfHandler::new(generate.clone())),
        Arc::new(GenerateExercisePdfHandler::new(repository.clone(), generate)),
    );
    let exercises = ExerciseHandlers::new(
        Arc::new(CreateExerciseHandler::new(repository.clone())),
        Arc::new(UpdateExerciseHandler::new(repository.clone())),
        Arc::new(GetExerciseHandler::new(repository.clone())),
        Arc::new(ListExercisesHandler::new(repository.clone())),
        Arc::new(DeleteExerciseHandler::new(repository)),
    );

    api_router(worksheet, exercises)
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
