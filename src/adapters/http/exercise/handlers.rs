//! HTTP handlers for exercise endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::exercise::{
    CreateExerciseCommand, CreateExerciseHandler, DeleteExerciseCommand, DeleteExerciseHandler,
    GetExerciseHandler, GetExerciseQuery, ListExercisesHandler, UpdateExerciseCommand,
    UpdateExerciseHandler,
};
use crate::domain::foundation::ExerciseId;

use super::dto::{ExerciseListResponse, ExerciseRequest, ExerciseResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ExerciseHandlers {
    create_handler: Arc<CreateExerciseHandler>,
    update_handler: Arc<UpdateExerciseHandler>,
    get_handler: Arc<GetExerciseHandler>,
    list_handler: Arc<ListExercisesHandler>,
    delete_handler: Arc<DeleteExerciseHandler>,
}

impl ExerciseHandlers {
    pub fn new(
        create_handler: Arc<CreateExerciseHandler>,
        update_handler: Arc<UpdateExerciseHandler>,
        get_handler: Arc<GetExerciseHandler>,
        list_handler: Arc<ListExercisesHandler>,
        delete_handler: Arc<DeleteExerciseHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            get_handler,
            list_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/exercises - Create an exercise
pub async fn create_exercise(
    State(handlers): State<ExerciseHandlers>,
    payload: Result<Json<ExerciseRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let exercise = handlers
        .create_handler
        .handle(CreateExerciseCommand {
            title: req.title,
            items: req.items,
        })
        .await?;

    let response: ExerciseResponse = exercise.into();
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// GET /api/exercises - List exercises
pub async fn list_exercises(
    State(handlers): State<ExerciseHandlers>,
) -> Result<Json<ExerciseListResponse>, ApiError> {
    let exercises = handlers.list_handler.handle().await?;
    Ok(Json(exercises.into()))
}

/// GET /api/exercises/:id - Fetch an exercise
pub async fn get_exercise(
    State(handlers): State<ExerciseHandlers>,
    Path(id): Path<String>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let id = parse_id(&id)?;
    let exercise = handlers.get_handler.handle(GetExerciseQuery { id }).await?;
    Ok(Json(exercise.into()))
}

/// PUT /api/exercises/:id - Replace an exercise's content
pub async fn update_exercise(
    State(handlers): State<ExerciseHandlers>,
    Path(id): Path<String>,
    payload: Result<Json<ExerciseRequest>, JsonRejection>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(req) = payload?;
    let exercise = handlers
        .update_handler
        .handle(UpdateExerciseCommand {
            id,
            title: req.title,
            items: req.items,
        })
        .await?;
    Ok(Json(exercise.into()))
}

/// DELETE /api/exercises/:id - Remove an exercise
pub async fn delete_exercise(
    State(handlers): State<ExerciseHandlers>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    handlers
        .delete_handler
        .handle(DeleteExerciseCommand { id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<ExerciseId, ApiError> {
    raw.parse::<ExerciseId>()
        .map_err(|_| ApiError::bad_request("Invalid exercise ID"))
}
