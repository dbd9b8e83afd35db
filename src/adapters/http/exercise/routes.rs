//! Route configuration for exercise endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_exercise, delete_exercise, get_exercise, list_exercises, update_exercise,
    ExerciseHandlers,
};

/// Creates the exercise router.
///
/// Routes:
/// - `POST /api/exercises` - Create an exercise
/// - `GET /api/exercises` - List exercises, newest first
/// - `GET /api/exercises/:id` - Fetch one exercise
/// - `PUT /api/exercises/:id` - Replace title and items
/// - `DELETE /api/exercises/:id` - Remove an exercise
pub fn exercise_routes(handlers: ExerciseHandlers) -> Router {
    Router::new()
        .route("/api/exercises", get(list_exercises).post(create_exercise))
        .route(
            "/api/exercises/:id",
            get(get_exercise).put(update_exercise).delete(delete_exercise),
        )
        .with_state(handlers)
}
