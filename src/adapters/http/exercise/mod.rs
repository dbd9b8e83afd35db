//! HTTP adapter for the exercise collection.

mod dto;
mod handlers;
mod routes;

pub use dto::{ExerciseListResponse, ExerciseRequest, ExerciseResponse, ExerciseSummaryResponse};
pub use handlers::ExerciseHandlers;
pub use routes::exercise_routes;
