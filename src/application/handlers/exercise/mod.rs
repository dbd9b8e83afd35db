//! Exercise command and query handlers.

mod create_exercise;
mod delete_exercise;
mod generate_exercise_pdf;
mod get_exercise;
mod list_exercises;
mod update_exercise;

pub use create_exercise::{CreateExerciseCommand, CreateExerciseHandler};
pub use delete_exercise::{DeleteExerciseCommand, DeleteExerciseHandler};
pub use generate_exercise_pdf::{GenerateExercisePdfHandler, GenerateExercisePdfQuery};
pub use get_exercise::{GetExerciseHandler, GetExerciseQuery};
pub use list_exercises::ListExercisesHandler;
pub use update_exercise::{UpdateExerciseCommand, UpdateExerciseHandler};
