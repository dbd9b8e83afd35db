//! CreateExerciseHandler - Command handler for storing new exercises.

use std::sync::Arc;

use crate::domain::exercise::{Exercise, ExerciseError};
use crate::domain::foundation::ExerciseId;
use crate::domain::worksheet::DocumentItem;
use crate::ports::ExerciseRepository;

/// Command to create a new exercise.
#[derive(Debug, Clone)]
pub struct CreateExerciseCommand {
    pub title: String,
    pub items: Vec<DocumentItem>,
}

/// Handler for creating exercises.
pub struct CreateExerciseHandler {
    repository: Arc<dyn ExerciseRepository>,
}

impl CreateExerciseHandler {
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateExerciseCommand) -> Result<Exercise, ExerciseError> {
        let exercise = Exercise::new(ExerciseId::new(), cmd.title, cmd.items)?;
        self.repository.save(&exercise).await?;

        tracing::info!(exercise_id = %exercise.id(), "Exercise created");
        Ok(exercise)
    }
}
