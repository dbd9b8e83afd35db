//! UpdateExerciseHandler - Command handler for replacing exercise content.

use std::sync::Arc;

use crate::domain::exercise::{Exercise, ExerciseError};
use crate::domain::foundation::ExerciseId;
use crate::domain::worksheet::DocumentItem;
use crate::ports::ExerciseRepository;

/// Command to replace an exercise's title and items.
#[derive(Debug, Clone)]
pub struct UpdateExerciseCommand {
    pub id: ExerciseId,
    pub title: String,
    pub items: Vec<DocumentItem>,
}

/// Handler for updating exercises.
pub struct UpdateExerciseHandler {
    repository: Arc<dyn ExerciseRepository>,
}

impl UpdateExerciseHandler {
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateExerciseCommand) -> Result<Exercise, ExerciseError> {
        let mut exercise = self
            .repository
            .find_by_id(&cmd.id)
            .await?
            .ok_or_else(|| ExerciseError::not_found(cmd.id))?;

        exercise.update(cmd.title, cmd.items)?;
        self.repository.update(&exercise).await?;

        tracing::info!(exercise_id = %exercise.id(), "Exercise updated");
        Ok(exercise)
    }
}
