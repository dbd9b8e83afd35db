//! DeleteExerciseHandler - Command handler for removing exercises.

use std::sync::Arc;

use crate::domain::exercise::ExerciseError;
use crate::domain::foundation::ExerciseId;
use crate::ports::ExerciseRepository;

/// Command to delete an exercise.
#[derive(Debug, Clone, Copy)]
pub struct DeleteExerciseCommand {
    pub id: ExerciseId,
}

pub struct DeleteExerciseHandler {
    repository: Arc<dyn ExerciseRepository>,
}

impl DeleteExerciseHandler {
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteExerciseCommand) -> Result<(), ExerciseError> {
        self.repository.delete(&cmd.id).await?;
        tracing::info!(exercise_id = %cmd.id, "Exercise deleted");
        Ok(())
    }
}
