//! GetExerciseHandler - Query handler for a single exercise.

use std::sync::Arc;

use crate::domain::exercise::{Exercise, ExerciseError};
use crate::domain::foundation::ExerciseId;
use crate::ports::ExerciseRepository;

/// Query to get an exercise by ID.
#[derive(Debug, Clone, Copy)]
pub struct GetExerciseQuery {
    pub id: ExerciseId,
}

pub struct GetExerciseHandler {
    repository: Arc<dyn ExerciseRepository>,
}

impl GetExerciseHandler {
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetExerciseQuery) -> Result<Exercise, ExerciseError> {
        self.repository
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| ExerciseError::not_found(query.id))
    }
}
