//! ListExercisesHandler - Query handler for all stored exercises.

use std::sync::Arc;

use crate::domain::exercise::{Exercise, ExerciseError};
use crate::ports::ExerciseRepository;

pub struct ListExercisesHandler {
    repository: Arc<dyn ExerciseRepository>,
}

impl ListExercisesHandler {
    pub fn new(repository: Arc<dyn ExerciseRepository>) -> Self {
        Self { repository }
    }

    /// Most recently updated first.
    pub async fn handle(&self) -> Result<Vec<Exercise>, ExerciseError> {
        Ok(self.repository.list().await?)
    }
}
