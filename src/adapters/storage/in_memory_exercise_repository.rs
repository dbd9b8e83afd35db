//! In-Memory Exercise Repository
//!
//! Keeps exercises in a map. Used by default in development and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::exercise::Exercise;
use crate::domain::foundation::{DomainError, ErrorCode, ExerciseId};
use crate::ports::ExerciseRepository;

/// In-memory storage for exercises
#[derive(Debug, Clone, Default)]
pub struct InMemoryExerciseRepository {
    exercises: Arc<RwLock<HashMap<ExerciseId, Exercise>>>,
}

impl InMemoryExerciseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) fn not_found(id: &ExerciseId) -> DomainError {
    DomainError::new(ErrorCode::ExerciseNotFound, format!("Exercise not found: {}", id))
        .with_detail("id", id.to_string())
}

/// Most recently updated first; ties broken by id for a stable order.
pub(crate) fn sort_newest_first(exercises: &mut [Exercise]) {
    exercises.sort_by(|a, b| {
        b.updated_at()
            .cmp(a.updated_at())
            .then_with(|| a.id().to_string().cmp(&b.id().to_string()))
    });
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    async fn save(&self, exercise: &Exercise) -> Result<(), DomainError> {
        let mut exercises = self.exercises.write().await;
        exercises.insert(*exercise.id(), exercise.clone());
        Ok(())
    }

    async fn update(&self, exercise: &Exercise) -> Result<(), DomainError> {
        let mut exercises = self.exercises.write().await;
        match exercises.get_mut(exercise.id()) {
            Some(stored) => {
                *stored = exercise.clone();
                Ok(())
            }
            None => Err(not_found(exercise.id())),
        }
    }

    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, DomainError> {
        let exercises = self.exercises.read().await;
        Ok(exercises.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Exercise>, DomainError> {
        let mut all: Vec<Exercise> = self.exercises.read().await.values().cloned().collect();
        sort_newest_first(&mut all);
        Ok(all)
    }

    async fn delete(&self, id: &ExerciseId) -> Result<(), DomainError> {
        self.exercises
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}
