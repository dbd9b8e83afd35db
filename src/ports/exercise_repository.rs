//! Exercise repository port.
//!
//! Defines the contract for persisting and retrieving stored exercises.

use crate::domain::exercise::Exercise;
use crate::domain::foundation::{DomainError, ExerciseId};
use async_trait::async_trait;

/// Repository port for Exercise persistence.
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Save a new exercise.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, exercise: &Exercise) -> Result<(), DomainError>;

    /// Replace an existing exercise.
    ///
    /// # Errors
    ///
    /// - `ExerciseNotFound` if the exercise doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, exercise: &Exercise) -> Result<(), DomainError>;

    /// Find an exercise by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, DomainError>;

    /// All exercises, most recently updated first.
    async fn list(&self) -> Result<Vec<Exercise>, DomainError>;

    /// Delete an exercise.
    ///
    /// # Errors
    ///
    /// - `ExerciseNotFound` if the exercise doesn't exist
    /// - `StorageError` on persistence failure
    async fn delete(&self, id: &ExerciseId) -> Result<(), DomainError>;
}
