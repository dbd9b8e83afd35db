//! File-based Exercise Repository
//!
//! Stores each exercise as `<id>.yaml` under a base directory so the content
//! can be inspected and edited by hand.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::in_memory_exercise_repository::{not_found, sort_newest_first};
use crate::domain::exercise::Exercise;
use crate::domain::foundation::{DomainError, ErrorCode, ExerciseId};
use crate::ports::ExerciseRepository;

const EXTENSION: &str = "yaml";

/// File-based storage for exercises
#[derive(Debug, Clone)]
pub struct FileExerciseRepository {
    base_path: PathBuf,
}

impl FileExerciseRepository {
    /// Create a repository rooted at `base_path`. The directory is created on
    /// first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn file_path(&self, id: &ExerciseId) -> PathBuf {
        self.base_path.join(format!("{}.{}", id, EXTENSION))
    }

    async fn write(&self, exercise: &Exercise) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path).await.map_err(io_error)?;

        let yaml = serde_yaml::to_string(exercise).map_err(|e| {
            DomainError::new(ErrorCode::SerializationError, e.to_string())
        })?;

        fs::write(self.file_path(exercise.id()), yaml)
            .await
            .map_err(io_error)
    }

    async fn read(path: &Path) -> Result<Exercise, DomainError> {
        let yaml = fs::read_to_string(path).await.map_err(io_error)?;
        serde_yaml::from_str(&yaml).map_err(|e| {
            DomainError::new(ErrorCode::SerializationError, e.to_string())
                .with_detail("path", path.display().to_string())
        })
    }
}

fn io_error(err: std::io::Error) -> DomainError {
    DomainError::new(ErrorCode::StorageError, err.to_string())
}

#[async_trait]
impl ExerciseRepository for FileExerciseRepository {
    async fn save(&self, exercise: &Exercise) -> Result<(), DomainError> {
        self.write(exercise).await
    }

    async fn update(&self, exercise: &Exercise) -> Result<(), DomainError> {
        if !self.file_path(exercise.id()).exists() {
            return Err(not_found(exercise.id()));
        }
        self.write(exercise).await
    }

    async fn find_by_id(&self, id: &ExerciseId) -> Result<Option<Exercise>, DomainError> {
        let path = self.file_path(id);
        if !path.exists() {
            return Ok(None);
        }
        Self::read(&path).await.map(Some)
    }

    async fn list(&self) -> Result<Vec<Exercise>, DomainError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path).await.map_err(io_error)?;
        let mut exercises = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            match Self::read(&path).await {
                Ok(exercise) => exercises.push(exercise),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "Skipping unreadable exercise file");
                }
            }
        }

        sort_newest_first(&mut exercises);
        Ok(exercises)
    }

    async fn delete(&self, id: &ExerciseId) -> Result<(), DomainError> {
        let path = self.file_path(id);
        if !path.exists() {
            return Err(not_found(id));
        }
        fs::remove_file(&path).await.map_err(io_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::worksheet::{DocumentItem, FillQuestion, Question, Section};
    use tempfile::TempDir;

    fn exercise(title: &str) -> Exercise {
        let items: Vec<DocumentItem> = vec![Section {
            description: "Fill in".to_string(),
            example_questions: vec![],
            questions: vec![Question::Fill(FillQuestion {
                question_text: "Water boils at <<>> degrees.".to_string(),
                answer: "100".to_string(),
            })],
        }
        .into()];
        Exercise::new(ExerciseId::new(), title.to_string(), items).unwrap()
    }

    #[tokio::test]
    async fn save_writes_yaml_file_and_reads_it_back() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileExerciseRepository::new(temp_dir.path().join("exercises"));
        let exercise = exercise("Science");

        repo.save(&exercise).await.unwrap();

        let path = temp_dir
            .path()
            .join("exercises")
            .join(format!("{}.yaml", exercise.id()));
        assert!(path.exists());
        let loaded = repo.find_by_id(exercise.id()).await.unwrap();
        assert_eq!(loaded, Some(exercise));
    }

    #[tokio::test]
    async fn update_requires_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileExerciseRepository::new(temp_dir.path());

        let err = repo.update(&exercise("Missing")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ExerciseNotFound);
    }

    #[tokio::test]
    async fn list_skips_foreign_files() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileExerciseRepository::new(temp_dir.path());
        repo.save(&exercise("One")).await.unwrap();
        repo.save(&exercise("Two")).await.unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "not an exercise").unwrap();
        std::fs::write(temp_dir.path().join("broken.yaml"), ": not yaml [").unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn list_of_missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileExerciseRepository::new(temp_dir.path().join("absent"));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileExerciseRepository::new(temp_dir.path());
        let exercise = exercise("Temp");
        repo.save(&exercise).await.unwrap();

        repo.delete(exercise.id()).await.unwrap();

        assert!(repo.find_by_id(exercise.id()).await.unwrap().is_none());
        let err = repo.delete(exercise.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ExerciseNotFound);
    }
}
