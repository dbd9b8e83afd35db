//! Storage Adapters
//!
//! Implementations of the ExerciseRepository port.
//!
//! ## Available Adapters
//!
//! - **FileExerciseRepository** - Stores exercises as YAML files on disk
//! - **InMemoryExerciseRepository** - Stores exercises in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileExerciseRepository, InMemoryExerciseRepository};
//!
//! // Production: file-based storage
//! let repo = FileExerciseRepository::new("./data/exercises");
//!
//! // Testing: in-memory storage
//! let repo = InMemoryExerciseRepository::new();
//! ```

mod file_exercise_repository;
mod in_memory_exercise_repository;

pub use file_exercise_repository::FileExerciseRepository;
pub use in_memory_exercise_repository::InMemoryExerciseRepository;
