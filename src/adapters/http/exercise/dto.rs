//! HTTP DTOs for exercise endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::exercise::Exercise;
use crate::domain::worksheet::DocumentItem;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body for creating or replacing an exercise.
///
/// Missing fields default to empty so validation can report them by path.
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<DocumentItem>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full exercise for API responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseResponse {
    pub id: String,
    pub title: String,
    pub items: Vec<DocumentItem>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id().to_string(),
            title: exercise.title().to_string(),
            items: exercise.items().to_vec(),
            created_at: exercise.created_at().to_rfc3339(),
            updated_at: exercise.updated_at().to_rfc3339(),
        }
    }
}

/// Exercise summary for list responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSummaryResponse {
    pub id: String,
    pub title: String,
    pub item_count: usize,
    pub question_count: usize,
    pub updated_at: String,
}

impl From<&Exercise> for ExerciseSummaryResponse {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id().to_string(),
            title: exercise.title().to_string(),
            item_count: exercise.items().len(),
            question_count: exercise.items().iter().map(DocumentItem::question_count).sum(),
            updated_at: exercise.updated_at().to_rfc3339(),
        }
    }
}

/// Newest-first list of exercises.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseListResponse {
    pub items: Vec<ExerciseSummaryResponse>,
    pub total: usize,
}

impl From<Vec<Exercise>> for ExerciseListResponse {
    fn from(exercises: Vec<Exercise>) -> Self {
        Self {
            total: exercises.len(),
            items: exercises.iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ExerciseId;
    use crate::domain::worksheet::{LongQuestion, Question, Section};
    use serde_json::json;

    fn exercise() -> Exercise {
        let section = Section {
            description: "Warm up".to_string(),
            example_questions: vec![Question::Long(LongQuestion {
                question_text: "Example".to_string(),
                answer: "Shown".to_string(),
            })],
            questions: vec![Question::Long(LongQuestion {
                question_text: "Q".to_string(),
                answer: "A".to_string(),
            })],
        };
        Exercise::new(ExerciseId::new(), "Unit 3".to_string(), vec![section.into()]).unwrap()
    }

    #[test]
    fn request_defaults_missing_fields() {
        let req: ExerciseRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.title.is_empty());
        assert!(req.items.is_empty());
    }

    #[test]
    fn response_uses_camel_case_and_wire_items() {
        let value = serde_json::to_value(ExerciseResponse::from(exercise())).unwrap();
        assert_eq!(value["title"], "Unit 3");
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["items"][0]["type"], "section");
    }

    #[test]
    fn summary_counts_examples_and_questions() {
        let summary = ExerciseSummaryResponse::from(&exercise());
        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.question_count, 2);
    }
}
