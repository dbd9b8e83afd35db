//! GenerateExercisePdfHandler - Prints a stored exercise.

use std::sync::Arc;

use crate::application::handlers::worksheet::{GeneratePdfCommand, GeneratePdfHandler};
use crate::domain::exercise::ExerciseError;
use crate::domain::foundation::ExerciseId;
use crate::ports::{ExerciseRepository, RenderedPdf};

/// Query to print a stored exercise as a question sheet or answer key.
#[derive(Debug, Clone, Copy)]
pub struct GenerateExercisePdfQuery {
    pub id: ExerciseId,
    pub answer_mode: bool,
}

pub struct GenerateExercisePdfHandler {
    repository: Arc<dyn ExerciseRepository>,
    pdf_handler: Arc<GeneratePdfHandler>,
}

impl GenerateExercisePdfHandler {
    pub fn new(
        repository: Arc<dyn ExerciseRepository>,
        pdf_handler: Arc<GeneratePdfHandler>,
    ) -> Self {
        Self {
            repository,
            pdf_handler,
        }
    }

    pub async fn handle(&self, query: GenerateExercisePdfQuery) -> Result<RenderedPdf, ExerciseError> {
        let exercise = self
            .repository
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| ExerciseError::not_found(query.id))?;

        let form = exercise.to_form(query.answer_mode);
        Ok(self.pdf_handler.handle(GeneratePdfCommand { form }).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::exercise::test_support::MockExerciseRepository;
    use crate::application::handlers::worksheet::MockRenderer;
    use crate::domain::layout::LayoutOptions;

    fn handler(
        repo: Arc<MockExerciseRepository>,
        renderer: Arc<MockRenderer>,
    ) -> GenerateExercisePdfHandler {
        let pdf_handler = Arc::new(GeneratePdfHandler::new(renderer, LayoutOptions::default()));
        GenerateExercisePdfHandler::new(repo, pdf_handler)
    }

    #[tokio::test]
    async fn prints_stored_exercise_with_its_title() {
        let repo = Arc::new(MockExerciseRepository::new());
        let existing = repo.seed("Stored sheet");
        let renderer = Arc::new(MockRenderer::new());

        handler(repo, renderer.clone())
            .handle(GenerateExercisePdfQuery {
                id: *existing.id(),
                answer_mode: true,
            })
            .await
            .unwrap();

        let rendered = renderer.rendered();
        assert_eq!(rendered[0].1, "Stored sheet");
        assert!(rendered[0].0.texts().any(|(_, text)| text == "Stored sheet"));
    }

    #[tokio::test]
    async fn unknown_exercise_is_not_found() {
        let renderer = Arc::new(MockRenderer::new());
        let id = ExerciseId::new();

        let result = handler(Arc::new(MockExerciseRepository::new()), renderer.clone())
            .handle(GenerateExercisePdfQuery {
                id,
                answer_mode: false,
            })
            .await;

        assert!(matches!(result, Err(ExerciseError::NotFound(found)) if found == id));
        assert!(renderer.rendered().is_empty());
    }

    #[tokio::test]
    async fn renderer_failure_is_rendering_error() {
        let repo = Arc::new(MockExerciseRepository::new());
        let existing = repo.seed("Broken");

        let result = handler(repo, Arc::new(MockRenderer::failing()))
            .handle(GenerateExercisePdfQuery {
                id: *existing.id(),
                answer_mode: false,
            })
            .await;

        assert!(matches!(result, Err(ExerciseError::Rendering(_))));
    }
}
