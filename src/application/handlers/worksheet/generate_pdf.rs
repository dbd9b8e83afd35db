//! GeneratePdfHandler - Validates, lays out and renders a worksheet.

use std::sync::Arc;

use crate::domain::layout::{layout_worksheet, LayoutOptions};
use crate::domain::worksheet::{WorksheetError, WorksheetForm};
use crate::ports::{RenderedPdf, WorksheetRenderer};

/// Command to print a submitted worksheet.
#[derive(Debug, Clone)]
pub struct GeneratePdfCommand {
    pub form: WorksheetForm,
}

/// Handler turning worksheet forms into PDFs.
pub struct GeneratePdfHandler {
    renderer: Arc<dyn WorksheetRenderer>,
    options: LayoutOptions,
}

impl GeneratePdfHandler {
    pub fn new(renderer: Arc<dyn WorksheetRenderer>, options: LayoutOptions) -> Self {
        Self { renderer, options }
    }

    pub async fn handle(&self, cmd: GeneratePdfCommand) -> Result<RenderedPdf, WorksheetError> {
        let form = cmd.form;

        // 1. Reject invalid content before any layout work
        form.validate()?;

        // 2. Lay out with the renderer's own font metrics
        let measurer = self.renderer.measurer();
        let plan = layout_worksheet(&form, &self.options, measurer.as_ref());

        // 3. Paint
        let pages = plan.page_count();
        let pdf = self
            .renderer
            .render(plan, &form.title)
            .await
            .map_err(|e| WorksheetError::rendering(e.to_string()))?;

        tracing::info!(
            items = form.items.len(),
            answer_mode = form.is_answer_mode,
            pages,
            bytes = pdf.content.len(),
            "Generated worksheet PDF"
        );
        Ok(pdf)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::layout::{FontWeight, LayoutPlan};
    use crate::domain::worksheet::{DocumentItem, FillQuestion, LongQuestion, Question};
    use crate::ports::{RenderError, TextMeasurer};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CharCount;

    impl TextMeasurer for CharCount {
        fn text_width(&self, text: &str, _size: f32, _weight: FontWeight) -> f32 {
            text.chars().count() as f32 * 2.0
        }
    }

    /// Renderer that records plans instead of painting them.
    pub(crate) struct MockRenderer {
        plans: Mutex<Vec<(LayoutPlan, String)>>,
        fail: bool,
    }

    impl MockRenderer {
        pub(crate) fn new() -> Self {
            Self {
                plans: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                plans: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        pub(crate) fn rendered(&self) -> Vec<(LayoutPlan, String)> {
            self.plans.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WorksheetRenderer for MockRenderer {
        async fn render(&self, plan: LayoutPlan, title: &str) -> Result<RenderedPdf, RenderError> {
            if self.fail {
                return Err(RenderError::pdf("simulated failure"));
            }
            self.plans.lock().unwrap().push((plan, title.to_string()));
            Ok(RenderedPdf::new(b"%PDF-mock".to_vec()))
        }

        fn measurer(&self) -> Arc<dyn TextMeasurer> {
            Arc::new(CharCount)
        }
    }

    fn valid_form(answer_mode: bool) -> WorksheetForm {
        let items: Vec<DocumentItem> = vec![
            Question::Long(LongQuestion {
                question_text: "Describe the water cycle".to_string(),
                answer: "Evaporation, condensation, precipitation".to_string(),
            })
            .into(),
            Question::Fill(FillQuestion {
                question_text: "Ice melts at <<>> degrees".to_string(),
                answer: "0".to_string(),
            })
            .into(),
        ];
        WorksheetForm::new("Science", items, answer_mode)
    }

    #[tokio::test]
    async fn renders_valid_form() {
        let renderer = Arc::new(MockRenderer::new());
        let handler = GeneratePdfHandler::new(renderer.clone(), LayoutOptions::default());

        let pdf = handler
            .handle(GeneratePdfCommand {
                form: valid_form(true),
            })
            .await
            .unwrap();

        assert_eq!(pdf.content, b"%PDF-mock");
        let rendered = renderer.rendered();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].1, "Science");
        assert!(rendered[0].0.texts().any(|(_, text)| text == "0"));
    }

    #[tokio::test]
    async fn invalid_form_is_not_rendered() {
        let renderer = Arc::new(MockRenderer::new());
        let handler = GeneratePdfHandler::new(renderer.clone(), LayoutOptions::default());

        let result = handler
            .handle(GeneratePdfCommand {
                form: WorksheetForm::new("", vec![], false),
            })
            .await;

        match result {
            Err(WorksheetError::ValidationFailed(issues)) => assert!(issues.has_path("items")),
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert!(renderer.rendered().is_empty());
    }

    #[tokio::test]
    async fn renderer_failure_becomes_rendering_error() {
        let handler =
            GeneratePdfHandler::new(Arc::new(MockRenderer::failing()), LayoutOptions::default());

        let result = handler
            .handle(GeneratePdfCommand {
                form: valid_form(false),
            })
            .await;

        assert!(matches!(result, Err(WorksheetError::Rendering(msg)) if msg.contains("simulated")));
    }
}
