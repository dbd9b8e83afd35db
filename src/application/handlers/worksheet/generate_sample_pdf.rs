//! GenerateSamplePdfHandler - Prints the built-in sample worksheet.

use std::sync::Arc;

use super::{GeneratePdfCommand, GeneratePdfHandler};
use crate::domain::samples::sample_worksheet;
use crate::domain::worksheet::WorksheetError;
use crate::ports::RenderedPdf;

/// Command to print the sample worksheet.
#[derive(Debug, Clone, Copy)]
pub struct GenerateSamplePdfCommand {
    pub answer_mode: bool,
}

/// Handler for the sample preview.
pub struct GenerateSamplePdfHandler {
    pdf_handler: Arc<GeneratePdfHandler>,
}

impl GenerateSamplePdfHandler {
    pub fn new(pdf_handler: Arc<GeneratePdfHandler>) -> Self {
        Self { pdf_handler }
    }

    pub async fn handle(&self, cmd: GenerateSamplePdfCommand) -> Result<RenderedPdf, WorksheetError> {
        let form = sample_worksheet(cmd.answer_mode);
        self.pdf_handler.handle(GeneratePdfCommand { form }).await
    }
}
