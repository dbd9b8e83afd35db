//! Worksheet Renderer Port - turns a layout plan into a printable document.
//!
//! The domain lays a worksheet out into device-independent draw operations;
//! adapters (like `PrintPdfRenderer`) paint those operations into PDF bytes.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use super::TextMeasurer;
use crate::domain::layout::LayoutPlan;

/// Filename offered to clients downloading a worksheet.
pub const PDF_FILENAME: &str = "output.pdf";

/// Port for rendering laid-out worksheets.
///
/// # Contract
///
/// Implementations must:
/// - Draw every op of every page, in order, on a page of the plan's size
/// - Return a complete PDF document
/// - Expose a [`TextMeasurer`] matching the fonts they draw with
#[async_trait]
pub trait WorksheetRenderer: Send + Sync {
    /// Render `plan` to PDF bytes. `title` becomes the document title metadata.
    ///
    /// # Errors
    ///
    /// Returns `RenderError` if the document cannot be produced.
    async fn render(&self, plan: LayoutPlan, title: &str) -> Result<RenderedPdf, RenderError>;

    /// Measurer for the fonts this renderer embeds.
    fn measurer(&self) -> Arc<dyn TextMeasurer>;
}

/// A rendered PDF ready to send to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPdf {
    pub content: Vec<u8>,
    pub filename: String,
}

impl RenderedPdf {
    pub const CONTENT_TYPE: &'static str = "application/pdf";

    pub fn new(content: Vec<u8>) -> Self {
        Self {
            content,
            filename: PDF_FILENAME.to_string(),
        }
    }

    /// `Content-Disposition` header value.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.filename)
    }
}

/// Errors that can occur while rendering.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// Font data could not be loaded or embedded.
    #[error("Font error: {0}")]
    Font(String),

    /// The PDF library rejected the document.
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// The blocking render task panicked or was cancelled.
    #[error("Render task failed: {0}")]
    TaskFailed(String),
}

impl RenderError {
    pub fn font(reason: impl Into<String>) -> Self {
        Self::Font(reason.into())
    }

    pub fn pdf(reason: impl Into<String>) -> Self {
        Self::Pdf(reason.into())
    }
}
