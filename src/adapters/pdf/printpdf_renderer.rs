//! printpdf based renderer adapter.
//!
//! Paints a [`LayoutPlan`] into a PDF. Layout coordinates are top-left origin
//! millimetres; PDF pages are bottom-left origin, so every `y` is flipped
//! against the page height.
//!
//! printpdf documents are not `Send`, so the whole document is built inside
//! a blocking task.

use std::sync::Arc;

use async_trait::async_trait;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb as PdfRgb,
};

use crate::adapters::fonts::FontSet;
use crate::domain::layout::{DrawOp, FontWeight, LayoutPlan, Page, Rgb};
use crate::ports::{RenderError, RenderedPdf, TextMeasurer, WorksheetRenderer};

const LAYER_NAME: &str = "Worksheet";

/// Stroke width of answer rules, in points.
const RULE_THICKNESS: f32 = 0.57;

/// Renderer producing PDFs with printpdf.
#[derive(Debug, Clone, Default)]
pub struct PrintPdfRenderer {
    fonts: FontSet,
}

impl PrintPdfRenderer {
    pub fn new(fonts: FontSet) -> Self {
        Self { fonts }
    }

    /// Renderer using the built-in Helvetica faces.
    pub fn builtin() -> Self {
        Self::new(FontSet::builtin())
    }
}

#[async_trait]
impl WorksheetRenderer for PrintPdfRenderer {
    async fn render(&self, plan: LayoutPlan, title: &str) -> Result<RenderedPdf, RenderError> {
        let fonts = self.fonts.clone();
        let title = title.to_string();
        let pages = plan.page_count();

        let bytes = tokio::task::spawn_blocking(move || render_plan(&plan, &title, &fonts))
            .await
            .map_err(|e| RenderError::TaskFailed(e.to_string()))??;

        tracing::debug!(pages, bytes = bytes.len(), "Rendered worksheet PDF");
        Ok(RenderedPdf::new(bytes))
    }

    fn measurer(&self) -> Arc<dyn TextMeasurer> {
        self.fonts.measurer()
    }
}

struct Faces {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Faces {
    fn load(doc: &PdfDocumentReference, fonts: &FontSet) -> Result<Self, RenderError> {
        let font_error = |e: printpdf::Error| RenderError::font(e.to_string());
        match fonts {
            FontSet::Builtin => Ok(Self {
                regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(font_error)?,
                bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(font_error)?,
            }),
            FontSet::TrueType { regular, bold, .. } => Ok(Self {
                regular: doc.add_external_font(regular.as_slice()).map_err(font_error)?,
                bold: doc.add_external_font(bold.as_slice()).map_err(font_error)?,
            }),
        }
    }

    fn for_weight(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

fn render_plan(plan: &LayoutPlan, title: &str, fonts: &FontSet) -> Result<Vec<u8>, RenderError> {
    let width = Mm(plan.page_size.width());
    let height = plan.page_size.height();
    let (doc, first_page, first_layer) = PdfDocument::new(title, width, Mm(height), LAYER_NAME);
    let faces = Faces::load(&doc, fonts)?;

    for (index, page) in plan.pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, Mm(height), LAYER_NAME)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);
        draw_page(&layer, page, &faces, height);
    }

    doc.save_to_bytes().map_err(|e| RenderError::pdf(e.to_string()))
}

fn draw_page(layer: &PdfLayerReference, page: &Page, faces: &Faces, page_height: f32) {
    layer.set_outline_color(pdf_color(Rgb::BLACK));
    layer.set_outline_thickness(RULE_THICKNESS);

    for op in &page.ops {
        match op {
            DrawOp::Text { x, y, text, style } => {
                layer.set_fill_color(pdf_color(style.color));
                layer.use_text(
                    text.as_str(),
                    style.size,
                    Mm(*x),
                    Mm(page_height - *y),
                    faces.for_weight(style.weight),
                );
            }
            DrawOp::Rule { x1, y1, x2, y2 } => {
                layer.add_line(Line {
                    points: vec![
                        (Point::new(Mm(*x1), Mm(page_height - *y1)), false),
                        (Point::new(Mm(*x2), Mm(page_height - *y2)), false),
                    ],
                    is_closed: false,
                });
            }
        }
    }
}

fn pdf_color(color: Rgb) -> Color {
    let (r, g, b) = color.to_unit();
    Color::Rgb(PdfRgb::new(r, g, b, None))
}
