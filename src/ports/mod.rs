//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `TextMeasurer` - Font metrics used by the layout engine
//! - `WorksheetRenderer` - Paints a layout plan into a PDF
//! - `ExerciseRepository` - Persistence for stored exercises

mod exercise_repository;
mod text_measurer;
mod worksheet_renderer;

pub use exercise_repository::ExerciseRepository;
pub use text_measurer::TextMeasurer;
pub use worksheet_renderer::{RenderError, RenderedPdf, WorksheetRenderer, PDF_FILENAME};
