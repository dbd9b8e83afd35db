//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `fonts` - Text measurement (built-in Helvetica metrics, TrueType files)
//! - `pdf` - PDF rendering with printpdf
//! - `storage` - Exercise persistence (in-memory, YAML files)
//! - `http` - REST API (axum)

pub mod fonts;
pub mod http;
pub mod pdf;
pub mod storage;

pub use fonts::{FontError, FontSet};
pub use pdf::PrintPdfRenderer;
pub use storage::{FileExerciseRepository, InMemoryExerciseRepository};
