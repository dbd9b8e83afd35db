//! Worksheet printing handlers.

mod generate_pdf;
mod generate_sample_pdf;

pub use generate_pdf::{GeneratePdfCommand, GeneratePdfHandler};
pub use generate_sample_pdf::{GenerateSamplePdfCommand, GenerateSamplePdfHandler};

#[cfg(test)]
pub(crate) use generate_pdf::tests::MockRenderer;
