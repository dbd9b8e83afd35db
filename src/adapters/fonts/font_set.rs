//! Font source shared by the renderer and the layout measurer.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use super::{HelveticaMetrics, TrueTypeMetrics};
use crate::ports::TextMeasurer;

/// Errors loading font files.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Failed to read font file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid font data in {name}: {reason}")]
    Parse { name: String, reason: String },
}

/// Which fonts worksheets are drawn with.
#[derive(Debug, Clone, Default)]
pub enum FontSet {
    /// PDF base-14 Helvetica and Helvetica-Bold; nothing is embedded.
    #[default]
    Builtin,
    /// Embedded TrueType faces, needed for scripts Helvetica lacks.
    TrueType {
        regular: Arc<Vec<u8>>,
        bold: Arc<Vec<u8>>,
        metrics: TrueTypeMetrics,
    },
}

impl FontSet {
    pub fn builtin() -> Self {
        FontSet::Builtin
    }

    /// Load a regular and a bold face from disk.
    pub fn from_files(regular: &Path, bold: &Path) -> Result<Self, FontError> {
        let read = |path: &Path| {
            std::fs::read(path).map_err(|source| FontError::Io {
                path: path.display().to_string(),
                source,
            })
        };
        let font_set = Self::from_bytes(read(regular)?, read(bold)?)?;
        tracing::info!(
            regular = %regular.display(),
            bold = %bold.display(),
            "Loaded TrueType fonts"
        );
        Ok(font_set)
    }

    pub fn from_bytes(regular: Vec<u8>, bold: Vec<u8>) -> Result<Self, FontError> {
        let metrics = TrueTypeMetrics::parse(&regular, &bold)?;
        Ok(FontSet::TrueType {
            regular: Arc::new(regular),
            bold: Arc::new(bold),
            metrics,
        })
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, FontSet::Builtin)
    }

    /// Measurer whose widths match what the renderer will draw.
    pub fn measurer(&self) -> Arc<dyn TextMeasurer> {
        match self {
            FontSet::Builtin => Arc::new(HelveticaMetrics::new()),
            FontSet::TrueType { metrics, .. } => Arc::new(metrics.clone()),
        }
    }
}
