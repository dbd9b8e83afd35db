//! PDF rendering configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::layout::{ChoiceOrder, LayoutOptions, PageSize, SectionLabels};

/// PDF rendering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
    #[serde(default)]
    pub page_size: PageSize,

    /// TrueType face for body text; built-in Helvetica when unset
    pub regular_font_path: Option<PathBuf>,

    /// TrueType face for titles and headings
    pub bold_font_path: Option<PathBuf>,

    /// Shuffle multiple-choice options
    #[serde(default = "default_shuffle_choices")]
    pub shuffle_choices: bool,

    /// Fixed seed for reproducible shuffles
    pub shuffle_seed: Option<u64>,

    #[serde(default = "default_examples_label")]
    pub examples_label: String,

    #[serde(default = "default_questions_label")]
    pub questions_label: String,
}

impl PdfConfig {
    /// Configured font pair, if any.
    pub fn font_paths(&self) -> Option<(&PathBuf, &PathBuf)> {
        match (&self.regular_font_path, &self.bold_font_path) {
            (Some(regular), Some(bold)) => Some((regular, bold)),
            _ => None,
        }
    }

    pub fn layout_options(&self) -> LayoutOptions {
        let choice_order = match (self.shuffle_choices, self.shuffle_seed) {
            (false, _) => ChoiceOrder::AsWritten,
            (true, Some(seed)) => ChoiceOrder::Seeded(seed),
            (true, None) => ChoiceOrder::Shuffled,
        };
        LayoutOptions {
            page_size: self.page_size,
            choice_order,
            labels: SectionLabels {
                examples: self.examples_label.clone(),
                questions: self.questions_label.clone(),
            },
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match (&self.regular_font_path, &self.bold_font_path) {
            (Some(regular), Some(bold)) => {
                for path in [regular, bold] {
                    if !path.is_file() {
                        return Err(ValidationError::FontNotFound(path.display().to_string()));
                    }
                }
            }
            (None, None) => {}
            _ => return Err(ValidationError::IncompleteFontPair),
        }
        if self.examples_label.trim().is_empty() || self.questions_label.trim().is_empty() {
            return Err(ValidationError::EmptyHeadingLabel);
        }
        Ok(())
    }
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            regular_font_path: None,
            bold_font_path: None,
            shuffle_choices: default_shuffle_choices(),
            shuffle_seed: None,
            examples_label: default_examples_label(),
            questions_label: default_questions_label(),
        }
    }
}

fn default_shuffle_choices() -> bool {
    true
}

fn default_examples_label() -> String {
    SectionLabels::default().examples
}

fn default_questions_label() -> String {
    SectionLabels::default().questions
}
