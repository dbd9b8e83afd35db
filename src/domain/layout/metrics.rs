//! Page geometry and spacing constants. Lengths are millimetres, font sizes points.

use serde::{Deserialize, Serialize};

pub const FONT_SIZE: f32 = 12.0;
pub const LINE_HEIGHT: f32 = 7.0;
pub const PAGE_MARGIN: f32 = 20.0;

/// Width reserved left of numbered questions for `1.`, `2.`, ...
pub const QUESTION_NUMBER_WIDTH: f32 = 6.0;

pub const TITLE_SCALE: f32 = 1.5;
pub const HEADING_ADVANCE: f32 = LINE_HEIGHT * 1.5;

/// Distance from a text baseline down to the answer rule drawn under it.
pub const RULE_OFFSET: f32 = 2.0;

/// Multiple-choice geometry: the answer column takes this share of the
/// content width and is separated from the question column by the padding.
pub const ANSWER_COLUMN_RATIO: f32 = 0.2;
pub const CHOICE_COLUMN_PADDING: f32 = 24.0;
pub const ANSWER_LABEL: &str = "Ans:";
pub const ANSWER_LABEL_GAP: f32 = 2.0;
pub const CHOICE_SEPARATOR: &str = "   ";

pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Supported paper sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    pub fn width(self) -> f32 {
        match self {
            PageSize::A4 => 210.0,
            PageSize::Letter => 215.9,
        }
    }

    pub fn height(self) -> f32 {
        match self {
            PageSize::A4 => 297.0,
            PageSize::Letter => 279.4,
        }
    }

    /// Width available between the left and right margins.
    pub fn content_width(self) -> f32 {
        self.width() - PAGE_MARGIN * 2.0
    }

    /// Lowest baseline a block may reach before it must move to a new page.
    pub fn bottom_limit(self) -> f32 {
        self.height() - PAGE_MARGIN
    }
}
