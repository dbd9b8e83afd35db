//! Worksheet layout engine.
//!
//! Layout is pure: given a form, options and a [`TextMeasurer`](crate::ports::TextMeasurer)
//! it produces a [`LayoutPlan`] of positioned text and rules per page. Turning
//! the plan into PDF bytes is the renderer's job.

mod canvas;
mod elements;
mod engine;
mod metrics;
mod shuffle;
mod style;
mod wrap;

pub use canvas::{DrawOp, LayoutCanvas, LayoutPlan, Page};
pub use elements::PageElement;
pub use engine::{layout_worksheet, LayoutOptions, SectionLabels};
pub use metrics::{
    PageSize, FONT_SIZE, LINE_HEIGHT, MM_PER_PT, PAGE_MARGIN, QUESTION_NUMBER_WIDTH,
};
pub use shuffle::ChoiceOrder;
pub use style::{FontWeight, Rgb, TextStyle};
pub use wrap::wrap_text;
