//! Worksheet module - the content model for printable worksheets.
//!
//! A worksheet is an ordered list of [`DocumentItem`]s: standalone questions
//! (long answer, fill-in-the-blank, multiple choice) and sections that group
//! example questions and required questions under a description.

mod errors;
mod form;
mod item;
mod question;
mod validation;

pub use errors::WorksheetError;
pub use form::WorksheetForm;
pub use item::{DocumentItem, Section};
pub use question::{
    FillQuestion, FilledText, LongQuestion, MultipleChoiceQuestion, Question, BLANK,
    FILL_PLACEHOLDER,
};
pub use validation::{ValidationIssue, ValidationIssues};

pub(crate) use form::collect_item_issues;
pub(crate) use validation::{child_path, IssueCollector};
