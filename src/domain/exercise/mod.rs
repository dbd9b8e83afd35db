//! Exercise module - reusable worksheets kept in the content store.

mod aggregate;
mod errors;

pub use aggregate::{Exercise, MAX_TITLE_LENGTH};
pub use errors::ExerciseError;
